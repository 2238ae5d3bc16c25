//! Prefix scanning over single index files.

use crate::common::{TestProject, sample_index};
use tagjump::{Locator, TagEntry, scan_index};

fn scan(project: &TestProject, query: &str) -> Vec<TagEntry> {
    let mut entries = Vec::new();
    scan_index(&project.path().join("tags"), query, &mut entries).unwrap();
    entries
}

fn names(entries: &[TagEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn prefix_returns_exactly_the_contiguous_run() {
    let project = TestProject::new();
    project.add_file("tags", sample_index::SORTED);

    for (query, expected) in [
        ("ba", vec!["bar", "bar_init", "baz"]),
        ("bar", vec!["bar", "bar_init"]),
        ("foo", vec!["foo", "foo"]),
        ("z", vec!["zeta"]),
        ("a", vec!["alpha"]),
        ("q", vec![]),
    ] {
        assert_eq!(names(&scan(&project, query)), expected, "query {query:?}");
    }
}

#[test]
fn entries_after_the_first_miss_are_never_returned() {
    let project = TestProject::new();
    // Deliberately unsorted: the second "foo" sits after a non-matching line.
    project.add_file("tags", "foo\ta.c\t1\nmain\tm.c\t2\nfoo\tb.c\t3\n");

    let entries = scan(&project, "foo");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].location.ends_with("a.c"));
}

#[test]
fn relative_paths_resolve_against_the_index_directory() {
    let project = TestProject::new();
    project.add_file("tags", sample_index::BASIC);

    let foo = scan(&project, "foo");
    assert_eq!(foo.len(), 1);
    assert_eq!(foo[0].location, project.path().join("src/a.c"));
    assert_eq!(foo[0].locator, Locator::Line(10));

    let bar = scan(&project, "ba");
    assert_eq!(names(&bar), ["bar"]);
    assert_eq!(bar[0].location, project.path().join("src/b.c"));
    assert_eq!(bar[0].locator, Locator::Pattern("int bar(void)".to_string()));
}

#[test]
fn rooted_paths_are_kept_verbatim() {
    let project = TestProject::new();
    project.add_file("tags", "main\t/usr/src/main.c\t/^int main()$/;\"\tf\n");

    let entries = scan(&project, "main");
    assert_eq!(entries[0].location.to_str(), Some("/usr/src/main.c"));
    assert_eq!(entries[0].locator, Locator::Pattern("int main()".to_string()));
}

#[test]
fn malformed_line_inside_run_ends_it() {
    let project = TestProject::new();
    project.add_file("tags", "foo\ta.c\t1\nfoo_broken\n\nfoo_more\tb.c\t2\n");

    assert_eq!(names(&scan(&project, "foo")), ["foo"]);
}

#[test]
fn blank_lines_and_crlf_do_not_disturb_the_run() {
    let project = TestProject::new();
    project.add_file("tags", "foo\ta.c\t1\r\n\r\nfoo_x\tb.c\t/^x$/\r\n");

    let entries = scan(&project, "foo");
    assert_eq!(names(&entries), ["foo", "foo_x"]);
    assert_eq!(entries[1].locator, Locator::Pattern("x".to_string()));
}

#[test]
fn non_utf8_bytes_do_not_fail_the_scan() {
    let project = TestProject::new();
    let index = project.path().join("tags");
    std::fs::write(&index, b"caf\xe9\tx.c\t1\nfoo\ta.c\t7\n").unwrap();

    let mut entries = Vec::new();
    let found = scan_index(&index, "foo", &mut entries).unwrap();
    assert_eq!(found, 1);
    assert_eq!(entries[0].locator, Locator::Line(7));
}

#[test]
fn missing_index_is_an_error() {
    let project = TestProject::new();
    let mut entries = Vec::new();
    let err = scan_index(&project.path().join("tags"), "foo", &mut entries).unwrap_err();
    assert!(matches!(err, tagjump::TagError::IndexRead { .. }));
}
