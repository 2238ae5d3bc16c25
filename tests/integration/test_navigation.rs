//! End-to-end navigation through the navigator with real files.

use crate::common::{MockEditor, RecordingRegistry, ScriptedPrompt, TestProject, sample_index};
use tagjump::{Command, Editor, JumpOutcome, JumpRecord, Locator};

fn basic_project() -> TestProject {
    let project = TestProject::new();
    project.add_file("tags", sample_index::BASIC);
    project.add_file("src/a.c", sample_index::A_C);
    project.add_file("src/b.c", sample_index::B_C);
    project.add_file("main.c", "int main(void)\n{\n    return foo();\n}\n");
    project
}

#[test]
fn numeric_locator_jumps_without_prompting() {
    let project = basic_project();
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&project.path().join("main.c"));
    let mut prompt = ScriptedPrompt::default();

    let outcome = navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();

    let JumpOutcome::Jumped { entry, .. } = outcome else {
        panic!("expected a jump, got {outcome:?}");
    };
    assert_eq!(entry.location, project.path().join("src/a.c"));
    assert_eq!(entry.locator, Locator::Line(10));
    assert!(prompt.shown.is_empty());
    assert_eq!(editor.file, Some(project.path().join("src/a.c")));
    assert_eq!(editor.line(), 10);
    assert!(editor.buffer_lines()[9].contains("int foo(void)"));
}

#[test]
fn pattern_locator_finds_first_matching_line() {
    let project = basic_project();
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&project.path().join("main.c"));
    let mut prompt = ScriptedPrompt::default();

    let outcome = navigator
        .goto_tag(&mut editor, &mut prompt, Some("ba"))
        .unwrap();

    let JumpOutcome::Jumped { entry, .. } = outcome else {
        panic!("expected a jump, got {outcome:?}");
    };
    assert_eq!(entry.name, "bar");
    assert_eq!(entry.location, project.path().join("src/b.c"));
    assert_eq!(entry.locator, Locator::Pattern("int bar(void)".to_string()));
    assert_eq!(editor.line(), 3);
}

#[test]
fn choosing_second_row_jumps_there_and_records_both_ends() {
    let project = TestProject::new();
    project.add_file("tags", sample_index::SORTED);
    project.add_file("src/a.c", sample_index::A_C);
    project.add_file("src/c.c", sample_index::C_C);
    let main = project.add_file("main.c", "foo();\n");

    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&main);
    let mut prompt = ScriptedPrompt::answering([Some(1)]);
    let before = navigator.history().position();

    let outcome = navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();

    assert_eq!(prompt.shown.len(), 1);
    let list = &prompt.shown[0];
    assert_eq!(list.rows.len(), 2);
    assert_eq!(list.search_column, 1);
    assert_eq!(list.rows[0].file_name, "a.c");
    assert_eq!(list.rows[1].file_name, "c.c");
    assert_eq!(list.rows[1].locator, "static int foo;");

    let JumpOutcome::Jumped { from, to, .. } = outcome else {
        panic!("expected a jump, got {outcome:?}");
    };
    assert_eq!(from, Some(JumpRecord::new(&main, 0)));
    assert_eq!(to.location, project.path().join("src/c.c"));
    assert_eq!(editor.line(), 2);
    assert_eq!(navigator.history().position(), before + 2);
}

#[test]
fn cancelling_the_choice_changes_nothing() {
    let project = TestProject::new();
    project.add_file("tags", sample_index::SORTED);
    let main = project.add_file("main.c", "foo();\n");

    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&main);
    let mut prompt = ScriptedPrompt::answering([None]);

    let outcome = navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();
    assert_eq!(outcome, JumpOutcome::Cancelled);
    assert_eq!(editor.file, Some(main));
    assert!(navigator.history().is_empty());
}

#[test]
fn out_of_range_choice_counts_as_cancel() {
    let project = TestProject::new();
    project.add_file("tags", sample_index::SORTED);
    let main = project.add_file("main.c", "foo();\n");

    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&main);
    let mut prompt = ScriptedPrompt::answering([Some(7)]);

    let outcome = navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();
    assert_eq!(outcome, JumpOutcome::Cancelled);
}

#[test]
fn two_jumps_then_back_and_forward_retrace_the_path() {
    let project = basic_project();
    let main = project.path().join("main.c");
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&main);
    editor.goto_line(3);
    let start = editor.position;
    let mut prompt = ScriptedPrompt::default();

    navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();
    navigator
        .goto_tag(&mut editor, &mut prompt, Some("bar"))
        .unwrap();
    let end = (editor.file.clone(), editor.position);

    navigator.jump_back(&mut editor).unwrap();
    navigator.jump_back(&mut editor).unwrap();
    assert_eq!(editor.file.as_deref(), Some(main.as_path()));
    assert_eq!(editor.position, start);

    navigator.jump_forward(&mut editor).unwrap();
    navigator.jump_forward(&mut editor).unwrap();
    assert_eq!((editor.file.clone(), editor.position), end);
}

#[test]
fn new_jump_after_going_back_discards_the_future() {
    let project = basic_project();
    let main = project.path().join("main.c");
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&main);
    let mut prompt = ScriptedPrompt::default();

    navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();
    navigator
        .goto_tag(&mut editor, &mut prompt, Some("bar"))
        .unwrap();
    assert_eq!(navigator.history().len(), 3);

    navigator.jump_back(&mut editor).unwrap();
    navigator.jump_back(&mut editor).unwrap();
    navigator
        .goto_tag(&mut editor, &mut prompt, Some("bar"))
        .unwrap();

    let history = navigator.history();
    assert_eq!(history.position(), history.len());
    assert_eq!(history.len(), 2);
    assert_eq!(
        history.current().map(|r| r.location.clone()),
        Some(project.path().join("src/b.c"))
    );
    assert_eq!(
        navigator.jump_forward(&mut editor).unwrap(),
        JumpOutcome::Boundary
    );
}

#[test]
fn history_edges_are_no_ops() {
    let project = basic_project();
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&project.path().join("main.c"));
    let mut prompt = ScriptedPrompt::default();

    navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();
    assert_eq!(
        navigator.jump_forward(&mut editor).unwrap(),
        JumpOutcome::Boundary
    );

    assert!(navigator.jump_back(&mut editor).unwrap().moved());
    let records = navigator.history().records().to_vec();
    assert_eq!(
        navigator.jump_back(&mut editor).unwrap(),
        JumpOutcome::Boundary
    );
    assert_eq!(navigator.history().position(), 1);
    assert_eq!(navigator.history().records(), records.as_slice());
}

#[test]
fn caret_word_drives_the_lookup() {
    let project = basic_project();
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&project.path().join("main.c"));
    editor.word = Some("foo".to_string());
    let mut prompt = ScriptedPrompt::default();

    let outcome = navigator
        .execute(Command::GotoTag, &mut editor, &mut prompt, None)
        .unwrap();
    assert!(outcome.moved());
    assert_eq!(editor.line(), 10);
}

#[test]
fn nothing_under_caret_is_a_no_op() {
    let project = basic_project();
    let mut navigator = project.navigator();
    let mut editor = MockEditor::opened(&project.path().join("main.c"));
    let mut prompt = ScriptedPrompt::default();

    let outcome = navigator
        .execute(Command::GotoTag, &mut editor, &mut prompt, None)
        .unwrap();
    assert_eq!(outcome, JumpOutcome::NoQuery);
}

#[cfg(target_os = "linux")]
#[test]
fn unreadable_index_is_reported_to_the_editor() {
    let project = basic_project();
    let mut registry = tagjump::TagRegistry::new();
    registry.add_global("/proc/self/mem");
    let mut navigator = project.navigator_with(registry);
    let mut editor = MockEditor::opened(&project.path().join("main.c"));
    let mut prompt = ScriptedPrompt::default();

    let outcome = navigator
        .goto_tag(&mut editor, &mut prompt, Some("foo"))
        .unwrap();
    assert!(outcome.moved());
    assert_eq!(editor.errors.len(), 1);
    assert!(editor.errors[0].contains("/proc/self/mem"));
}

#[test]
fn missing_target_file_is_an_error() {
    let project = TestProject::new();
    project.add_file("tags", "gone\tsrc/gone.c\t1\n");
    let mut navigator = project.navigator();
    let main = project.add_file("main.c", "");
    let mut editor = MockEditor::opened(&main);
    let mut prompt = ScriptedPrompt::default();

    let err = navigator
        .goto_tag(&mut editor, &mut prompt, Some("gone"))
        .unwrap_err();
    assert!(matches!(err, tagjump::TagError::OpenFile { .. }));
    assert_eq!(navigator.history().records(), [JumpRecord::new(&main, 0)]);
    assert_eq!(navigator.history().position(), 1);
}

#[test]
fn commands_are_registered_in_the_second_phase_only() {
    let project = basic_project();
    let mut navigator = project.navigator();
    let mut registry = RecordingRegistry::default();

    assert!(registry.commands.is_empty());
    assert!(navigator.register_commands(&mut registry));
    assert_eq!(registry.commands, Command::ALL);
    assert!(!navigator.register_commands(&mut registry));
    assert_eq!(registry.commands.len(), 3);
}
