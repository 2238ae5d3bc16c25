//! Settings files feeding a navigator.

use crate::common::TestProject;
use tagjump::config::{CONFIG_DIR, CONFIG_FILE};
use tagjump::{Navigator, Settings, TagPaths};

#[test]
fn generated_config_loads_back_with_defaults() {
    let project = TestProject::new();
    let path = Settings::init_config_file_in(project.path(), false).unwrap();
    assert_eq!(path, project.path().join(CONFIG_DIR).join(CONFIG_FILE));

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.tags.file_name, "tags");
    assert!(settings.tags.projects.is_empty());
    assert_eq!(settings.history.capacity, 500);

    assert!(Settings::init_config_file_in(project.path(), false).is_err());
    assert!(Settings::init_config_file_in(project.path(), true).is_ok());
}

#[test]
fn navigator_follows_configured_names_and_markers() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.path().join(".git")).unwrap();
    let source = project.add_file("src/deep/mod.c", "");
    project.add_file(".tags", "parse\tsrc/parse.c\t12;\"\tf\n");
    let vendor = project.add_file("vendor/vendor.tags", "parse_opts\topts.c\t3;\"\tf\n");

    let config = project.add_file(
        "settings.toml",
        &format!(
            "[tags]\nfile_name = \".tags\"\n\n[tags.projects]\n{:?} = {:?}\n\n[history]\ncapacity = 1\n",
            project.path().display().to_string(),
            vendor.display().to_string(),
        ),
    );

    let settings = Settings::load_from(&config).unwrap();
    assert!(matches!(
        settings.tags.projects.values().next(),
        Some(TagPaths::Single(_))
    ));

    let navigator = Navigator::from_settings(&settings);
    // Capacity is clamped to keep at least one jump's two records.
    assert_eq!(navigator.history().capacity(), 2);

    let resolution = navigator.resolver().resolve(Some(&source), "parse");
    let names: Vec<&str> = resolution.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["parse", "parse_opts"]);
    assert_eq!(
        resolution.entries[0].location,
        project.path().join("src/parse.c")
    );
    assert_eq!(resolution.entries[1].location, vendor.with_file_name("opts.c"));
}
