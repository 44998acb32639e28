// Integration tests for lesson loading and settings

use ctutor::animation::{AnimationKind, Theme};
use ctutor::cli::{Args, Command};
use ctutor::errors::{LessonError, SettingsError};
use ctutor::lesson::{week_path, LessonLibrary};
use ctutor::settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fresh scratch directory for one test
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ctutor-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_week(root: &Path, week: u32, theme: Theme, json: &str) {
    let path = week_path(root, week, theme);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, json).unwrap();
}

#[test]
fn test_loads_and_enriches_lesson_file() {
    let root = scratch("enrich");
    write_week(
        &root,
        4,
        Theme::Classic,
        r#"{
            "title": "Loops",
            "objectives": ["Write a for loop"],
            "animations": [
                { "type": "while-loop", "title": "While", "config": { "maxIterations": 3 } },
                { "type": "array-access", "title": "Not drawn yet" }
            ],
            "somethingNew": { "ignored": true }
        }"#,
    );

    let library = LessonLibrary::new(&root);
    let week = library.try_load(4, Theme::Classic).unwrap();

    assert_eq!(week.week, 4);
    assert_eq!(week.title, "Loops");
    assert_eq!(week.difficulty, "Intermediate");
    assert_eq!(week.animations.len(), 2);
    assert_eq!(week.animations[0].resolved_kind(), AnimationKind::WhileLoop);
    assert_eq!(week.animations[1].resolved_kind(), AnimationKind::Simple);
    assert!(!week.code_examples.is_empty());

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_missing_file_falls_back() {
    let root = scratch("missing");
    let mut library = LessonLibrary::new(&root);

    assert!(matches!(
        library.try_load(5, Theme::Lotr),
        Err(LessonError::Io { .. })
    ));
    let week = library.load(5, Theme::Lotr);
    assert_eq!(week.title, "Week 5: A Middle-earth Adventure");
    assert_eq!(week.animations[0].resolved_kind(), AnimationKind::WhileLoop);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_malformed_file_falls_back() {
    let root = scratch("malformed");
    write_week(&root, 2, Theme::Classic, "{ not json");
    let mut library = LessonLibrary::new(&root);

    assert!(matches!(
        library.try_load(2, Theme::Classic),
        Err(LessonError::Parse { .. })
    ));
    assert_eq!(library.load(2, Theme::Classic).title, "Week 2: C Programming");

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_cache_serves_repeat_loads() {
    let root = scratch("cache");
    write_week(&root, 1, Theme::Classic, r#"{ "title": "First" }"#);
    let mut library = LessonLibrary::new(&root);

    assert_eq!(library.load(1, Theme::Classic).title, "First");
    write_week(&root, 1, Theme::Classic, r#"{ "title": "Changed" }"#);
    assert_eq!(library.load(1, Theme::Classic).title, "First");
    assert!(library.cached(1, Theme::Lotr).is_none());

    library.clear_cache();
    assert_eq!(library.load(1, Theme::Classic).title, "Changed");

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_preload_fills_cache() {
    let mut library = LessonLibrary::new("no-lessons-here");
    library.preload(1..=3, Theme::Classic);
    for week in 1..=3 {
        assert!(library.cached(week, Theme::Classic).is_some());
    }
}

#[test]
fn test_settings_layers() {
    let root = scratch("settings");
    let path = root.join("ctutor.toml");
    fs::write(
        &path,
        r#"
        [lesson]
        week = 3
        theme = "lotr"

        [playback]
        speed_ms = 800
        autoplay = true
        "#,
    )
    .unwrap();

    let mut settings = Settings::load_from_file(&path).unwrap();
    assert_eq!(settings.week(), 3);
    assert!(settings.playback.autoplay);

    settings.merge_with_vars(|key| (key == "CTUTOR_WEEK").then(|| "6".to_string()));
    assert_eq!(settings.week(), 6);

    let Command::Run(options) = Args::parse_from(["ctutor", "--week", "9", "--theme", "classic"]).command
    else {
        panic!("expected run command");
    };
    settings.apply_args(&options);
    assert_eq!(settings.week(), 9);
    assert_eq!(settings.lesson.theme, Theme::Classic);
    assert_eq!(settings.tick_interval(), Duration::from_millis(800));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_bad_settings_file_is_an_error() {
    let root = scratch("bad-settings");
    let path = root.join("ctutor.toml");
    fs::write(&path, "[playback]\nspeed_ms = \"fast\"\n").unwrap();

    assert!(matches!(
        Settings::load_or_default(&path),
        Err(SettingsError::Parse { .. })
    ));

    fs::remove_dir_all(&root).ok();
}
