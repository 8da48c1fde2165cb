//! Config tests: loading, defaults, validation, template round trip.

use sift_core::config::defaults::{config_template, CONFIG_FILE_NAME, DEFAULT_CONTENT};
use sift_core::config::{normalize_glob, DarkMode, SiftConfig};
use sift_core::errors::ConfigError;
use sift_core::SiftErrorCode;

#[test]
fn empty_toml_yields_defaults() {
    let config = SiftConfig::from_toml("").unwrap();
    assert_eq!(config, SiftConfig::default());
    assert_eq!(config.content, DEFAULT_CONTENT);
    assert!(config.plugins.is_empty());
    assert!(!config.dark_mode.is_enabled());
}

#[test]
fn full_config_parses() {
    let config = SiftConfig::from_toml(
        r##"
content = ["./src/**/*.cljs"]
plugins = ["daisyui", "typography"]
dark_mode = "class"

[theme.extend.colors]
primary = "#146a8e"

[variants.extend]
opacity = ["disabled"]

[safelist]
classes = ["hidden"]
patterns = ["^bg-"]

[scan]
max_file_size = 2048
"##,
    )
    .unwrap();

    assert_eq!(config.content, vec!["./src/**/*.cljs"]);
    assert_eq!(config.plugins, vec!["daisyui", "typography"]);
    assert_eq!(config.dark_mode, DarkMode::Mode("class".to_string()));
    assert!(config.dark_mode.is_enabled());
    assert_eq!(config.theme.color("primary"), Some("#146a8e"));
    assert_eq!(config.variants.extend["opacity"], vec!["disabled"]);
    assert_eq!(config.safelist.classes, vec!["hidden"]);
    assert_eq!(config.scan.effective_max_file_size(), 2048);
    assert!(config.validate().is_ok());
}

#[test]
fn extend_colors_shadow_base_palette() {
    let config = SiftConfig::from_toml(
        r##"
[theme.colors]
primary = "#000000"
secondary = "#ffffff"

[theme.extend.colors]
primary = "#146a8e"
"##,
    )
    .unwrap();
    assert_eq!(config.theme.color("primary"), Some("#146a8e"));
    assert_eq!(config.theme.color("secondary"), Some("#ffffff"));
    assert_eq!(config.theme.color("missing"), None);
}

#[test]
fn template_parses_to_original_project_settings() {
    let config = SiftConfig::from_toml(&config_template("demo")).unwrap();
    assert_eq!(config.content, DEFAULT_CONTENT);
    assert_eq!(config.plugins, vec!["daisyui"]);
    assert_eq!(config.theme.extend.colors["primary"], "#146a8e");
    assert!(config.variants.extend.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn to_toml_round_trips() {
    let config = SiftConfig::from_toml(&config_template("demo")).unwrap();
    let rendered = config.to_toml().unwrap();
    assert_eq!(SiftConfig::from_toml(&rendered).unwrap(), config);
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = SiftConfig::from_toml("content = [").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.error_code(), "CONFIG_PARSE");
}

#[test]
fn empty_content_fails_validation() {
    let config = SiftConfig::from_toml("content = []").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::EmptyContent));
}

#[test]
fn bad_glob_fails_validation() {
    let config = SiftConfig::from_toml(r#"content = ["src/[*.clj"]"#).unwrap();
    match config.validate().unwrap_err() {
        ConfigError::InvalidGlob { pattern, .. } => assert_eq!(pattern, "src/[*.clj"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_safelist_pattern_fails_validation() {
    let config = SiftConfig::from_toml("[safelist]\npatterns = [\"(unclosed\"]").unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.error_code(), "INVALID_SAFELIST_PATTERN");
    assert!(err.coded_message().starts_with("[INVALID_SAFELIST_PATTERN]"));
}

#[test]
fn normalize_glob_strips_dot_slash() {
    assert_eq!(normalize_glob("./src/**/*.clj"), "src/**/*.clj");
    assert_eq!(normalize_glob("././a/*.html"), "a/*.html");
    assert_eq!(normalize_glob("resources/*.html"), "resources/*.html");
}

#[test]
fn discover_reads_config_from_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "content = [\"./app/**/*.html\"]\n",
    )
    .unwrap();
    let config = SiftConfig::discover(dir.path()).unwrap();
    assert_eq!(config.content, vec!["./app/**/*.html"]);
}

#[test]
fn discover_without_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(SiftConfig::discover(dir.path()).unwrap(), SiftConfig::default());
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiftConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(err.error_code(), "CONFIG_IO");
}
