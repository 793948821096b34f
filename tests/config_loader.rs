use resume_tui::config::{Config, ConfigError, DisplayConfig, ThemeConfig};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert!(config.profile.is_none());
    assert_eq!(config.display, DisplayConfig::default());
    assert!(!config.display.ascii_icons);
    assert!(config.display.show_photo);
    assert!(config.display.mouse);
    assert_eq!(config.theme.primary, "#28A745");
    assert_eq!(config.theme.secondary, "#F1FFF1");
    assert_eq!(config.theme.text, "#333333");
    assert_eq!(config.theme.background, "#FFFFFF");
    assert_eq!(config.theme.detail, "#6C757D");
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("resume-tui/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r##"
profile = "/home/me/profile.toml"

[display]
ascii_icons = true

[theme]
primary = "#0055AA"
"##,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.profile, Some(PathBuf::from("/home/me/profile.toml")));
    assert!(config.display.ascii_icons);
    assert!(config.display.show_photo);
    assert_eq!(config.theme.primary, "#0055AA");
    assert_eq!(config.theme.detail, ThemeConfig::default().detail);
}

#[test]
fn test_named_colours_are_accepted() {
    let (_dir, path) = write_config("[theme]\nbackground = \"black\"\ntext = \"white\"\n");
    assert!(Config::load_from(&path).is_ok());
}

#[test]
fn test_invalid_colour_fails_validation() {
    let (_dir, path) = write_config("[theme]\nprimary = \"#GGGGGG\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("primary"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[display\nascii_icons = yes");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_empty_profile_path_fails_validation() {
    let (_dir, path) = write_config("profile = \"\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
