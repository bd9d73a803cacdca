//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use aihub_common::LayoutMode;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_aihub_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, aihub_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
mode = "triple"

[zoom]
step = 0.25
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.mode, LayoutMode::Triple);
    assert!((config.zoom.step - 0.25).abs() < f64::EPSILON);
    // Defaults preserved
    assert_eq!(config.window.width, 1400);
    assert!(config.shell.native_windows);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, aihub_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[zoom]
step = 5.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.zoom.step - 5.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aihub").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.mode, LayoutMode::Double);
    assert!(config.services.is_empty());
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::AihubConfig;

    let content = default_config_toml();
    let config: AihubConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.window.title, "AI Hub");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // May not resolve in every CI environment
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("aihub"));
        assert!(path_str.ends_with("config.toml"));
    }
}
