//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn service(id: &str, url: &str) -> ServiceConfig {
    ServiceConfig {
        id: id.into(),
        name: id.to_uppercase(),
        url: url.into(),
        description: String::new(),
        embeddable: true,
        forces_external_window: false,
    }
}

#[test]
fn default_config_validates() {
    let config = AihubConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_window_too_small() {
    let mut config = AihubConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_min_size_above_initial_size() {
    let mut config = AihubConfig::default();
    config.service_window.min_height = 900;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("service_window.min_height = 900 exceeds service_window.height = 800"));
}

#[test]
fn catches_zoom_step_out_of_range() {
    let mut config = AihubConfig::default();
    config.zoom.step = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("zoom.step"));

    config.zoom.step = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_duplicate_service_ids() {
    let mut config = AihubConfig::default();
    config.services = vec![
        service("kimi", "https://www.kimi.com/"),
        service("kimi", "https://example.com/"),
    ];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("'kimi' is duplicated"));
}

#[test]
fn catches_non_web_urls() {
    let mut config = AihubConfig::default();
    config.services = vec![service("local", "file:///etc/passwd")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("services[0].url"));
}

#[test]
fn catches_empty_id() {
    let mut config = AihubConfig::default();
    config.services = vec![service(" ", "https://example.com/")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("services[0].id must not be empty"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = AihubConfig::default();
    config.window.height = 50;
    config.zoom.step = 3.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
    assert!(err.contains("zoom.step"));
    assert!(err.contains("; "));
}
