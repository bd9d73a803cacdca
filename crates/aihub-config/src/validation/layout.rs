//! Window geometry and zoom validation.

use crate::schema::AihubConfig;

use super::helpers::{validate_min_le, validate_range, validate_range_f64};

/// Validate main and service window sizes.
pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &AihubConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 200, 10000);
    validate_range(errors, "window.height", w.height, 200, 10000);
    validate_min_le(errors, "window.min_width", w.min_width, "window.width", w.width);
    validate_min_le(
        errors,
        "window.min_height",
        w.min_height,
        "window.height",
        w.height,
    );

    let s = &config.service_window;
    validate_range(errors, "service_window.width", s.width, 200, 10000);
    validate_range(errors, "service_window.height", s.height, 200, 10000);
    validate_min_le(
        errors,
        "service_window.min_width",
        s.min_width,
        "service_window.width",
        s.width,
    );
    validate_min_le(
        errors,
        "service_window.min_height",
        s.min_height,
        "service_window.height",
        s.height,
    );
}

/// Validate the zoom step.
pub(crate) fn validate_zoom(errors: &mut Vec<String>, config: &AihubConfig) {
    validate_range_f64(errors, "zoom.step", config.zoom.step, 0.01, 1.5);
}
