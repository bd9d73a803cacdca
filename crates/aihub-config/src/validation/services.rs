//! Service catalog validation.

use std::collections::HashSet;

use crate::schema::AihubConfig;

/// Validate `[[services]]`: non-empty unique ids, names, and web URLs.
pub(crate) fn validate_services(errors: &mut Vec<String>, config: &AihubConfig) {
    let mut seen = HashSet::new();
    for (i, service) in config.services.iter().enumerate() {
        if service.id.trim().is_empty() {
            errors.push(format!("services[{i}].id must not be empty"));
        } else if !seen.insert(service.id.as_str()) {
            errors.push(format!("services[{i}].id '{}' is duplicated", service.id));
        }
        if service.name.trim().is_empty() {
            errors.push(format!("services[{i}].name must not be empty"));
        }
        if !(service.url.starts_with("https://") || service.url.starts_with("http://")) {
            errors.push(format!(
                "services[{i}].url '{}' must be an http(s) URL",
                service.url
            ));
        }
    }
}
