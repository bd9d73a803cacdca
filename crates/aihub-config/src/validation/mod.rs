//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod services;

#[cfg(test)]
mod tests;

use crate::schema::AihubConfig;
use aihub_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AihubConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_windows(&mut errors, config);
    layout::validate_zoom(&mut errors, config);
    services::validate_services(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
