//! Service catalog overrides.

use serde::{Deserialize, Serialize};

/// One catalog entry as written in `[[services]]`.
///
/// When the config lists no services, the built-in catalog is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Whether the service can render inside an embedding slot.
    #[serde(default = "default_embeddable")]
    pub embeddable: bool,
    /// Always open in a separate window, even if embeddable.
    #[serde(default)]
    pub forces_external_window: bool,
}

fn default_embeddable() -> bool {
    true
}

// =============================================================================
// Tests
// =============================================================================
