//! Native shell behavior.

use serde::{Deserialize, Serialize};

/// Settings that decide how the app presents external services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Open non-embeddable services in native windows. When `false`, every
    /// external request is handed to the system browser instead.
    pub native_windows: bool,
    /// Enable webview devtools (on by default in debug builds).
    pub devtools: bool,
    /// Custom user agent for service windows. `None` keeps the platform default.
    pub user_agent: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            native_windows: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
