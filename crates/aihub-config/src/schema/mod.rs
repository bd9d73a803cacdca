//! Configuration schema types for AI Hub.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod services;
mod shell;
mod system;
mod window;

pub use layout::*;
pub use services::*;
pub use shell::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AihubConfig {
    pub shell: ShellConfig,
    pub window: WindowConfig,
    pub service_window: ServiceWindowConfig,
    pub layout: LayoutConfig,
    pub zoom: ZoomConfig,
    /// Replacement service catalog. Empty means "use the built-in catalog".
    pub services: Vec<ServiceConfig>,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aihub_common::LayoutMode;

    #[test]
    fn default_config_sections() {
        let config = AihubConfig::default();
        assert!(config.shell.native_windows);
        assert_eq!(config.window.title, "AI Hub");
        assert_eq!(config.layout.mode, LayoutMode::Double);
        assert!(config.services.is_empty());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: AihubConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 1400);
        assert_eq!(config.service_window.width, 1200);
    }

    #[test]
    fn services_array_of_tables() {
        let toml_str = r#"
[[services]]
id = "kimi"
name = "Kimi"
url = "https://www.kimi.com/"

[[services]]
id = "grok"
name = "Grok"
url = "https://grok.com/"
embeddable = false
forces_external_window = true
"#;
        let config: AihubConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.services.len(), 2);
        assert_eq!(config.services[1].id, "grok");
        assert!(config.services[1].forces_external_window);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config: AihubConfig = toml::from_str("[theme]\nname = \"dark\"\n").unwrap();
        assert_eq!(config.layout.mode, LayoutMode::Double);
    }
}
