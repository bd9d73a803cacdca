//! Window geometry configuration types.

use serde::{Deserialize, Serialize};

/// Main shell window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-10000).
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "AI Hub".into(),
            width: 1400,
            height: 900,
            min_width: 800,
            min_height: 600,
        }
    }
}

/// Native window opened for a single service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceWindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for ServiceWindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            min_width: 800,
            min_height: 600,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
