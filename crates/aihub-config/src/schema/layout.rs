//! Initial slot layout and zoom configuration types.

use aihub_common::LayoutMode;
use serde::{Deserialize, Serialize};

/// Layout the shell starts with. Nothing here is written back; every run
/// starts from these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    /// Services toggled on at startup, oldest first.
    pub active: Vec<String>,
    /// Explicit slot assignments by slot index.
    pub slots: Vec<String>,
    pub sidebar_collapsed: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Double,
            active: vec!["kimi".into(), "chatgpt-web".into()],
            slots: vec!["kimi".into(), "chatgpt-web".into()],
            sidebar_collapsed: false,
        }
    }
}

/// Per-service zoom step. The zoom bounds themselves are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Amount added or removed per zoom-in/zoom-out (valid range: 0.01-1.5).
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

// =============================================================================
// Tests
// =============================================================================
