use std::path::PathBuf;

use crate::types::ServiceId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("failed to open external url: {0}")]
    Opener(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Contract violations on the slot layout. The operation is rejected and
/// the layout is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("slot {slot} is out of range for capacity {capacity}")]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("unknown service: {0}")]
    UnknownService(ServiceId),
}

/// Failures crossing the window-manager boundary. Callers fall back to the
/// system browser on any of these.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("window manager unavailable")]
    Unavailable,

    #[error("window manager dropped the request")]
    Disconnected,

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[derive(Debug, thiserror::Error)]
pub enum AihubError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
