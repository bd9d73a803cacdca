pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{AihubError, BridgeError, ConfigError, LayoutError, PlatformError};
pub use types::{LayoutMode, ServiceId, WindowHandleId};

pub type Result<T> = std::result::Result<T, AihubError>;
