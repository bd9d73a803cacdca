//! WebView layer for the shell window and per-service windows.
//!
//! Wraps the `wry` crate to provide:
//! - The shell view, serving bundled content over `aihub://`
//! - Service views loading a remote chat site in its own window
//! - Navigation policy that hands foreign URLs to the system browser
//! - Bidirectional IPC for the shell view (Rust <-> JavaScript)
//! - Event queue drained by the main loop (page load, title, IPC)

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::ContentProvider;
pub use events::{PageLoadState, ViewId, WebViewEvent};
pub use ipc::IpcMessage;
pub use manager::{full_window_bounds, ViewConfig, WebViewHandle, WebViewManager};
pub use navigation::NavigationPolicy;
