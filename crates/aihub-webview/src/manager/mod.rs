//! WebView lifecycle management.
//!
//! `WebViewManager` builds the shell view and the per-service views and
//! collects their events into one queue for the main loop.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use lifecycle::{full_window_bounds, protocol_response};
pub use types::ViewConfig;

/// Builds webviews and owns the shared event sink.
pub struct WebViewManager {
    /// Event sink. The main event loop drains it every poll.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Content for the `aihub://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
