use std::sync::Arc;

use aihub_common::{ServiceId, WindowHandleId};
use tracing::warn;

use crate::bridge::WindowBridge;
use crate::native::WindowRequest;
use crate::opener::UrlOpener;

/// Where a launch request ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Window(WindowHandleId),
    Browser,
    /// Neither a window nor the browser could be opened. Already logged.
    Failed,
}

/// Routes external-open requests. The only place that knows whether a
/// native window manager is available: with no bridge every request goes
/// straight to the system browser.
#[derive(Clone)]
pub struct Launcher {
    bridge: Option<Arc<dyn WindowBridge>>,
    opener: Arc<dyn UrlOpener>,
}

impl Launcher {
    pub fn native(bridge: Arc<dyn WindowBridge>, opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            bridge: Some(bridge),
            opener,
        }
    }

    pub fn browser_only(opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            bridge: None,
            opener,
        }
    }

    pub fn in_native_shell(&self) -> bool {
        self.bridge.is_some()
    }

    /// Open the request in a native window, falling back to the system
    /// browser if the window manager is absent or fails.
    pub async fn launch(&self, request: WindowRequest) -> LaunchOutcome {
        if let Some(bridge) = &self.bridge {
            let service = request.service.clone();
            let url = request.url.clone();
            match bridge.create_or_focus(request).await {
                Ok(handle) => return LaunchOutcome::Window(handle),
                Err(e) => {
                    warn!(%service, error = %e, "window manager failed, falling back to system browser");
                    return self.open_in_browser(url).await;
                }
            }
        }
        self.open_in_browser(request.url).await
    }

    /// Hand `url` to the opener on the blocking pool. Openers may wait on a
    /// child process, which must not stall the runtime's workers.
    pub async fn open_in_browser(&self, url: String) -> LaunchOutcome {
        let opener = Arc::clone(&self.opener);
        let opened = tokio::task::spawn_blocking(move || {
            let result = opener.open(&url);
            (url, result)
        })
        .await;
        match opened {
            Ok((_, Ok(()))) => LaunchOutcome::Browser,
            Ok((url, Err(e))) => {
                warn!(%url, error = %e, "could not open system browser");
                LaunchOutcome::Failed
            }
            Err(e) => {
                warn!(error = %e, "browser opener task failed");
                LaunchOutcome::Failed
            }
        }
    }

    /// Close the native window for `service`. `false` when there was none
    /// or no window manager is available.
    pub async fn close(&self, service: &ServiceId) -> bool {
        let Some(bridge) = &self.bridge else {
            return false;
        };
        bridge.close(service).await.unwrap_or_else(|e| {
            warn!(%service, error = %e, "close request failed");
            false
        })
    }

    /// Services with an open native window. Empty outside the native shell.
    pub async fn list_open(&self) -> Vec<ServiceId> {
        let Some(bridge) = &self.bridge else {
            return Vec::new();
        };
        bridge.list_open().await.unwrap_or_else(|e| {
            warn!(error = %e, "list_open request failed");
            Vec::new()
        })
    }
}
