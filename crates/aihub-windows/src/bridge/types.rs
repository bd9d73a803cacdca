use aihub_common::{BridgeError, PlatformError, ServiceId, WindowHandleId};
use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::native::WindowRequest;

/// Everything the host serves, in arrival order.
#[derive(Debug)]
pub enum BridgeRequest {
    CreateOrFocus {
        request: WindowRequest,
        reply: oneshot::Sender<Result<WindowHandleId, PlatformError>>,
    },
    Close {
        service: ServiceId,
        reply: oneshot::Sender<bool>,
    },
    ListOpen {
        reply: oneshot::Sender<Vec<ServiceId>>,
    },
    /// The window system closed a window without going through `Close`.
    WindowDestroyed { handle: WindowHandleId },
    /// A window's first page load finished.
    ContentLoaded { handle: WindowHandleId },
}

/// Caller-side view of the window manager.
#[async_trait]
pub trait WindowBridge: Send + Sync {
    async fn create_or_focus(&self, request: WindowRequest) -> Result<WindowHandleId, BridgeError>;

    /// `Ok(false)` when the service had no open window.
    async fn close(&self, service: &ServiceId) -> Result<bool, BridgeError>;

    async fn list_open(&self) -> Result<Vec<ServiceId>, BridgeError>;
}
