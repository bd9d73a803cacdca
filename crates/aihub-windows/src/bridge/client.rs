use aihub_common::{BridgeError, ServiceId, WindowHandleId};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::types::{BridgeRequest, WindowBridge};
use crate::native::WindowRequest;

/// Cheap, cloneable sender side of the bridge.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    tx: mpsc::UnboundedSender<BridgeRequest>,
}

impl BridgeClient {
    pub(super) fn new(tx: mpsc::UnboundedSender<BridgeRequest>) -> Self {
        Self { tx }
    }

    fn send(&self, request: BridgeRequest) -> Result<(), BridgeError> {
        self.tx.send(request).map_err(|_| BridgeError::Unavailable)
    }
}

#[async_trait]
impl WindowBridge for BridgeClient {
    async fn create_or_focus(&self, request: WindowRequest) -> Result<WindowHandleId, BridgeError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeRequest::CreateOrFocus { request, reply })?;
        Ok(rx.await.map_err(|_| BridgeError::Disconnected)??)
    }

    async fn close(&self, service: &ServiceId) -> Result<bool, BridgeError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeRequest::Close {
            service: service.clone(),
            reply,
        })?;
        rx.await.map_err(|_| BridgeError::Disconnected)
    }

    async fn list_open(&self) -> Result<Vec<ServiceId>, BridgeError> {
        let (reply, rx) = oneshot::channel();
        self.send(BridgeRequest::ListOpen { reply })?;
        rx.await.map_err(|_| BridgeError::Disconnected)
    }
}
