use aihub_common::WindowHandleId;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::client::BridgeClient;
use super::types::BridgeRequest;
use crate::native::{NativeWindow, WindowFactory};
use crate::registry::WindowRegistry;

/// Owner of the window registry. Requests are served strictly one at a
/// time from a single queue, so creation requests and destruction notices
/// never race on the registry.
pub struct BridgeHost<W> {
    registry: WindowRegistry<W>,
    rx: mpsc::UnboundedReceiver<BridgeRequest>,
    tx: mpsc::UnboundedSender<BridgeRequest>,
}

/// Lets the window system report lifecycle changes into the host's queue.
#[derive(Debug, Clone)]
pub struct HostNotifier {
    tx: mpsc::UnboundedSender<BridgeRequest>,
}

impl HostNotifier {
    pub fn window_destroyed(&self, handle: WindowHandleId) {
        let _ = self.tx.send(BridgeRequest::WindowDestroyed { handle });
    }

    pub fn content_loaded(&self, handle: WindowHandleId) {
        let _ = self.tx.send(BridgeRequest::ContentLoaded { handle });
    }
}

impl<W: NativeWindow> BridgeHost<W> {
    pub fn new() -> (Self, BridgeClient) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = BridgeClient::new(tx.clone());
        let host = Self {
            registry: WindowRegistry::new(),
            rx,
            tx,
        };
        (host, client)
    }

    pub fn notifier(&self) -> HostNotifier {
        HostNotifier {
            tx: self.tx.clone(),
        }
    }

    pub fn registry(&self) -> &WindowRegistry<W> {
        &self.registry
    }

    /// Direct access for the owning thread, e.g. to retitle a window.
    pub fn registry_mut(&mut self) -> &mut WindowRegistry<W> {
        &mut self.registry
    }

    /// Serve every request queued so far without waiting. Must be called on
    /// the thread that is allowed to create windows. Returns how many
    /// requests were handled.
    pub fn pump<F>(&mut self, factory: &mut F) -> usize
    where
        F: WindowFactory<Window = W>,
    {
        let mut handled = 0;
        while let Ok(request) = self.rx.try_recv() {
            serve(&mut self.registry, factory, request);
            handled += 1;
        }
        handled
    }

    /// Serve requests until every client and notifier is dropped.
    pub async fn run<F>(self, mut factory: F)
    where
        F: WindowFactory<Window = W>,
    {
        let Self {
            mut registry,
            mut rx,
            tx,
        } = self;
        drop(tx);
        while let Some(request) = rx.recv().await {
            serve(&mut registry, &mut factory, request);
        }
        registry.destroy_all();
        debug!("bridge host stopped");
    }

    /// Destroy every window. Used during graceful shutdown.
    pub fn shutdown(&mut self) {
        self.rx.close();
        self.registry.destroy_all();
    }
}

fn serve<W, F>(registry: &mut WindowRegistry<W>, factory: &mut F, request: BridgeRequest)
where
    W: NativeWindow,
    F: WindowFactory<Window = W>,
{
    match request {
        BridgeRequest::CreateOrFocus { request, reply } => {
            let result = registry.create_or_focus(factory, &request);
            if let Err(e) = &result {
                warn!(service = %request.service, error = %e, "window creation failed");
            }
            let _ = reply.send(result);
        }
        BridgeRequest::Close { service, reply } => {
            let _ = reply.send(registry.close(service.as_str()));
        }
        BridgeRequest::ListOpen { reply } => {
            let _ = reply.send(registry.list_open());
        }
        BridgeRequest::WindowDestroyed { handle } => {
            if let Some(service) = registry.mark_destroyed(handle) {
                debug!(%service, %handle, "window destroyed by the window system");
            }
        }
        BridgeRequest::ContentLoaded { handle } => {
            if registry.reveal(handle) {
                debug!(%handle, "window revealed");
            }
        }
    }
}
