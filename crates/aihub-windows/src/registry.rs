use std::collections::HashMap;

use aihub_common::{PlatformError, ServiceId, WindowHandleId};
use tracing::debug;

use crate::native::{NativeWindow, WindowFactory, WindowRequest};

/// Service id to native window, at most one live window per service.
///
/// Entries whose window was destroyed out-of-band stay until the next
/// lookup touches them; every query prunes before answering.
pub struct WindowRegistry<W> {
    windows: HashMap<ServiceId, W>,
}

impl<W> Default for WindowRegistry<W> {
    fn default() -> Self {
        Self {
            windows: HashMap::new(),
        }
    }
}

impl<W: NativeWindow> WindowRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the live window for the request's service, or create one.
    pub fn create_or_focus<F>(
        &mut self,
        factory: &mut F,
        request: &WindowRequest,
    ) -> Result<WindowHandleId, PlatformError>
    where
        F: WindowFactory<Window = W>,
    {
        if let Some(window) = self.windows.get_mut(&request.service) {
            if !window.is_destroyed() {
                window.focus();
                debug!(service = %request.service, handle = %window.handle(), "focused existing window");
                return Ok(window.handle());
            }
            debug!(service = %request.service, "pruning stale window before recreate");
            self.windows.remove(&request.service);
        }

        let window = factory.create(request)?;
        let handle = window.handle();
        debug!(service = %request.service, %handle, "window created");
        self.windows.insert(request.service.clone(), window);
        Ok(handle)
    }

    /// Close the live window for `service`. `false` when there was none.
    pub fn close(&mut self, service: &str) -> bool {
        match self.windows.remove(service) {
            Some(mut window) if !window.is_destroyed() => {
                window.destroy();
                debug!(service, "window closed");
                true
            }
            _ => false,
        }
    }

    /// Services with a live window, sorted.
    pub fn list_open(&mut self) -> Vec<ServiceId> {
        self.prune();
        let mut ids: Vec<ServiceId> = self.windows.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Record that the window behind `handle` went away on its own.
    /// The entry itself is pruned on the next query.
    pub fn mark_destroyed(&mut self, handle: WindowHandleId) -> Option<ServiceId> {
        let (service, window) = self.find_by_handle(handle)?;
        window.destroy();
        Some(service)
    }

    /// Show a window once its content is ready.
    pub fn reveal(&mut self, handle: WindowHandleId) -> bool {
        match self.find_by_handle(handle) {
            Some((_, window)) if !window.is_destroyed() => {
                window.reveal();
                true
            }
            _ => false,
        }
    }

    pub fn service_for_handle(&self, handle: WindowHandleId) -> Option<&ServiceId> {
        self.windows
            .iter()
            .find(|(_, w)| w.handle() == handle)
            .map(|(id, _)| id)
    }

    pub fn get_mut(&mut self, service: &str) -> Option<&mut W> {
        self.windows.get_mut(service).filter(|w| !w.is_destroyed())
    }

    /// Destroy every window. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for (service, mut window) in self.windows.drain() {
            if !window.is_destroyed() {
                debug!(%service, "destroying window on shutdown");
                window.destroy();
            }
        }
    }

    /// Entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn find_by_handle(&mut self, handle: WindowHandleId) -> Option<(ServiceId, &mut W)> {
        self.windows
            .iter_mut()
            .find(|(_, w)| w.handle() == handle)
            .map(|(id, w)| (id.clone(), w))
    }

    fn prune(&mut self) {
        self.windows.retain(|service, window| {
            let live = !window.is_destroyed();
            if !live {
                debug!(%service, "pruned destroyed window");
            }
            live
        });
    }
}
