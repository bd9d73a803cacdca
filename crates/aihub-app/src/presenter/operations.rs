use aihub_common::{LayoutError, LayoutMode, ServiceId};
use aihub_windows::{LaunchOutcome, WindowRequest};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::types::{Activation, Presenter};

impl Presenter {
    /// Sidebar click. Window-only services go to the window manager (or
    /// the browser); embeddable ones toggle in the active set.
    pub fn handle_service_activation(&mut self, id: &str) -> Result<Activation, LayoutError> {
        let service = self
            .layout
            .registry()
            .get(id)
            .ok_or_else(|| LayoutError::UnknownService(ServiceId::from(id)))?;

        if service.requires_window() {
            let request = WindowRequest::new(service.id.clone(), &service.name, &service.url);
            return Ok(Activation::Launched(self.spawn_launch(request)));
        }

        let outcome = self.layout.toggle_service(id)?;
        debug!(service = id, ?outcome, "service toggled");
        Ok(Activation::Toggled(outcome))
    }

    /// Put `id` in `slot` and give it a fresh embedding attempt.
    pub fn handle_slot_service_change(&mut self, slot: usize, id: &str) -> Result<(), LayoutError> {
        self.layout.assign_slot(slot, id)?;
        if self.failures.clear(id) {
            debug!(service = id, slot, "embed failure cleared by reassignment");
        }
        Ok(())
    }

    pub fn handle_zoom_adjust(&mut self, id: &str, delta: f64) -> Result<f64, LayoutError> {
        self.layout.adjust_zoom(id, delta)
    }

    pub fn handle_zoom_in(&mut self, id: &str) -> Result<f64, LayoutError> {
        self.handle_zoom_adjust(id, self.zoom_step)
    }

    pub fn handle_zoom_out(&mut self, id: &str) -> Result<f64, LayoutError> {
        self.handle_zoom_adjust(id, -self.zoom_step)
    }

    pub fn handle_zoom_reset(&mut self, id: &str) -> Result<f64, LayoutError> {
        self.layout.reset_zoom(id)
    }

    /// "Open in new window": a native window inside the shell, the system
    /// browser otherwise. Slot assignments are not touched.
    pub fn handle_external_request(
        &mut self,
        id: &str,
    ) -> Result<JoinHandle<LaunchOutcome>, LayoutError> {
        let service = self
            .layout
            .registry()
            .get(id)
            .ok_or_else(|| LayoutError::UnknownService(ServiceId::from(id)))?;
        let request = WindowRequest::new(service.id.clone(), &service.name, &service.url);
        Ok(self.spawn_launch(request))
    }

    /// Record that the view in `slot` could not show `id`. Reports for a
    /// slot that has since moved on to another service are ignored.
    /// Returns whether the fallback card needs rendering.
    pub fn handle_embed_failure(&mut self, slot: usize, id: &ServiceId) -> bool {
        if !self.layout.slot_shows(slot, id.as_str()) {
            debug!(slot, service = %id, "ignoring stale embed failure");
            return false;
        }
        if self.failures.report_failure(id) {
            info!(slot, service = %id, "service refused to embed, showing fallback");
        }
        true
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) -> Vec<ServiceId> {
        let evicted = self.layout.set_layout_mode(mode);
        info!(%mode, capacity = mode.capacity(), "layout changed");
        evicted
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    /// Close the native window of `id`, then refresh the open-window list.
    pub fn close_window(&self, id: ServiceId) -> JoinHandle<bool> {
        let launcher = self.launcher.clone();
        let tx = self.windows_tx.clone();
        self.runtime.spawn(async move {
            let closed = launcher.close(&id).await;
            let _ = tx.send(launcher.list_open().await);
            closed
        })
    }

    /// Ask the window manager for its current list. The answer arrives
    /// through `poll_open_windows`.
    pub fn refresh_open_windows(&self) {
        if !self.in_native_shell() {
            return;
        }
        let launcher = self.launcher.clone();
        let tx = self.windows_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(launcher.list_open().await);
        });
    }

    /// Apply finished window-list refreshes. Returns `true` if the list changed.
    pub fn poll_open_windows(&mut self) -> bool {
        let mut latest = None;
        while let Ok(list) = self.windows_rx.try_recv() {
            latest = Some(list);
        }
        match latest {
            Some(list) if list != self.open_windows => {
                self.open_windows = list;
                true
            }
            _ => false,
        }
    }

    /// Hand a URL a view refused to navigate to over to the system browser.
    pub fn open_in_browser(&self, url: String) -> JoinHandle<LaunchOutcome> {
        let launcher = self.launcher.clone();
        self.runtime
            .spawn(async move { launcher.open_in_browser(url).await })
    }

    fn spawn_launch(&self, request: WindowRequest) -> JoinHandle<LaunchOutcome> {
        let launcher = self.launcher.clone();
        let tx = self.windows_tx.clone();
        info!(service = %request.service, native = launcher.in_native_shell(), "launching service");
        self.runtime.spawn(async move {
            let outcome = launcher.launch(request).await;
            if launcher.in_native_shell() {
                let _ = tx.send(launcher.list_open().await);
            }
            outcome
        })
    }
}
