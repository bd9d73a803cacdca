//! Action dispatch: routes shell actions to the presenter and pushes the
//! resulting state back to the page.

use aihub_common::{Action, LayoutError};

use crate::presenter::Activation;

use super::core::AihubApp;
use super::types::{ERROR_IPC_KIND, STATE_IPC_KIND};

impl AihubApp {
    /// Dispatch an [`Action`] from the shell page.
    pub(super) fn dispatch(&mut self, action: Action) {
        let label = action.label();
        let push = action.mutates_layout() || action == Action::Ready;

        if let Err(e) = self.apply(action) {
            tracing::warn!(action = label, error = %e, "Action rejected");
            self.send_to_shell(ERROR_IPC_KIND, &serde_json::json!({ "message": e.to_string() }));
        }
        if push {
            self.push_state();
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), LayoutError> {
        match action {
            Action::Ready => {
                self.shell_ready = true;
                self.presenter.refresh_open_windows();
            }
            Action::SetLayout(mode) => {
                let evicted = self.presenter.set_layout_mode(mode);
                if !evicted.is_empty() {
                    tracing::debug!(?evicted, "Services dropped by the smaller layout");
                }
            }
            Action::ActivateService(id) => {
                // Launches finish in the background; the window list
                // refresh that follows them triggers the next push.
                if let Activation::Toggled(outcome) =
                    self.presenter.handle_service_activation(id.as_str())?
                {
                    tracing::debug!(service = %id, ?outcome, "Service toggled");
                }
            }
            Action::AssignSlot { slot, service } => {
                self.presenter
                    .handle_slot_service_change(slot, service.as_str())?;
            }
            Action::ZoomIn(id) => {
                self.presenter.handle_zoom_in(id.as_str())?;
            }
            Action::ZoomOut(id) => {
                self.presenter.handle_zoom_out(id.as_str())?;
            }
            Action::ResetZoom(id) => {
                self.presenter.handle_zoom_reset(id.as_str())?;
            }
            Action::OpenExternal(id) => {
                self.presenter.handle_external_request(id.as_str())?;
            }
            Action::EmbedFailure { slot, service } => {
                self.presenter.handle_embed_failure(slot, &service);
            }
            Action::CloseWindow(id) => {
                self.presenter.close_window(id);
            }
            Action::ToggleSidebar => {
                self.presenter.toggle_sidebar();
            }
        }
        Ok(())
    }

    /// Send the current layout snapshot to the shell page.
    pub(super) fn push_state(&self) {
        if !self.shell_ready {
            return;
        }
        match serde_json::to_value(self.presenter.snapshot()) {
            Ok(state) => self.send_to_shell(STATE_IPC_KIND, &state),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize layout state"),
        }
    }

    fn send_to_shell(&self, kind: &str, payload: &serde_json::Value) {
        if let Some(ref shell) = self.shell {
            if let Err(e) = shell.send_ipc(kind, payload) {
                tracing::warn!(kind, error = %e, "Failed to send IPC to shell");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
