//! Layout mode changes, slot assignment, toggling, and zoom.

use aihub_common::{LayoutError, LayoutMode, ServiceId};

use super::{SlotLayout, ToggleOutcome};

impl SlotLayout {
    /// Switch layout mode. Assignments are never dropped; the active set is
    /// shrunk from the front if it no longer fits. Returns evicted services.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) -> Vec<ServiceId> {
        self.mode = mode;
        let evicted = self.active.shrink_to(mode.capacity());
        if !evicted.is_empty() {
            tracing::debug!(%mode, ?evicted, "layout shrink evicted active services");
        }
        evicted
    }

    /// Put `id` in `slot`. Returns the previous explicit assignment.
    pub fn assign_slot(
        &mut self,
        slot: usize,
        id: &str,
    ) -> Result<Option<ServiceId>, LayoutError> {
        let capacity = self.capacity();
        if slot >= capacity {
            return Err(LayoutError::SlotOutOfRange { slot, capacity });
        }
        let service = self.known(id)?;
        Ok(self.assignments.insert(slot, service))
    }

    /// Remove `id` from the active set if present, otherwise append it,
    /// evicting the oldest entry when at capacity.
    pub fn toggle_service(&mut self, id: &str) -> Result<ToggleOutcome, LayoutError> {
        let service = self.known(id)?;
        if self.active.remove(id) {
            return Ok(ToggleOutcome::Removed);
        }
        let evicted = self.active.push_bounded(service, self.capacity());
        Ok(ToggleOutcome::Added {
            evicted: evicted.into_iter().next(),
        })
    }

    /// Zoom `id` by `delta`, clamped. Returns the new factor.
    pub fn adjust_zoom(&mut self, id: &str, delta: f64) -> Result<f64, LayoutError> {
        let service = self.known(id)?;
        Ok(self.zoom.adjust(&service, delta))
    }

    pub fn reset_zoom(&mut self, id: &str) -> Result<f64, LayoutError> {
        let service = self.known(id)?;
        Ok(self.zoom.reset(&service))
    }

    fn known(&self, id: &str) -> Result<ServiceId, LayoutError> {
        self.registry
            .get(id)
            .map(|s| s.id.clone())
            .ok_or_else(|| LayoutError::UnknownService(ServiceId::from(id)))
    }
}
