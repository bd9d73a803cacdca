//! Core types and constructors for SlotLayout.

use std::collections::HashMap;
use std::sync::Arc;

use aihub_common::{LayoutMode, ServiceId};
use aihub_config::schema::LayoutConfig;

use crate::active::ActiveSet;
use crate::registry::{Service, ServiceRegistry};
use crate::zoom::ZoomState;

/// Result of toggling a service on or off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Appended to the active set; `evicted` is the oldest service pushed
    /// out to stay within capacity.
    Added { evicted: Option<ServiceId> },
    Removed,
}

/// Maps the visible slots of the current layout mode to services and
/// tracks which services are toggled on and how far each is zoomed.
pub struct SlotLayout {
    pub(super) registry: Arc<ServiceRegistry>,
    pub(super) mode: LayoutMode,
    /// Explicit assignments by slot index. Entries beyond the current
    /// capacity are kept dormant so switching back restores them.
    pub(super) assignments: HashMap<usize, ServiceId>,
    pub(super) active: ActiveSet,
    pub(super) zoom: ZoomState,
}

impl SlotLayout {
    pub fn new(registry: Arc<ServiceRegistry>, mode: LayoutMode) -> Self {
        Self {
            registry,
            mode,
            assignments: HashMap::new(),
            active: ActiveSet::new(),
            zoom: ZoomState::new(),
        }
    }

    /// Build the startup layout. Unknown service ids are skipped with a
    /// warning; the active set is trimmed to the mode's capacity.
    pub fn from_config(registry: Arc<ServiceRegistry>, config: &LayoutConfig) -> Self {
        let mut layout = Self::new(registry, config.mode);

        for (slot, id) in config.slots.iter().enumerate() {
            if layout.registry.contains(id) {
                layout.assignments.insert(slot, ServiceId::from(id.as_str()));
            } else {
                tracing::warn!(slot, service = %id, "unknown service in layout.slots, ignoring");
            }
        }

        let capacity = layout.capacity();
        for id in &config.active {
            if !layout.registry.contains(id) {
                tracing::warn!(service = %id, "unknown service in layout.active, ignoring");
                continue;
            }
            if !layout.active.contains(id) {
                layout
                    .active
                    .push_bounded(ServiceId::from(id.as_str()), capacity);
            }
        }

        layout
    }

    // -- Accessors --

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.mode.capacity()
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    pub fn active(&self) -> &ActiveSet {
        &self.active
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// The service shown in `slot`: its assignment, or the registry's
    /// fallback. Never absent.
    pub fn slot_service(&self, slot: usize) -> &Service {
        self.assignments
            .get(&slot)
            .and_then(|id| self.registry.get(id.as_str()))
            .unwrap_or_else(|| self.registry.fallback())
    }

    /// Services in the visible slots `0..capacity`, in slot order.
    pub fn visible_slots(&self) -> Vec<(usize, &Service)> {
        (0..self.capacity())
            .map(|slot| (slot, self.slot_service(slot)))
            .collect()
    }

    /// Whether `slot` is visible and currently shows `id`.
    pub fn slot_shows(&self, slot: usize, id: &str) -> bool {
        slot < self.capacity() && self.slot_service(slot).id.as_str() == id
    }
}
