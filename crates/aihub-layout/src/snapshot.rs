//! Serializable view of the layout pushed to the shell page.

use aihub_common::{LayoutMode, ServiceId};
use serde::Serialize;

use crate::engine::SlotLayout;
use crate::failures::EmbedTracker;
use crate::registry::Service;

/// One visible slot as the shell page renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub service: ServiceId,
    pub name: String,
    pub url: String,
    pub zoom: f64,
    pub zoom_percent: u32,
    /// Render the fallback card instead of the live view.
    pub failed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    pub mode: LayoutMode,
    pub capacity: usize,
    pub columns: usize,
    pub slots: Vec<SlotView>,
    pub active: Vec<ServiceId>,
    pub services: Vec<Service>,
    pub open_windows: Vec<ServiceId>,
    pub native_shell: bool,
    pub sidebar_collapsed: bool,
}

impl LayoutSnapshot {
    /// Capture the layout and failure state. Window and sidebar fields
    /// start empty and are filled in by the owner of that state.
    pub fn capture(layout: &SlotLayout, failures: &EmbedTracker) -> Self {
        let slots = layout
            .visible_slots()
            .into_iter()
            .map(|(index, service)| SlotView {
                index,
                service: service.id.clone(),
                name: service.name.clone(),
                url: service.url.clone(),
                zoom: layout.zoom().get(service.id.as_str()),
                zoom_percent: layout.zoom().percent(service.id.as_str()),
                failed: failures.is_failed(service.id.as_str()),
            })
            .collect();

        Self {
            mode: layout.mode(),
            capacity: layout.capacity(),
            columns: layout.mode().columns(),
            slots,
            active: layout.active().to_vec(),
            services: layout.registry().iter().cloned().collect(),
            open_windows: Vec::new(),
            native_shell: false,
            sidebar_collapsed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ServiceRegistry;
    use std::sync::Arc;

    #[test]
    fn capture_reflects_slots_zoom_and_failures() {
        let mut layout = SlotLayout::new(Arc::new(ServiceRegistry::builtin()), LayoutMode::Double);
        layout.assign_slot(1, "perplexity").unwrap();
        layout.adjust_zoom("perplexity", 0.25).unwrap();
        let mut failures = EmbedTracker::new();
        failures.report_failure(&ServiceId::from("perplexity"));

        let snap = LayoutSnapshot::capture(&layout, &failures);
        assert_eq!(snap.capacity, 2);
        assert_eq!(snap.columns, 2);
        assert_eq!(snap.slots.len(), 2);
        assert_eq!(snap.slots[0].service.as_str(), "kimi");
        assert!(!snap.slots[0].failed);
        assert_eq!(snap.slots[1].zoom_percent, 125);
        assert!(snap.slots[1].failed);
        assert_eq!(snap.services.len(), 7);
    }

    #[test]
    fn snapshot_serializes_for_the_page() {
        let layout = SlotLayout::new(Arc::new(ServiceRegistry::builtin()), LayoutMode::Quad);
        let snap = LayoutSnapshot::capture(&layout, &EmbedTracker::new());
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["mode"], "quad");
        assert_eq!(json["columns"], 2);
        assert_eq!(json["slots"].as_array().unwrap().len(), 4);
        assert_eq!(json["services"][1]["forces_external_window"], true);
        assert_eq!(json["open_windows"], serde_json::json!([]));
    }
}
