//! Embedding outcome tracking.
//!
//! A service lands here when its embedding surface reports that it cannot
//! be displayed. Nothing is retried automatically; the shell shows the
//! fallback card until the service is reassigned to a slot.

use std::collections::HashSet;

use aihub_common::ServiceId;

#[derive(Debug, Clone, Default)]
pub struct EmbedTracker {
    failed: HashSet<ServiceId>,
}

impl EmbedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as failed. Returns `true` if it was not already marked.
    pub fn report_failure(&mut self, id: &ServiceId) -> bool {
        self.failed.insert(id.clone())
    }

    /// Forget a failure. Returns `true` if one was recorded.
    pub fn clear(&mut self, id: &str) -> bool {
        self.failed.remove(id)
    }

    pub fn is_failed(&self, id: &str) -> bool {
        self.failed.contains(id)
    }

    pub fn len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }
}
