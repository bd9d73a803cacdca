//! Core types for the active service set.

use std::collections::VecDeque;

use aihub_common::ServiceId;
use serde::Serialize;

/// Services the user has toggled on for embedding, oldest first.
///
/// Bounded by the current slot capacity; the front is always the next
/// eviction candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveSet {
    pub(super) services: VecDeque<ServiceId>,
}

impl ActiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.services.iter().any(|s| s.as_str() == id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &ServiceId> {
        self.services.iter()
    }

    pub fn to_vec(&self) -> Vec<ServiceId> {
        self.services.iter().cloned().collect()
    }
}
