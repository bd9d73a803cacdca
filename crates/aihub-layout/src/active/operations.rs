//! Mutating operations on ActiveSet: bounded push, remove, shrink.

use aihub_common::ServiceId;

use super::ActiveSet;

impl ActiveSet {
    /// Drop services from the front until at most `capacity` remain.
    /// Returns the evicted ids, oldest first.
    ///
    /// This is the only eviction rule: both toggling past capacity and
    /// shrinking the layout go through it.
    pub fn shrink_to(&mut self, capacity: usize) -> Vec<ServiceId> {
        let mut evicted = Vec::new();
        while self.services.len() > capacity {
            if let Some(front) = self.services.pop_front() {
                evicted.push(front);
            }
        }
        evicted
    }

    /// Append `id`, first evicting from the front so the result fits in
    /// `capacity`. Returns the evicted ids.
    pub fn push_bounded(&mut self, id: ServiceId, capacity: usize) -> Vec<ServiceId> {
        let evicted = self.shrink_to(capacity.saturating_sub(1));
        self.services.push_back(id);
        evicted
    }

    /// Remove `id` wherever it is. Returns `true` if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.services.iter().position(|s| s.as_str() == id) {
            Some(idx) => {
                self.services.remove(idx);
                true
            }
            None => false,
        }
    }
}
