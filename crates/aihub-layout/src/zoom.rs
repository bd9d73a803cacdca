//! Per-service zoom factors.

use std::collections::HashMap;

use aihub_common::ServiceId;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom keyed by service, so it follows a service across slots.
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    levels: HashMap<ServiceId, f64>,
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current factor, `1.0` for services never zoomed.
    pub fn get(&self, id: &str) -> f64 {
        self.levels.get(id).copied().unwrap_or(DEFAULT_ZOOM)
    }

    /// Add `delta` to the current factor and clamp to `[MIN_ZOOM, MAX_ZOOM]`.
    /// Returns the new factor. A non-finite delta leaves the factor alone.
    pub fn adjust(&mut self, id: &ServiceId, delta: f64) -> f64 {
        let current = self.get(id.as_str());
        if !delta.is_finite() {
            return current;
        }
        let next = round_hundredths((current + delta).clamp(MIN_ZOOM, MAX_ZOOM));
        self.levels.insert(id.clone(), next);
        next
    }

    pub fn reset(&mut self, id: &ServiceId) -> f64 {
        self.levels.insert(id.clone(), DEFAULT_ZOOM);
        DEFAULT_ZOOM
    }

    /// Factor as a whole percentage for display.
    pub fn percent(&self, id: &str) -> u32 {
        (self.get(id) * 100.0).round() as u32
    }
}

// Keeps repeated 0.1 steps from drifting (1.0 - 5 * 0.1 lands on 0.5).
fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
