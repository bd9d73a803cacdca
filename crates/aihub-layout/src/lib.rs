//! Slot layout state for the shell: which services are embedded where,
//! how far each one is zoomed, and which ones refused to embed.
//!
//! Everything here is synchronous, in-memory, and reset on every run.

pub mod active;
pub mod engine;
pub mod failures;
pub mod registry;
pub mod snapshot;
pub mod zoom;

pub use active::ActiveSet;
pub use engine::{SlotLayout, ToggleOutcome};
pub use failures::EmbedTracker;
pub use registry::{Service, ServiceRegistry};
pub use snapshot::{LayoutSnapshot, SlotView};
pub use zoom::{ZoomState, MAX_ZOOM, MIN_ZOOM};
