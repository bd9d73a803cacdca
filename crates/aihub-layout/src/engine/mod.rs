//! The SlotLayout engine: layout mode, slot assignments, active set, zoom.

mod operations;
mod types;


pub use types::*;
