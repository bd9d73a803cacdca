//! Active service set: a FIFO ring bounded by the slot capacity.

mod operations;
mod types;

pub use types::*;
