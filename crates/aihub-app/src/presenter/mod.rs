//! Presentation controller: turns user actions into layout changes, window
//! launches, or browser opens.
//!
//! This is the only component that knows whether a native window manager
//! exists; everything below it is environment-agnostic.

mod operations;
mod types;

#[cfg(test)]
mod tests;

pub use types::{Activation, Presenter};
