//! Native window management for services that cannot be embedded.
//!
//! The window registry is owned by a [`BridgeHost`] living on the thread
//! that owns the event loop. Everyone else talks to it through a
//! [`WindowBridge`], which only carries requests and replies, so the host's
//! view of which windows exist stays authoritative.

pub mod bridge;
pub mod launcher;
pub mod native;
pub mod opener;
pub mod registry;

#[cfg(test)]
mod testing;

pub use bridge::{BridgeClient, BridgeHost, BridgeRequest, HostNotifier, WindowBridge};
pub use launcher::{LaunchOutcome, Launcher};
pub use native::{NativeWindow, WindowFactory, WindowRequest};
pub use opener::{SystemBrowser, UrlOpener};
pub use registry::WindowRegistry;
