//! Request/response channel between callers and the window host.

mod client;
mod host;
mod types;


pub use client::BridgeClient;
pub use host::{BridgeHost, HostNotifier};
pub use types::{BridgeRequest, WindowBridge};
