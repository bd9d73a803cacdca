//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the shell view, the native service windows, and the
//! presenter that decides what the shell shows.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod ipc_dispatch;
mod polling;
mod service_windows;
mod shutdown;
mod types;

pub use core::AihubApp;
