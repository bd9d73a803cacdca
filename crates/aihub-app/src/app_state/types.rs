//! Internal types and constants for the app state module.

use std::time::Duration;

/// How often to poll for events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// IPC kind used to push a layout snapshot to the shell page.
pub(super) const STATE_IPC_KIND: &str = "state";

/// IPC kind used to report a rejected action to the shell page.
pub(super) const ERROR_IPC_KIND: &str = "error";
