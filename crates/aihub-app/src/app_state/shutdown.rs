//! Graceful shutdown: close service windows, drop the shell, stop the runtime.

use std::time::Duration;

use super::core::AihubApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl AihubApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Destroy service windows (pending window requests are dropped)
    /// 2. Destroy the shell view
    /// 3. Shut down tokio runtime (cancel in-flight launches)
    /// 4. Release the main window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Close every native service window
        if let Some(ref mut host) = self.bridge_host {
            host.shutdown();
        }
        self.notifier = None;

        // 2. Destroy the shell view before its parent window
        self.shell = None;
        self.shell_ready = false;

        // 3. Shut down tokio runtime
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        // 4. Release the main window
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
