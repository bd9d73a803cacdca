use std::sync::mpsc;

use aihub_common::ServiceId;
use aihub_layout::{EmbedTracker, LayoutSnapshot, SlotLayout, ToggleOutcome};
use aihub_windows::{LaunchOutcome, Launcher};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// What activating a service led to.
#[derive(Debug)]
pub enum Activation {
    /// Embeddable service: the active set changed.
    Toggled(ToggleOutcome),
    /// Window-only service: a launch is in flight.
    Launched(JoinHandle<LaunchOutcome>),
}

pub struct Presenter {
    pub(super) layout: SlotLayout,
    pub(super) failures: EmbedTracker,
    pub(super) launcher: Launcher,
    pub(super) runtime: Handle,
    pub(super) zoom_step: f64,
    pub(super) sidebar_collapsed: bool,
    /// Last known set of services with a native window.
    pub(super) open_windows: Vec<ServiceId>,
    pub(super) windows_tx: mpsc::Sender<Vec<ServiceId>>,
    pub(super) windows_rx: mpsc::Receiver<Vec<ServiceId>>,
}

impl Presenter {
    pub fn new(layout: SlotLayout, launcher: Launcher, runtime: Handle, zoom_step: f64) -> Self {
        let (windows_tx, windows_rx) = mpsc::channel();
        Self {
            layout,
            failures: EmbedTracker::new(),
            launcher,
            runtime,
            zoom_step,
            sidebar_collapsed: false,
            open_windows: Vec::new(),
            windows_tx,
            windows_rx,
        }
    }

    pub fn with_sidebar_collapsed(mut self, collapsed: bool) -> Self {
        self.sidebar_collapsed = collapsed;
        self
    }

    // -- Accessors --

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    pub fn failures(&self) -> &EmbedTracker {
        &self.failures
    }

    pub fn in_native_shell(&self) -> bool {
        self.launcher.in_native_shell()
    }

    pub fn open_windows(&self) -> &[ServiceId] {
        &self.open_windows
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Everything the shell page renders.
    pub fn snapshot(&self) -> LayoutSnapshot {
        let mut snapshot = LayoutSnapshot::capture(&self.layout, &self.failures);
        snapshot.open_windows = self.open_windows.clone();
        snapshot.native_shell = self.in_native_shell();
        snapshot.sidebar_collapsed = self.sidebar_collapsed;
        snapshot
    }
}
