//! Hand-written fakes shared by this crate's tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use aihub_common::{PlatformError, WindowHandleId};

use crate::native::{NativeWindow, WindowFactory, WindowRequest};
use crate::opener::UrlOpener;

pub struct FakeWindow {
    pub handle: WindowHandleId,
    /// Shared with the test so it can close the window behind the
    /// registry's back.
    pub destroyed: Arc<AtomicBool>,
    pub visible: bool,
    pub focus_count: usize,
}

impl NativeWindow for FakeWindow {
    fn handle(&self) -> WindowHandleId {
        self.handle
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }

    fn reveal(&mut self) {
        self.visible = true;
    }

    fn destroy(&mut self) {
        self.destroyed.store(true, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct FakeFactory {
    next: u64,
    pub created: Arc<AtomicUsize>,
    pub fail: bool,
    /// Destroy flags of every window handed out, in creation order.
    pub flags: Vec<Arc<AtomicBool>>,
}

impl FakeFactory {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl WindowFactory for FakeFactory {
    type Window = FakeWindow;

    fn create(&mut self, _request: &WindowRequest) -> Result<FakeWindow, PlatformError> {
        if self.fail {
            return Err(PlatformError::WindowCreation("no display".into()));
        }
        self.next += 1;
        self.created.fetch_add(1, Ordering::SeqCst);
        let destroyed = Arc::new(AtomicBool::new(false));
        self.flags.push(destroyed.clone());
        Ok(FakeWindow {
            handle: WindowHandleId(self.next),
            destroyed,
            visible: false,
            focus_count: 0,
        })
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::Opener("no browser".into()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Blocks in `open` until the test releases it, or gives up after a
/// second.
pub struct GatedOpener {
    release: Mutex<mpsc::Receiver<()>>,
    opened: Mutex<Vec<String>>,
}

impl GatedOpener {
    pub fn new() -> (Self, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel();
        let opener = Self {
            release: Mutex::new(rx),
            opened: Mutex::new(Vec::new()),
        };
        (opener, tx)
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl UrlOpener for GatedOpener {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        self.release
            .lock()
            .unwrap()
            .recv_timeout(Duration::from_secs(1))
            .map_err(|_| PlatformError::Opener("gate never released".into()))?;
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub fn request(id: &str) -> WindowRequest {
    WindowRequest::new(id.into(), id.to_uppercase(), format!("https://{id}.example/"))
}
