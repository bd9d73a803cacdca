use aihub_common::{PlatformError, ServiceId, WindowHandleId};

/// What the host needs to materialize a window for a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRequest {
    pub service: ServiceId,
    pub title: String,
    pub url: String,
}

impl WindowRequest {
    pub fn new(service: ServiceId, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            service,
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A native window as the registry sees it.
///
/// Windows can disappear out-of-band (the user closes them), so
/// `is_destroyed` is checked on every lookup rather than trusted once.
pub trait NativeWindow {
    fn handle(&self) -> WindowHandleId;
    fn is_destroyed(&self) -> bool;
    /// Raise and focus an existing window.
    fn focus(&mut self);
    /// Make a window created hidden visible.
    fn reveal(&mut self);
    /// Release the underlying OS window. Must be idempotent.
    fn destroy(&mut self);
}

/// Creates native windows. Creation returns once the OS window exists;
/// page content loads afterwards and is not awaited.
pub trait WindowFactory {
    type Window: NativeWindow;

    fn create(&mut self, request: &WindowRequest) -> Result<Self::Window, PlatformError>;
}
