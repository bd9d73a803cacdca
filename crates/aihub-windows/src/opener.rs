use aihub_common::PlatformError;

/// Hands a URL to something outside the app.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), PlatformError>;
}

/// The user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), PlatformError> {
        tracing::info!(url, "opening in system browser");
        open::that(url).map_err(|e| PlatformError::Opener(format!("{url}: {e}")))
    }
}
