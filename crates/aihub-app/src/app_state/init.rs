//! Main window creation and shell view setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use aihub_webview::{full_window_bounds, ContentProvider, NavigationPolicy, ViewConfig};

use super::core::AihubApp;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Where the shell page is served from. WebView2 only exposes custom
/// protocols under `http://<scheme>.localhost/`.
#[cfg(windows)]
const SHELL_URL: &str = "http://aihub.localhost/index.html";
#[cfg(not(windows))]
const SHELL_URL: &str = "aihub://localhost/index.html";

const SHELL_HTML: &str = include_str!("../../../../assets/shell/index.html");
const SHELL_JS: &str = include_str!("../../../../assets/shell/shell.js");
const SHELL_CSS: &str = include_str!("../../../../assets/shell/shell.css");

// =============================================================================
// INITIALIZATION
// =============================================================================

impl AihubApp {
    /// Create the main window and its shell view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(LogicalSize::new(wc.width, wc.height))
            .with_min_inner_size(LogicalSize::new(wc.min_width, wc.min_height));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.webviews.set_content_provider(bundled_content());

        let size = window.inner_size();
        let view_config = ViewConfig {
            devtools: self.config.shell.devtools,
            ..ViewConfig::with_url(SHELL_URL)
        };
        let policy = NavigationPolicy::shell(
            self.presenter
                .layout()
                .registry()
                .iter()
                .map(|s| s.url.as_str()),
        );

        match self.webviews.create_shell(
            &*window,
            full_window_bounds(size.width, size.height),
            view_config,
            policy,
        ) {
            Ok(shell) => self.shell = Some(shell),
            Err(e) => {
                tracing::error!("Failed to create shell view: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!(
            native_windows = self.presenter.in_native_shell(),
            "Window created and shell view initialized"
        );
        true
    }
}

/// The shell page, compiled into the binary.
fn bundled_content() -> ContentProvider {
    let mut provider = ContentProvider::embedded();
    provider.add_asset("index.html", "text/html", SHELL_HTML);
    provider.add_asset("shell.js", "application/javascript", SHELL_JS);
    provider.add_asset("shell.css", "text/css", SHELL_CSS);
    provider
}
