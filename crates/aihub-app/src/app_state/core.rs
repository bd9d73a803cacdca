//! AihubApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use aihub_common::{AihubError, LayoutMode};
use aihub_config::schema::AihubConfig;
use aihub_layout::{ServiceRegistry, SlotLayout};
use aihub_webview::{WebViewHandle, WebViewManager};
use aihub_windows::{BridgeHost, HostNotifier, Launcher, SystemBrowser, UrlOpener};

use crate::presenter::Presenter;

use super::service_windows::ServiceWindow;

/// Top-level application state.
pub struct AihubApp {
    pub(super) config: AihubConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) shell: Option<WebViewHandle>,
    pub(super) webviews: WebViewManager,

    // Native service windows (absent in browser-only mode)
    pub(super) bridge_host: Option<BridgeHost<ServiceWindow>>,
    pub(super) notifier: Option<HostNotifier>,

    pub(super) presenter: Presenter,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Set once the shell page has asked for state; cleared when it reloads
    pub(super) shell_ready: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl AihubApp {
    /// Build the app. `native_windows` decides, once, whether window-only
    /// services get native windows or go to the system browser.
    pub fn new(
        config: AihubConfig,
        native_windows: bool,
        layout_override: Option<LayoutMode>,
    ) -> Result<Self, AihubError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let registry = Arc::new(ServiceRegistry::from_config(&config.services));
        let mut layout = SlotLayout::from_config(registry, &config.layout);
        if let Some(mode) = layout_override {
            layout.set_layout_mode(mode);
        }

        let opener: Arc<dyn UrlOpener> = Arc::new(SystemBrowser);
        let (launcher, bridge_host) = if native_windows {
            let (host, client) = BridgeHost::new();
            (Launcher::native(Arc::new(client), opener), Some(host))
        } else {
            (Launcher::browser_only(opener), None)
        };
        let notifier = bridge_host.as_ref().map(BridgeHost::notifier);

        let presenter = Presenter::new(layout, launcher, runtime.handle().clone(), config.zoom.step)
            .with_sidebar_collapsed(config.layout.sidebar_collapsed);

        Ok(Self {
            config,
            window: None,
            shell: None,
            webviews: WebViewManager::new(),
            bridge_host,
            notifier,
            presenter,
            tokio_runtime: Some(runtime),
            shell_ready: false,
            should_exit: false,
            last_poll: Instant::now(),
        })
    }
}
