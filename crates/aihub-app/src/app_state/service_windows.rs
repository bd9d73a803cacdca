//! Native windows for services that cannot be embedded.
//!
//! Each window holds one webview pinned to the service's origin. Windows
//! are created hidden and shown once their page has loaded, so the user
//! never sees an empty frame.

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use aihub_common::{PlatformError, WindowHandleId};
use aihub_config::schema::AihubConfig;
use aihub_layout::ZoomState;
use aihub_webview::{full_window_bounds, ViewConfig, WebViewHandle, WebViewManager};
use aihub_windows::{NativeWindow, WindowFactory, WindowRequest};

use super::core::AihubApp;

// =============================================================================
// WINDOW
// =============================================================================

pub(crate) struct ServiceWindow {
    handle: WindowHandleId,
    /// `None` once destroyed. The view must be dropped before its window.
    inner: Option<(WebViewHandle, Window)>,
}

impl ServiceWindow {
    pub(super) fn fit_view(&self, width: u32, height: u32) {
        if let Some((view, _)) = &self.inner {
            if let Err(e) = view.set_bounds(full_window_bounds(width, height)) {
                tracing::warn!(handle = %self.handle, error = %e, "Failed to resize service view");
            }
        }
    }

    /// Follow the page title, e.g. "Claude" to "Claude - New chat".
    pub(super) fn set_title(&self, title: &str) {
        if let Some((_, window)) = &self.inner {
            if !title.is_empty() {
                window.set_title(title);
            }
        }
    }
}

impl NativeWindow for ServiceWindow {
    fn handle(&self) -> WindowHandleId {
        self.handle
    }

    fn is_destroyed(&self) -> bool {
        self.inner.is_none()
    }

    fn focus(&mut self) {
        if let Some((view, window)) = &self.inner {
            window.set_visible(true);
            window.set_minimized(false);
            window.focus_window();
            let _ = view.focus();
        }
    }

    fn reveal(&mut self) {
        if let Some((_, window)) = &self.inner {
            window.set_visible(true);
        }
    }

    fn destroy(&mut self) {
        if let Some((view, window)) = self.inner.take() {
            drop(view);
            drop(window);
            tracing::debug!(handle = %self.handle, "Service window destroyed");
        }
    }
}

// =============================================================================
// FACTORY
// =============================================================================

/// Creates service windows. Only constructible inside an event loop
/// callback, which is the only place windows may be created.
pub(super) struct ServiceWindowFactory<'a> {
    pub(super) event_loop: &'a ActiveEventLoop,
    pub(super) webviews: &'a WebViewManager,
    pub(super) config: &'a AihubConfig,
    pub(super) zoom: &'a ZoomState,
}

impl WindowFactory for ServiceWindowFactory<'_> {
    type Window = ServiceWindow;

    fn create(&mut self, request: &WindowRequest) -> Result<ServiceWindow, PlatformError> {
        let wc = &self.config.service_window;
        let attrs = WindowAttributes::default()
            .with_title(request.title.clone())
            .with_inner_size(LogicalSize::new(wc.width, wc.height))
            .with_min_inner_size(LogicalSize::new(wc.min_width, wc.min_height))
            .with_visible(false);

        let window = self
            .event_loop
            .create_window(attrs)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let handle = WindowHandleId(u64::from(window.id()));

        let view_config = ViewConfig {
            devtools: self.config.shell.devtools,
            user_agent: self.config.shell.user_agent.clone(),
            zoom: self.zoom.get(request.service.as_str()),
            ..ViewConfig::with_url(request.url.clone())
        };
        let size = window.inner_size();
        let view = self
            .webviews
            .create_service_view(
                handle,
                &window,
                full_window_bounds(size.width, size.height),
                view_config,
            )
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        tracing::info!(service = %request.service, %handle, "Service window created");
        Ok(ServiceWindow {
            handle,
            inner: Some((view, window)),
        })
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

impl AihubApp {
    pub(super) fn service_window_mut(&mut self, handle: WindowHandleId) -> Option<&mut ServiceWindow> {
        let host = self.bridge_host.as_mut()?;
        let service = host.registry().service_for_handle(handle)?.clone();
        host.registry_mut().get_mut(service.as_str())
    }
}
