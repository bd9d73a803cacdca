//! Polling for webview events, window-manager requests, and window-list
//! refreshes.

use std::time::Instant;

use winit::event_loop::ActiveEventLoop;

use aihub_webview::{PageLoadState, ViewId, WebViewEvent};

use super::core::AihubApp;
use super::service_windows::ServiceWindowFactory;
use super::types::POLL_INTERVAL;

impl AihubApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.pump_window_requests(event_loop);
            if self.presenter.poll_open_windows() {
                self.push_state();
            }
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// Serve queued window-manager requests. Windows can only be created
    /// here, on the event loop thread.
    fn pump_window_requests(&mut self, event_loop: &ActiveEventLoop) {
        let Some(host) = self.bridge_host.as_mut() else {
            return;
        };
        let mut factory = ServiceWindowFactory {
            event_loop,
            webviews: &self.webviews,
            config: &self.config,
            zoom: self.presenter.layout().zoom(),
        };
        let handled = host.pump(&mut factory);
        if handled > 0 {
            tracing::trace!(handled, "window requests served");
        }
    }

    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage {
                    view: ViewId::Shell,
                    body,
                } => self.handle_ipc_message(&body),

                WebViewEvent::IpcMessage { view, .. } => {
                    tracing::warn!(?view, "IPC message rejected: not from the shell view");
                }

                WebViewEvent::ExternalNavigation { view, url } => {
                    tracing::info!(?view, %url, "Navigation handed to the system browser");
                    self.presenter.open_in_browser(url);
                }

                WebViewEvent::PageLoad {
                    view: ViewId::Shell,
                    state: PageLoadState::Started,
                    ..
                } => {
                    // The page will ask for state again once it is up.
                    self.shell_ready = false;
                }

                WebViewEvent::PageLoad {
                    view: ViewId::Service(handle),
                    state: PageLoadState::Finished,
                    ..
                } => {
                    if let Some(ref notifier) = self.notifier {
                        notifier.content_loaded(handle);
                    }
                }

                WebViewEvent::TitleChanged {
                    view: ViewId::Service(handle),
                    title,
                } => {
                    if let Some(window) = self.service_window_mut(handle) {
                        window.set_title(&title);
                    }
                }

                WebViewEvent::PageLoad { .. } | WebViewEvent::TitleChanged { .. } => {}
            }
        }
    }
}
