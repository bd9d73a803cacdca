//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use aihub_common::WindowHandleId;
use aihub_webview::full_window_bounds;

use super::core::AihubApp;

impl ApplicationHandler for AihubApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.is_main_window(window_id) {
            self.handle_main_window_event(event_loop, event);
        } else {
            self.handle_service_window_event(WindowHandleId(u64::from(window_id)), event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl AihubApp {
    fn is_main_window(&self, window_id: WindowId) -> bool {
        self.window.as_ref().is_some_and(|w| w.id() == window_id)
    }

    fn handle_main_window_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref shell) = self.shell {
                        if let Err(e) = shell.set_bounds(full_window_bounds(size.width, size.height))
                        {
                            tracing::warn!(error = %e, "Failed to resize shell view");
                        }
                    }
                }
            }

            WindowEvent::Focused(true) => {
                if let Some(ref shell) = self.shell {
                    let _ = shell.focus();
                }
            }

            _ => {}
        }
    }

    /// Events for a native service window. The window system may close
    /// these at any time, so the registry learns about it from here.
    fn handle_service_window_event(&mut self, handle: WindowHandleId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                tracing::debug!(%handle, "Service window closed by user");
                if let Some(ref notifier) = self.notifier {
                    notifier.window_destroyed(handle);
                }
                self.presenter.refresh_open_windows();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(window) = self.service_window_mut(handle) {
                        window.fit_view(size.width, size.height);
                    }
                }
            }

            _ => {}
        }
    }
}
