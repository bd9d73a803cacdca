use std::borrow::Cow;
use std::sync::Arc;

use aihub_common::WindowHandleId;
use tracing::{debug, warn};
use wry::http::{header, HeaderValue, Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::events::ViewId;
use crate::ipc::IPC_INIT_SCRIPT;
use crate::navigation::NavigationPolicy;

use super::handle::WebViewHandle;
use super::types::ViewConfig;
use super::WebViewManager;

/// Origin of the bundled shell content.
pub const SHELL_ORIGIN: &str = "aihub://localhost";

/// Bounds covering a whole window's client area.
pub fn full_window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

impl WebViewManager {
    /// Create the shell view filling `window`. It gets the IPC bridge and
    /// the `aihub://` protocol.
    pub fn create_shell<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: ViewConfig,
        policy: NavigationPolicy,
    ) -> Result<WebViewHandle, wry::Error> {
        let view = ViewId::Shell;
        let mut builder = self
            .base_builder(&config, view, bounds)
            .with_initialization_script(IPC_INIT_SCRIPT);

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), view);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events), view, policy);
        builder = self.attach_custom_protocol(builder);

        let webview = builder.build_as_child(window)?;
        debug!(url = %config.url, "shell view created");
        Ok(WebViewHandle { webview })
    }

    /// Create the content view of a service window. Remote pages get no
    /// IPC bridge; navigation is pinned to the initial URL's origin.
    pub fn create_service_view<W: raw_window_handle::HasWindowHandle>(
        &self,
        handle: WindowHandleId,
        window: &W,
        bounds: wry::Rect,
        config: ViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let view = ViewId::Service(handle);
        let policy = NavigationPolicy::service(&config.url);
        let mut builder = self.base_builder(&config, view, bounds);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events), view, policy);

        let webview = builder.build_as_child(window)?;
        if (config.zoom - 1.0).abs() > f64::EPSILON {
            if let Err(e) = webview.zoom(config.zoom) {
                warn!(%handle, error = %e, "failed to apply initial zoom");
            }
        }
        debug!(%handle, url = %config.url, "service view created");
        Ok(WebViewHandle { webview })
    }

    /// Set the content provider for serving bundled assets via `aihub://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn base_builder<'a>(
        &self,
        config: &ViewConfig,
        view: ViewId,
        bounds: wry::Rect,
    ) -> WebViewBuilder<'a> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_url(&config.url);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), view);
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), view);
        Self::attach_new_window_handler(builder, Arc::clone(&self.events), view)
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol("aihub".to_string(), move |_wv_id, request| {
                protocol_response(&cp, &request.uri().to_string())
            });
        }
        builder
    }
}

/// Answer one `aihub://` request.
pub fn protocol_response(provider: &ContentProvider, uri: &str) -> Response<Cow<'static, [u8]>> {
    let path = uri
        .strip_prefix("aihub://localhost/")
        .or_else(|| uri.strip_prefix("aihub://localhost"))
        .or_else(|| uri.strip_prefix("http://aihub.localhost/"))
        .or_else(|| uri.strip_prefix("aihub:///"))
        .or_else(|| uri.strip_prefix("aihub://"))
        .unwrap_or("");
    let path = path.split(['?', '#']).next().unwrap_or("");

    match provider.resolve(path) {
        Some((mime, data)) => {
            let mut response = Response::new(Cow::from(data.into_owned()));
            let content_type = HeaderValue::from_str(&mime)
                .unwrap_or(HeaderValue::from_static("application/octet-stream"));
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
            response.headers_mut().insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static(SHELL_ORIGIN),
            );
            response
        }
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            let mut response = Response::new(Cow::from(b"Not Found".to_vec()));
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ContentProvider {
        let mut cp = ContentProvider::embedded();
        cp.add_asset("index.html", "text/html", b"<html>shell</html>".to_vec());
        cp.add_asset("shell.js", "application/javascript", b"1".to_vec());
        cp
    }

    #[test]
    fn serves_known_asset_with_mime() {
        let response = protocol_response(&provider(), "aihub://localhost/index.html");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(response.body().as_ref(), b"<html>shell</html>");
    }

    #[test]
    fn root_serves_index() {
        let response = protocol_response(&provider(), "aihub://localhost/");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body().as_ref(), b"<html>shell</html>");
    }

    #[test]
    fn webview2_rewritten_uri_is_understood() {
        let response = protocol_response(&provider(), "http://aihub.localhost/shell.js?v=2");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );
    }

    #[test]
    fn missing_asset_is_404() {
        let response = protocol_response(&provider(), "aihub://localhost/nope.css");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn full_window_bounds_is_physical() {
        let rect = full_window_bounds(1400, 900);
        match rect.size {
            wry::dpi::Size::Physical(size) => {
                assert_eq!(size.width, 1400);
                assert_eq!(size.height, 900);
            }
            _ => panic!("Expected physical size"),
        }
    }
}
