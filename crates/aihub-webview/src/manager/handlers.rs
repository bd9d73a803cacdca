use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ViewId, WebViewEvent};
use crate::navigation::NavigationPolicy;

use super::WebViewManager;

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(?view, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(?view, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { view, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?view, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { view, state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(?view, title = %title, "title changed");
            push(&events, WebViewEvent::TitleChanged { view, title });
        })
    }

    /// Allowed navigations proceed in place. Refused ones are reported for
    /// the system browser.
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
        policy: NavigationPolicy,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if policy.allows(&url) {
                debug!(?view, url = %url, "navigation allowed");
                return true;
            }
            debug!(?view, url = %url, "navigation redirected to system browser");
            push(&events, WebViewEvent::ExternalNavigation { view, url });
            false
        })
    }

    /// Pop-ups never open inside the app.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        view: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(?view, url = %url, "new window redirected to system browser");
            push(&events, WebViewEvent::ExternalNavigation { view, url });
            false
        })
    }
}
