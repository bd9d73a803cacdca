//! WebView event types.

use aihub_common::WindowHandleId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Which view an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// The main window's layout page.
    Shell,
    /// The content view of a native service window.
    Service(WindowHandleId),
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        view: ViewId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view: ViewId,
        title: String,
    },
    /// An IPC message from the shell page. Already checked to be JSON.
    IpcMessage {
        view: ViewId,
        body: String,
    },
    /// A navigation or new-window request was denied in place and should
    /// be opened in the system browser instead.
    ExternalNavigation {
        view: ViewId,
        url: String,
    },
}
