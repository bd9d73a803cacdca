//! IPC protocol between Rust and the shell page.
//!
//! - **JS -> Rust**: `window.aihub.ipc.send(kind, payload)` posts
//!   `{"kind": ..., "payload": ...}` through wry's `ipc_handler`.
//! - **Rust -> JS**: `evaluate_script` calls `window.aihub.ipc._dispatch`.
//!
//! Only the shell view gets the bridge. Remote service pages never do.

use serde::{Deserialize, Serialize};

/// Envelope of a message from JavaScript. The payload is kept raw; the
/// receiver decides how to interpret it once the kind is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Injected into the shell view before any page script runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.aihub = window.aihub || {};
    window.aihub.ipc = {
        send: function(kind, payload) {
            var msg = { kind: kind };
            // Unit messages carry no payload at all.
            if (payload !== undefined) {
                msg.payload = payload;
            }
            window.ipc.postMessage(JSON.stringify(msg));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.aihub.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
