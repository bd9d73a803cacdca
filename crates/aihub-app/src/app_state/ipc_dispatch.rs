//! IPC message validation and dispatch from the shell page.

use aihub_common::Action;
use aihub_webview::IpcMessage;

use super::core::AihubApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "ready",
    "set_layout",
    "activate_service",
    "assign_slot",
    "zoom_in",
    "zoom_out",
    "reset_zoom",
    "open_external",
    "embed_failure",
    "close_window",
    "toggle_sidebar",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// Why a message from the page was dropped.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum IpcRejection {
    Malformed,
    UnknownKind(String),
    BadPayload(String),
}

/// Validate a raw IPC body and turn it into an [`Action`].
pub(super) fn parse_action(body: &str) -> Result<Action, IpcRejection> {
    let msg = IpcMessage::from_json(body).ok_or(IpcRejection::Malformed)?;
    if !is_ipc_kind_allowed(&msg.kind) {
        return Err(IpcRejection::UnknownKind(msg.kind));
    }
    serde_json::from_str(body).map_err(|_| IpcRejection::BadPayload(msg.kind))
}

// =============================================================================
// DISPATCH
// =============================================================================

impl AihubApp {
    /// Handle a single IPC message from the shell view.
    pub(super) fn handle_ipc_message(&mut self, body: &str) {
        match parse_action(body) {
            Ok(action) => {
                tracing::debug!(action = action.label(), "IPC message dispatched");
                self.dispatch(action);
            }
            Err(IpcRejection::Malformed) => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            }
            Err(IpcRejection::UnknownKind(kind)) => {
                tracing::warn!(%kind, "IPC message rejected: unknown kind");
            }
            Err(IpcRejection::BadPayload(kind)) => {
                tracing::warn!(%kind, "IPC message rejected: invalid payload");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
