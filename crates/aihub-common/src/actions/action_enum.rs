use serde::{Deserialize, Serialize};

use crate::types::{LayoutMode, ServiceId};

/// Every user-triggerable action in the shell.
///
/// The shell page posts these as `{ "kind": ..., "payload": ... }` JSON;
/// the app dispatcher matches on this enum to route to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// The shell page finished loading and wants a state snapshot.
    Ready,
    SetLayout(LayoutMode),
    /// Sidebar click on a service: embed toggle or external window.
    ActivateService(ServiceId),
    AssignSlot {
        slot: usize,
        service: ServiceId,
    },
    ZoomIn(ServiceId),
    ZoomOut(ServiceId),
    ResetZoom(ServiceId),
    /// Explicit "open in new window" from a slot header or fallback card.
    OpenExternal(ServiceId),
    /// The embedding surface in `slot` could not display `service`.
    EmbedFailure {
        slot: usize,
        service: ServiceId,
    },
    CloseWindow(ServiceId),
    ToggleSidebar,
}
