use super::Action;

impl Action {
    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Ready => "Ready",
            Action::SetLayout(_) => "Set Layout",
            Action::ActivateService(_) => "Activate Service",
            Action::AssignSlot { .. } => "Assign Slot",
            Action::ZoomIn(_) => "Zoom In",
            Action::ZoomOut(_) => "Zoom Out",
            Action::ResetZoom(_) => "Reset Zoom",
            Action::OpenExternal(_) => "Open in New Window",
            Action::EmbedFailure { .. } => "Embed Failure",
            Action::CloseWindow(_) => "Close Window",
            Action::ToggleSidebar => "Toggle Sidebar",
        }
    }

    /// Whether handling this action can change what the shell page shows.
    pub fn mutates_layout(&self) -> bool {
        !matches!(
            self,
            Action::OpenExternal(_) | Action::CloseWindow(_) | Action::Ready
        )
    }
}
