/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// Start a capture cycle
    Capture,
    /// Show or hide the bounding-box overlay
    ToggleOverlay,
    /// Clear the history list shown in the UI
    ClearHistory,
}
