//! Application messages

use soarca_gui_core::types::DismissEvent;

use super::{ContentMessage, LoginMessage, ModalMessage, NavigationMessage};
use crate::backend::BackendEvent;

/// Main application message
#[derive(Debug)]
pub enum AppMessage {
    Quit,

    /// Switch between rail and content
    ToggleFocus,

    Navigation(NavigationMessage),
    Content(ContentMessage),
    Modal(ModalMessage),
    Login(LoginMessage),

    /// Background operation finished
    Backend(BackendEvent),

    /// Terminal resized to `(width, height)`
    Resize(u16, u16),

    /// Outside click or Escape while the overlay rail is shown
    Dismiss(DismissEvent),

    /// Pin / collapse the rail
    TogglePinned,

    /// Show / hide the overlay rail (narrow terminals)
    ToggleOverlay,

    /// Reload playbooks
    Refresh,

    ShowHelp,

    ClearStatus,

    /// Ignored input
    Noop,
}
