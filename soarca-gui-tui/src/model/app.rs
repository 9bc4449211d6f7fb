//! Application state

use soarca_gui_core::services::NavigationState;
use soarca_gui_core::types::{BackendStatus, OverlayState, Viewport};

use super::{FocusPanel, InventoryState, LoginState, ModalState, Page};
use crate::backend::CoreService;

/// Terminals narrower than this get the overlay rail
pub const NARROW_WIDTH: u16 = 80;
/// Icon-only rail
pub const COLLAPSED_RAIL_WIDTH: u16 = 6;
/// Rail with labels
pub const PINNED_RAIL_WIDTH: u16 = 28;

/// Viewport for a terminal `width` columns wide
pub fn viewport_for_width(width: u16) -> Viewport {
    if width < NARROW_WIDTH {
        Viewport::Narrow
    } else {
        Viewport::Wide
    }
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub focus: FocusPanel,
    pub current_page: Page,
    pub status_message: Option<String>,

    /// Core services and background task results
    pub backend: CoreService,
    /// Rail state (open group, pinned flag, overlay)
    pub navigation: NavigationState,
    /// Cursor over `navigation.visible_entries()`
    pub nav_cursor: usize,
    /// Last health check result
    pub backend_status: BackendStatus,

    // === Page state ===
    pub login: LoginState,
    pub inventory: InventoryState,

    pub modal: ModalState,
}

impl App {
    pub fn new(backend: CoreService) -> Self {
        let navigation = backend.navigation_state();
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            current_page: Page::Login,
            status_message: None,
            backend,
            navigation,
            nav_cursor: 0,
            backend_status: BackendStatus::Checking,
            login: LoginState::new(),
            inventory: InventoryState::new(),
            modal: ModalState::new(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Columns taken by the rail; in the narrow viewport the rail overlays the content
    pub fn rail_width(&self) -> u16 {
        match (self.navigation.viewport(), self.navigation.overlay()) {
            (Viewport::Narrow, OverlayState::Hidden) => 0,
            (Viewport::Narrow, OverlayState::Shown) => PINNED_RAIL_WIDTH,
            (Viewport::Wide, _) if self.navigation.is_pinned() => PINNED_RAIL_WIDTH,
            (Viewport::Wide, _) => COLLAPSED_RAIL_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_below_threshold() {
        assert_eq!(viewport_for_width(79), Viewport::Narrow);
        assert_eq!(viewport_for_width(80), Viewport::Wide);
    }
}
