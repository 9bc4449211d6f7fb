//! Update layer: state transitions
//!
//! The only place the Model is mutated. `update` matches every [`AppMessage`]
//! and hands sub-messages to the submodules:
//!
//! ```text
//!     navigation   rail cursor, group toggling, page routing
//!     content      inventory cursor, selection, search, bulk menu
//!     modal        edit form, delete confirmation, help, errors
//!     login        credentials form
//!     backend      finished background operations
//! ```
//!
//! After an update, control returns to the main loop and the View re-renders
//! from the new Model on the next tick.

mod backend;
mod content;
mod login;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{viewport_for_width, App, Page};

/// Handle an application message
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Login(login_msg) => login::update(app, login_msg),
        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::Resize(width, _) => {
            app.navigation.set_viewport(viewport_for_width(width));
            navigation::clamp_cursor(app);
        }

        AppMessage::Dismiss(event) => {
            if app.navigation.dismiss(event) {
                navigation::clamp_cursor(app);
            }
        }

        AppMessage::TogglePinned => {
            app.navigation.toggle_pinned();
            navigation::clamp_cursor(app);
        }

        AppMessage::ToggleOverlay => {
            app.navigation.toggle_overlay();
            navigation::clamp_cursor(app);
        }

        AppMessage::Refresh => {
            if app.current_page == Page::Login {
                return;
            }
            if app.backend.inventory().is_busy() {
                app.set_status("Busy, try again shortly");
                return;
            }
            app.set_status("Refreshing...");
            app.backend.load_playbooks();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
