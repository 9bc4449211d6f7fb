//! Rail update logic

use soarca_gui_core::types::{DismissEvent, NavEntry};

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, Page};

/// Handle a rail message
pub fn update(app: &mut App, msg: NavigationMessage) {
    let len = app.navigation.visible_entries().len();
    match msg {
        NavigationMessage::SelectPrevious => {
            app.nav_cursor = app.nav_cursor.saturating_sub(1);
        }
        NavigationMessage::SelectNext => {
            if app.nav_cursor + 1 < len {
                app.nav_cursor += 1;
            }
        }
        NavigationMessage::SelectFirst => {
            app.nav_cursor = 0;
        }
        NavigationMessage::SelectLast => {
            app.nav_cursor = len.saturating_sub(1);
        }
        NavigationMessage::Confirm => confirm(app),
    }
}

/// Keep the cursor on a visible row after the rail changed shape
pub fn clamp_cursor(app: &mut App) {
    let len = app.navigation.visible_entries().len();
    app.nav_cursor = app.nav_cursor.min(len.saturating_sub(1));
}

fn confirm(app: &mut App) {
    enum Target {
        Group(&'static str),
        Leaf(Page, &'static str),
    }

    let target = {
        let entries = app.navigation.visible_entries();
        let Some(entry) = entries.get(app.nav_cursor) else {
            return;
        };
        match *entry {
            NavEntry::Group { node, .. } => Target::Group(node.id),
            NavEntry::Item(node) | NavEntry::Child { node, .. } => {
                Target::Leaf(Page::for_node(node), node.href)
            }
        }
    };

    match target {
        Target::Group(id) => {
            if let Err(e) = app.navigation.toggle_group(id) {
                app.set_status(e.to_string());
            }
            clamp_cursor(app);
        }
        Target::Leaf(page, href) => {
            app.navigation.set_current_path(href);
            open_page(app, page);
        }
    }
}

fn open_page(app: &mut App, page: Page) {
    app.clear_status();
    if page == Page::Playbooks && !app.inventory.loaded && !app.backend.inventory().is_busy() {
        app.set_status("Loading playbooks...");
        app.backend.load_playbooks();
    }
    if page != Page::Dashboard {
        app.focus = FocusPanel::Content;
    }
    // Picking a destination closes the overlay
    app.navigation.dismiss(DismissEvent::OutsideClick);
    app.current_page = page;
}
