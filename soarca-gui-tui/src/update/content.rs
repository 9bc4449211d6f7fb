//! Content panel update logic
//!
//! Only the playbook inventory has interactive content; other pages ignore
//! these messages.

use soarca_gui_core::services::{BulkActionDispatcher, EditSession};
use soarca_gui_core::types::BulkAction;

use crate::message::ContentMessage;
use crate::model::{App, Page};

/// Handle a content panel message
pub fn update(app: &mut App, msg: ContentMessage) {
    if app.current_page != Page::Playbooks {
        return;
    }

    match msg {
        // ========== Row navigation ==========
        ContentMessage::SelectPrevious => app.inventory.select_previous(),
        ContentMessage::SelectNext => {
            let len = visible_len(app);
            app.inventory.select_next(len);
        }
        ContentMessage::SelectFirst => app.inventory.cursor = 0,
        ContentMessage::SelectLast => {
            app.inventory.cursor = visible_len(app).saturating_sub(1);
        }

        // ========== Selection ==========
        ContentMessage::ToggleSelection => handle_toggle_selection(app),
        ContentMessage::ToggleSelectAll => {
            let all = app.backend.inventory().blocking_read().is_all_selected();
            app.backend.select_all(!all);
        }

        // ========== Search ==========
        ContentMessage::StartFilter => {
            app.inventory.filter_editing = true;
            app.inventory.filter_input = app.backend.inventory().blocking_read().filter().to_string();
        }
        ContentMessage::FilterInput(ch) => {
            app.inventory.filter_input.push(ch);
            apply_filter(app);
        }
        ContentMessage::FilterBackspace => {
            app.inventory.filter_input.pop();
            apply_filter(app);
        }
        ContentMessage::FinishFilter => {
            app.inventory.filter_editing = false;
        }
        ContentMessage::ClearFilter => {
            app.inventory.filter_input.clear();
            app.inventory.filter_editing = false;
            apply_filter(app);
        }

        // ========== Bulk actions ==========
        ContentMessage::ToggleActionMenu => {
            let count = selection_count(app);
            app.inventory.dispatcher.toggle_menu(count);
            if !BulkActionDispatcher::is_enabled(count) {
                app.set_status("Select playbooks first");
            }
        }
        ContentMessage::MenuNext => app.inventory.dispatcher.highlight_next(),
        ContentMessage::MenuPrevious => app.inventory.dispatcher.highlight_previous(),
        ContentMessage::MenuConfirm => {
            let action = app.inventory.dispatcher.highlighted_action();
            request_bulk_action(app, action);
        }
        ContentMessage::MenuClose => app.inventory.dispatcher.close_menu(),

        ContentMessage::Edit => handle_edit(app),
    }
}

/// Deletes go through the confirmation modal first
fn request_bulk_action(app: &mut App, action: BulkAction) {
    if !action.is_destructive() {
        execute_bulk_action(app, action);
        return;
    }
    app.inventory.dispatcher.close_menu();
    let count = selection_count(app);
    if BulkActionDispatcher::is_enabled(count) {
        app.modal.show_confirm_delete(count);
    }
}

/// Run a bulk action over the current selection in the background
pub fn execute_bulk_action(app: &mut App, action: BulkAction) {
    if app.backend.inventory().is_busy() {
        app.inventory.dispatcher.close_menu();
        app.set_status("Another operation is still running");
        return;
    }

    let count = selection_count(app);
    match app.inventory.dispatcher.prepare(count, action) {
        Ok(action) => {
            app.set_status(format!("{}: {count} playbook(s)...", action.label()));
            app.backend.execute(action);
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn visible_len(app: &App) -> usize {
    app.backend.inventory().blocking_read().filtered_records().len()
}

fn selection_count(app: &App) -> usize {
    app.backend.inventory().blocking_read().selection_count()
}

fn cursor_id(app: &App) -> Option<String> {
    let store = app.backend.inventory().blocking_read();
    store
        .filtered_records()
        .get(app.inventory.cursor)
        .map(|playbook| playbook.id.clone())
}

fn handle_toggle_selection(app: &mut App) {
    let Some(id) = cursor_id(app) else {
        return;
    };
    if let Err(e) = app.backend.toggle_selection(&id) {
        app.set_status(e.to_string());
    }
}

fn apply_filter(app: &mut App) {
    app.backend.set_filter(&app.inventory.filter_input);
    let len = visible_len(app);
    app.inventory.clamp_cursor(len);
}

fn handle_edit(app: &mut App) {
    let session = {
        let store = app.backend.inventory().blocking_read();
        store
            .filtered_records()
            .get(app.inventory.cursor)
            .map(|playbook| EditSession::begin(playbook))
    };
    if let Some(session) = session {
        app.modal.show_edit(session);
    }
}

#[cfg(test)]
mod tests {
    use tokio::runtime::Runtime;

    use super::*;
    use crate::backend::testing::core_service;
    use crate::backend::BackendEvent;
    use crate::model::Modal;

    fn inventory_app(runtime: &Runtime) -> App {
        let mut backend = core_service(runtime);
        backend.load_playbooks();
        assert!(matches!(backend.recv_blocking(), Some(BackendEvent::Loaded(Ok(5)))));
        let mut app = App::new(backend);
        app.current_page = Page::Playbooks;
        app.inventory.loaded = true;
        app
    }

    fn type_filter(app: &mut App, text: &str) {
        update(app, ContentMessage::StartFilter);
        for ch in text.chars() {
            update(app, ContentMessage::FilterInput(ch));
        }
        update(app, ContentMessage::FinishFilter);
    }

    #[test]
    fn filter_narrows_rows_and_clamps_cursor() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.inventory.cursor, 4);

        type_filter(&mut app, "ADMIN");
        assert_eq!(visible_len(&app), 2);
        assert_eq!(app.inventory.cursor, 1);
        assert!(!app.inventory.filter_editing);

        update(&mut app, ContentMessage::ClearFilter);
        assert_eq!(visible_len(&app), 5);
    }

    #[test]
    fn select_all_toggles_over_filtered_rows() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        type_filter(&mut app, "admin");

        update(&mut app, ContentMessage::ToggleSelectAll);
        assert_eq!(selection_count(&app), 2);
        update(&mut app, ContentMessage::ToggleSelectAll);
        assert_eq!(selection_count(&app), 0);
    }

    #[test]
    fn menu_stays_closed_without_selection() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        update(&mut app, ContentMessage::ToggleActionMenu);
        assert!(!app.inventory.dispatcher.is_menu_open());
        assert_eq!(app.status_message.as_deref(), Some("Select playbooks first"));
    }

    #[test]
    fn activate_runs_in_background() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        update(&mut app, ContentMessage::ToggleSelection);
        update(&mut app, ContentMessage::ToggleActionMenu);
        update(&mut app, ContentMessage::MenuConfirm);

        assert!(!app.inventory.dispatcher.is_menu_open());
        let Some(BackendEvent::BulkFinished(Ok(result))) = app.backend.recv_blocking() else {
            panic!("expected bulk result");
        };
        assert_eq!(result.action, BulkAction::Activate);
        assert_eq!(result.success_count, 1);
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        update(&mut app, ContentMessage::ToggleSelection);
        update(&mut app, ContentMessage::ToggleActionMenu);
        update(&mut app, ContentMessage::MenuPrevious);
        assert_eq!(app.inventory.dispatcher.highlighted_action(), BulkAction::Delete);

        update(&mut app, ContentMessage::MenuConfirm);
        assert!(matches!(app.modal.active, Some(Modal::ConfirmDelete { count: 1, .. })));
        assert_eq!(app.backend.inventory().blocking_read().len(), 5);
    }

    #[test]
    fn edit_opens_session_for_cursor_row() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Edit);

        let Some(Modal::EditPlaybook { session, .. }) = &app.modal.active else {
            panic!("expected edit modal");
        };
        assert_eq!(session.id(), "pb-002");
    }

    #[test]
    fn ignored_outside_inventory_page() {
        let runtime = Runtime::new().unwrap();
        let mut app = inventory_app(&runtime);
        app.current_page = Page::Dashboard;
        update(&mut app, ContentMessage::ToggleSelectAll);
        assert_eq!(selection_count(&app), 0);
    }
}
