//! Modal update logic

use soarca_gui_core::types::BulkAction;

use super::content::execute_bulk_action;
use crate::message::ModalMessage;
use crate::model::{App, EditField, Modal};

/// Handle a modal message
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::EditPlaybook { .. }) => handle_edit(app, msg),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Help | Modal::Error { .. }) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
        None => {}
    }
}

fn handle_edit(app: &mut App, msg: ModalMessage) {
    if let ModalMessage::Close = msg {
        if let Some(Modal::EditPlaybook { session, .. }) = app.modal.active.take() {
            session.discard();
        }
        return;
    }

    let Some(Modal::EditPlaybook {
        session,
        focus,
        error,
        saving,
    }) = app.modal.active.as_mut()
    else {
        return;
    };
    // The draft is frozen while a save is in flight
    if *saving {
        return;
    }

    match msg {
        ModalMessage::NextField => *focus = focus.next(),
        ModalMessage::PrevField => *focus = focus.previous(),
        ModalMessage::Input(ch) => match focus {
            EditField::Name => session.name.push(ch),
            EditField::Description => session.description.push(ch),
            EditField::Status => {}
        },
        ModalMessage::Backspace => match focus {
            EditField::Name => {
                session.name.pop();
            }
            EditField::Description => {
                session.description.pop();
            }
            EditField::Status => {}
        },
        ModalMessage::CycleStatus(forward) => {
            if *focus == EditField::Status {
                session.cycle_status(forward);
            }
        }
        ModalMessage::Confirm => match session.validate() {
            Ok(_) => {
                *error = None;
                *saving = true;
                app.backend.save_edit(session.clone());
            }
            Err(e) => *error = Some(e.to_string()),
        },
        ModalMessage::Close | ModalMessage::ToggleButton => {}
    }
}

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::ToggleButton => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = app.modal.active.as_mut() {
                *focus = 1 - *focus;
            }
        }
        ModalMessage::Confirm => {
            let confirmed = matches!(app.modal.active, Some(Modal::ConfirmDelete { focus: 1, .. }));
            app.modal.close();
            if confirmed {
                execute_bulk_action(app, BulkAction::Delete);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use soarca_gui_core::services::EditSession;
    use soarca_gui_core::types::PlaybookStatus;
    use tokio::runtime::Runtime;

    use super::*;
    use crate::backend::testing::core_service;
    use crate::backend::BackendEvent;
    use crate::model::Page;

    fn loaded_app(runtime: &Runtime) -> App {
        let mut backend = core_service(runtime);
        backend.load_playbooks();
        backend.recv_blocking();
        let mut app = App::new(backend);
        app.current_page = Page::Playbooks;
        app
    }

    fn open_edit(app: &mut App, id: &str) {
        let session = EditSession::begin(app.backend.inventory().blocking_read().get(id).unwrap());
        app.modal.show_edit(session);
    }

    #[test]
    fn typing_edits_focused_field_only() {
        let runtime = Runtime::new().unwrap();
        let mut app = loaded_app(&runtime);
        open_edit(&mut app, "pb-001");

        update(&mut app, ModalMessage::Backspace);
        update(&mut app, ModalMessage::Input('E'));
        update(&mut app, ModalMessage::NextField);
        update(&mut app, ModalMessage::NextField);
        update(&mut app, ModalMessage::CycleStatus(true));

        let Some(Modal::EditPlaybook { session, .. }) = &app.modal.active else {
            panic!("expected edit modal");
        };
        assert_eq!(session.name, "Phishing TriagE");
        assert_eq!(session.status, PlaybookStatus::Active.next().as_str());
        // Store untouched until commit
        assert_eq!(
            app.backend.inventory().blocking_read().get("pb-001").unwrap().name,
            "Phishing Triage"
        );
    }

    #[test]
    fn invalid_draft_shows_error_without_saving() {
        let runtime = Runtime::new().unwrap();
        let mut app = loaded_app(&runtime);
        open_edit(&mut app, "pb-001");
        if let Some(Modal::EditPlaybook { session, .. }) = app.modal.active.as_mut() {
            session.name = "   ".to_string();
        }

        update(&mut app, ModalMessage::Confirm);
        let Some(Modal::EditPlaybook { error, saving, .. }) = &app.modal.active else {
            panic!("expected edit modal");
        };
        assert!(error.is_some());
        assert!(!saving);
        assert!(app.backend.try_recv().is_none());
    }

    #[test]
    fn confirm_saves_in_background() {
        let runtime = Runtime::new().unwrap();
        let mut app = loaded_app(&runtime);
        open_edit(&mut app, "pb-004");
        if let Some(Modal::EditPlaybook { session, .. }) = app.modal.active.as_mut() {
            session.status = "active".to_string();
        }

        update(&mut app, ModalMessage::Confirm);
        let Some(BackendEvent::Saved { result: Ok(saved), .. }) = app.backend.recv_blocking() else {
            panic!("expected saved playbook");
        };
        assert_eq!(saved.status, PlaybookStatus::Active);
    }

    #[test]
    fn close_discards_draft() {
        let runtime = Runtime::new().unwrap();
        let mut app = loaded_app(&runtime);
        open_edit(&mut app, "pb-002");
        update(&mut app, ModalMessage::Input('!'));
        update(&mut app, ModalMessage::Close);

        assert!(!app.modal.is_open());
        assert_eq!(
            app.backend.inventory().blocking_read().get("pb-002").unwrap().name,
            "Malware Containment"
        );
    }

    #[test]
    fn delete_requires_confirm_button() {
        let runtime = Runtime::new().unwrap();
        let mut app = loaded_app(&runtime);
        app.backend.toggle_selection("pb-003").unwrap();

        app.modal.show_confirm_delete(1);
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert!(app.backend.try_recv().is_none());

        app.modal.show_confirm_delete(1);
        update(&mut app, ModalMessage::ToggleButton);
        update(&mut app, ModalMessage::Confirm);
        let Some(BackendEvent::BulkFinished(Ok(result))) = app.backend.recv_blocking() else {
            panic!("expected bulk result");
        };
        assert_eq!(result.success_count, 1);
        assert!(app.backend.inventory().blocking_read().get("pb-003").is_none());
    }
}
