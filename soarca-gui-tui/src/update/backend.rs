//! Finished background operations

use soarca_gui_core::types::{AuthOutcome, BulkAction, BulkActionResult, Playbook};
use soarca_gui_core::{CoreError, CoreResult};

use crate::backend::BackendEvent;
use crate::model::{App, Modal, Page};

/// Shown for any transport failure during login
const LOGIN_NETWORK_ERROR: &str = "A network error occurred. Please try again.";

/// Apply a finished background operation to the model
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Loaded(Ok(count)) => {
            app.inventory.loaded = true;
            let len = app.backend.inventory().blocking_read().filtered_records().len();
            app.inventory.clamp_cursor(len);
            app.set_status(format!("Loaded {count} playbook(s)"));
        }
        BackendEvent::Loaded(Err(e)) => {
            app.modal.show_error("Failed to load playbooks", e.to_string());
        }

        BackendEvent::BulkFinished(Ok(result)) => {
            let len = app.backend.inventory().blocking_read().filtered_records().len();
            app.inventory.clamp_cursor(len);
            app.set_status(bulk_summary(&result));
            if result.is_partial_failure() {
                let details = result
                    .failures
                    .iter()
                    .map(|f| format!("{}: {}", f.playbook_id, f.reason))
                    .collect::<Vec<_>>()
                    .join("\n");
                app.modal.show_error(bulk_summary(&result), details);
            }
        }
        BackendEvent::BulkFinished(Err(e)) => {
            app.set_status(e.to_string());
        }

        BackendEvent::Saved { id, result } => handle_saved(app, &id, result),

        BackendEvent::LoginFinished(result) => handle_login(app, result),

        BackendEvent::Health(status) => {
            app.backend_status = status;
        }
    }
}

fn bulk_summary(result: &BulkActionResult) -> String {
    let verb = match result.action {
        BulkAction::Activate => "Activated",
        BulkAction::Deactivate => "Deactivated",
        BulkAction::Delete => "Deleted",
    };
    if result.failed_count == 0 {
        format!("{verb} {} playbook(s)", result.success_count)
    } else {
        format!(
            "{verb} {} playbook(s), {} failed",
            result.success_count, result.failed_count
        )
    }
}

fn handle_saved(app: &mut App, id: &str, result: CoreResult<Playbook>) {
    // Results for a draft that is no longer open only reach the status line
    let editing = matches!(
        &app.modal.active,
        Some(Modal::EditPlaybook { session, .. }) if session.id() == id
    );
    match result {
        Ok(playbook) => {
            if editing {
                app.modal.close();
            }
            app.set_status(format!("Saved \"{}\"", playbook.name));
        }
        Err(e) => {
            if !editing {
                log::warn!("Save of {id} failed after its draft was closed: {e}");
                app.set_status(format!("Failed to save {id}: {e}"));
                return;
            }
            // Keep the draft open so the user can retry
            if let Some(Modal::EditPlaybook { error, saving, .. }) = app.modal.active.as_mut() {
                *saving = false;
                *error = Some(e.to_string());
            }
        }
    }
}

fn handle_login(app: &mut App, result: CoreResult<AuthOutcome>) {
    app.login.submitting = false;
    app.clear_status();
    match result {
        Ok(AuthOutcome::Success) => {
            log::info!("Signed in as {}", app.login.email);
            app.login.password.clear();
            app.login.errors.clear();
            app.current_page = Page::Dashboard;
            app.navigation.set_current_path("/dashboard");
            app.backend.load_playbooks();
        }
        Ok(AuthOutcome::Rejected(messages)) => {
            app.login.errors = messages;
        }
        Err(CoreError::NetworkError(e)) => {
            log::warn!("Login request failed: {e}");
            app.login.errors = vec![LOGIN_NETWORK_ERROR.to_string()];
        }
        Err(e) => {
            app.login.errors = vec![e.to_string()];
        }
    }
}
