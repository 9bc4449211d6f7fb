//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use soarca_gui_core::types::{DismissEvent, OverlayState, Viewport};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, LoginMessage, ModalMessage, NavigationMessage};
use crate::model::{App, EditField, Modal, Page, PINNED_RAIL_WIDTH};

/// Poll for an event, waiting at most `timeout`
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate an event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

fn overlay_shown(app: &App) -> bool {
    app.navigation.viewport() == Viewport::Narrow
        && app.navigation.overlay() == OverlayState::Shown
}

/// A left click beside the shown overlay dismisses it
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
        && overlay_shown(app)
        && mouse.column >= PINNED_RAIL_WIDTH
    {
        AppMessage::Dismiss(DismissEvent::OutsideClick)
    } else {
        AppMessage::Noop
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only: Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.current_page == Page::Login {
        return handle_login_keys(key);
    }

    // Text input swallows everything else
    if app.inventory.filter_editing && app.current_page == Page::Playbooks {
        return handle_filter_keys(key);
    }

    if DefaultKeymap::BACK.matches(&key) && overlay_shown(app) {
        return AppMessage::Dismiss(DismissEvent::Escape);
    }

    if app.inventory.dispatcher.is_menu_open() && app.current_page == Page::Playbooks {
        return handle_action_menu_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::ClearStatus;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_RAIL.matches(&key) {
        return AppMessage::TogglePinned;
    }
    if DefaultKeymap::TOGGLE_OVERLAY.matches(&key) {
        return AppMessage::ToggleOverlay;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.current_page != Page::Playbooks {
        return AppMessage::Noop;
    }

    if DefaultKeymap::TOGGLE_ROW.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSelection);
    }
    if DefaultKeymap::TOGGLE_ALL.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSelectAll);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::StartFilter);
    }
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearFilter);
    }
    if DefaultKeymap::ACTIONS.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleActionMenu);
    }
    if DefaultKeymap::EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Edit),
        _ => AppMessage::Noop,
    }
}

fn handle_filter_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearFilter);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Content(ContentMessage::FinishFilter),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::FilterBackspace),
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Content(ContentMessage::FilterInput(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_action_menu_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::MenuPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::MenuNext),
        KeyCode::Enter => AppMessage::Content(ContentMessage::MenuConfirm),
        KeyCode::Esc | KeyCode::Char('b') => AppMessage::Content(ContentMessage::MenuClose),
        _ => AppMessage::Noop,
    }
}

fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
        return AppMessage::Login(LoginMessage::ToggleSecrets);
    }
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            AppMessage::Login(LoginMessage::NextField)
        }
        KeyCode::Enter => AppMessage::Login(LoginMessage::Submit),
        KeyCode::Backspace => AppMessage::Login(LoginMessage::Backspace),
        KeyCode::Esc => AppMessage::Quit,
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Login(LoginMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close the modal
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::EditPlaybook { focus, .. } => handle_edit_keys(key, *focus),
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleButton)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

fn handle_edit_keys(key: KeyEvent, focus: EditField) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Left if focus == EditField::Status => {
            AppMessage::Modal(ModalMessage::CycleStatus(false))
        }
        KeyCode::Right if focus == EditField::Status => {
            AppMessage::Modal(ModalMessage::CycleStatus(true))
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch)
            if focus != EditField::Status
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}
