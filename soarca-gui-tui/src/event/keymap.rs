//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// Whether the key event matches this binding
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Rail
    pub const TOGGLE_RAIL: KeyBinding = KeyBinding::ctrl(KeyCode::Char('b'));
    pub const TOGGLE_OVERLAY: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));

    // Inventory
    pub const TOGGLE_ROW: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const TOGGLE_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const CLEAR_SEARCH: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
    pub const ACTIONS: KeyBinding = KeyBinding::key(KeyCode::Char('b'));
    pub const EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));

    // Forms
    pub const TOGGLE_SECRETS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
}
