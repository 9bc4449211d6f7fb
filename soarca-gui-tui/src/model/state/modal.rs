//! Modal state

use soarca_gui_core::services::EditSession;

/// Edit form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Description,
    Status,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Status,
            Self::Status => Self::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Name => Self::Status,
            Self::Description => Self::Name,
            Self::Status => Self::Description,
        }
    }
}

/// Modal types, each carrying its own data
#[derive(Debug, Clone)]
pub enum Modal {
    /// Edit one playbook
    EditPlaybook {
        session: EditSession,
        focus: EditField,
        error: Option<String>,
        /// Save in flight
        saving: bool,
    },
    /// Confirm a bulk delete
    ConfirmDelete {
        count: usize,
        /// 0 = cancel, 1 = delete
        focus: usize,
    },
    Help,
    Error { title: String, message: String },
}

/// Active modal container
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_edit(&mut self, session: EditSession) {
        self.active = Some(Modal::EditPlaybook {
            session,
            focus: EditField::default(),
            error: None,
            saving: false,
        });
    }

    pub fn show_confirm_delete(&mut self, count: usize) {
        self.active = Some(Modal::ConfirmDelete { count, focus: 0 });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }
}
