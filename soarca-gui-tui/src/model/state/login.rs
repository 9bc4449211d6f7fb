//! Login form state

use soarca_gui_core::types::LoginRequest;

/// Login form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

/// Login page state
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
    /// A request is in flight; input is ignored
    pub submitting: bool,
    /// Messages from the last failed attempt
    pub errors: Vec<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Both fields filled in
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email.trim().is_empty() && !self.password.is_empty()
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}
