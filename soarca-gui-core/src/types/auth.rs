//! Authentication and backend health types

use serde::{Deserialize, Serialize};

/// Message used when the backend rejects a login without saying why
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed. Please check your credentials.";

/// Login form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    /// Human-readable messages, never empty
    Rejected(Vec<String>),
}

impl AuthOutcome {
    /// Rejection; falls back to the generic message when `messages` is empty
    #[must_use]
    pub fn rejected(messages: Vec<String>) -> Self {
        let messages: Vec<String> = messages
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if messages.is_empty() {
            Self::Rejected(vec![GENERIC_LOGIN_FAILURE.to_string()])
        } else {
            Self::Rejected(messages)
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Backend reachability as shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BackendStatus {
    #[default]
    Checking,
    Ok,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rejection_gets_generic_message() {
        assert_eq!(
            AuthOutcome::rejected(vec![" ".to_string()]),
            AuthOutcome::Rejected(vec![GENERIC_LOGIN_FAILURE.to_string()])
        );
    }

    #[test]
    fn rejection_keeps_backend_messages() {
        let outcome = AuthOutcome::rejected(vec!["Account locked".to_string()]);
        assert_eq!(outcome, AuthOutcome::Rejected(vec!["Account locked".to_string()]));
        assert!(!outcome.is_success());
    }
}
