//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Malformed playbook fields on edit commit (missing name, bad status, ...)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Playbook id absent from the collection
    #[error("Playbook not found: {0}")]
    PlaybookNotFound(String),

    /// Navigation group id absent from the tree (or not a group)
    #[error("Navigation group not found: {0}")]
    NavGroupNotFound(String),

    /// Bulk action requested with nothing selected
    #[error("No playbooks selected")]
    EmptySelection,

    /// Record source unavailable
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Storage layer error (preferences, repository files)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl CoreError {
    /// Whether the error is expected behavior (user input, missing resource, ...), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::PlaybookNotFound(_)
            | Self::NavGroupNotFound(_)
            | Self::EmptySelection => true,
            Self::ProviderError(_)
            | Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::NetworkError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
