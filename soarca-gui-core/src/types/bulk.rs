//! Bulk action types

use serde::{Deserialize, Serialize};

use super::PlaybookStatus;

/// User intent applied to the whole selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulkAction {
    Activate,
    Deactivate,
    Delete,
}

impl BulkAction {
    /// Menu order
    pub const ALL: [Self; 3] = [Self::Activate, Self::Deactivate, Self::Delete];

    /// Target status for status-changing actions, `None` for delete
    #[must_use]
    pub fn target_status(self) -> Option<PlaybookStatus> {
        match self {
            Self::Activate => Some(PlaybookStatus::Active),
            Self::Deactivate => Some(PlaybookStatus::Inactive),
            Self::Delete => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Activate => "Activate Selected",
            Self::Deactivate => "Deactivate Selected",
            Self::Delete => "Delete Selected",
        }
    }

    #[must_use]
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// Bulk action result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionResult {
    pub action: BulkAction,
    pub success_count: usize,
    pub failed_count: usize,
    pub failures: Vec<BulkActionFailure>,
}

impl BulkActionResult {
    /// Result where every affected record succeeded
    #[must_use]
    pub fn succeeded(action: BulkAction, success_count: usize) -> Self {
        Self {
            action,
            success_count,
            failed_count: 0,
            failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_partial_failure(&self) -> bool {
        self.failed_count > 0
    }
}

/// Bulk action failure details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionFailure {
    pub playbook_id: String,
    pub reason: String,
}
