//! Single-playbook edit contract

use crate::error::{CoreError, CoreResult};
use crate::services::InventoryStore;
use crate::types::{Playbook, PlaybookStatus, PlaybookUpdate};

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Local draft of one playbook
///
/// Edits stay here until `commit`; dropping or discarding the session leaves the
/// store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: String,
    pub name: String,
    pub description: String,
    /// Free text, parsed on commit
    pub status: String,
}

impl EditSession {
    #[must_use]
    pub fn begin(playbook: &Playbook) -> Self {
        Self {
            id: playbook.id.clone(),
            name: playbook.name.clone(),
            description: playbook.description.clone(),
            status: playbook.status.as_str().to_string(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cycle the status field through the valid values
    pub fn cycle_status(&mut self, forward: bool) {
        let current = self.status.parse().unwrap_or(PlaybookStatus::Draft);
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.status = next.as_str().to_string();
    }

    pub fn discard(self) {
        log::debug!("Discarded edits to playbook {}", self.id);
    }

    /// Validate the draft into a full update
    pub fn validate(&self) -> CoreResult<PlaybookUpdate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::ValidationError(
                "Playbook name must not be empty".to_string(),
            ));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(CoreError::ValidationError(format!(
                "Description must be at most {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        let status: PlaybookStatus = self.status.parse()?;

        Ok(PlaybookUpdate::new(self.id.clone())
            .with_name(name)
            .with_description(self.description.clone())
            .with_status(status))
    }

    /// Validate and save into the store
    pub fn commit(self, store: &mut InventoryStore) -> CoreResult<Playbook> {
        let update = self.validate()?;
        store.save_playbook(&update).cloned()
    }
}
