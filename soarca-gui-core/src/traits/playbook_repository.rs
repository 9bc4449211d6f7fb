//! Playbook persistence abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{sample_playbooks, Playbook};

/// Playbook record provider
///
/// Platform implementation:
/// - TUI: `JsonPlaybookRepository` (JSON file in the config directory)
/// - Tests / demo: `InMemoryPlaybookRepository`
#[async_trait]
pub trait PlaybookRepository: Send + Sync {
    /// Get all playbooks, in display order
    async fn find_all(&self) -> CoreResult<Vec<Playbook>>;

    /// Save playbook (new or update)
    ///
    /// # Arguments
    /// * `playbook` - Playbook data
    async fn save(&self, playbook: &Playbook) -> CoreResult<()>;

    /// Delete playbook
    ///
    /// # Arguments
    /// * `id` - Playbook ID
    async fn delete(&self, id: &str) -> CoreResult<()>;
}

/// In-memory playbook repository
///
/// Preserves insertion order.
#[derive(Clone, Default)]
pub struct InMemoryPlaybookRepository {
    playbooks: Arc<RwLock<Vec<Playbook>>>,
}

impl InMemoryPlaybookRepository {
    #[must_use]
    pub fn new(playbooks: Vec<Playbook>) -> Self {
        Self {
            playbooks: Arc::new(RwLock::new(playbooks)),
        }
    }

    /// Repository seeded with the sample inventory
    #[must_use]
    pub fn with_samples() -> Self {
        Self::new(sample_playbooks())
    }
}

#[async_trait]
impl PlaybookRepository for InMemoryPlaybookRepository {
    async fn find_all(&self) -> CoreResult<Vec<Playbook>> {
        Ok(self.playbooks.read().await.clone())
    }

    async fn save(&self, playbook: &Playbook) -> CoreResult<()> {
        let mut playbooks = self.playbooks.write().await;
        if let Some(existing) = playbooks.iter_mut().find(|p| p.id == playbook.id) {
            *existing = playbook.clone();
        } else {
            playbooks.push(playbook.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        let mut playbooks = self.playbooks.write().await;
        let original_len = playbooks.len();
        playbooks.retain(|p| p.id != id);
        if playbooks.len() == original_len {
            return Err(CoreError::PlaybookNotFound(id.to_string()));
        }
        Ok(())
    }
}
