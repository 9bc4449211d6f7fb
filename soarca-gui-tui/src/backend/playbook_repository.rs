//! Playbooks persisted to a JSON file

use std::path::PathBuf;

use async_trait::async_trait;
use soarca_gui_core::traits::PlaybookRepository;
use soarca_gui_core::types::{sample_playbooks, Playbook};
use soarca_gui_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::sync::Mutex;

use super::config_service::config_dir;

/// JSON file playbook repository
///
/// The sample inventory is served (and written on first change) until the file exists.
pub struct JsonPlaybookRepository {
    path: PathBuf,
    /// In-memory cache, `None` until first read
    cache: Mutex<Option<Vec<Playbook>>>,
}

impl JsonPlaybookRepository {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("playbooks.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// Load the playbook list from the file
    async fn load_from_file(&self) -> CoreResult<Vec<Playbook>> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?
        {
            log::info!(
                "{} not found, using sample playbooks",
                self.path.display()
            );
            return Ok(sample_playbooks());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Save the playbook list to the file
    async fn save_to_file(&self, playbooks: &[Playbook]) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(playbooks)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }

    /// Apply `change` to the cached list and write it through
    async fn modify<F>(&self, change: F) -> CoreResult<()>
    where
        F: FnOnce(&mut Vec<Playbook>) -> CoreResult<()> + Send,
    {
        let mut cache = self.cache.lock().await;
        let mut playbooks = match cache.as_ref() {
            Some(playbooks) => playbooks.clone(),
            None => self.load_from_file().await?,
        };
        change(&mut playbooks)?;
        self.save_to_file(&playbooks).await?;
        *cache = Some(playbooks);
        Ok(())
    }
}

impl Default for JsonPlaybookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaybookRepository for JsonPlaybookRepository {
    async fn find_all(&self) -> CoreResult<Vec<Playbook>> {
        let mut cache = self.cache.lock().await;
        if let Some(playbooks) = cache.as_ref() {
            return Ok(playbooks.clone());
        }
        let playbooks = self.load_from_file().await?;
        *cache = Some(playbooks.clone());
        Ok(playbooks)
    }

    async fn save(&self, playbook: &Playbook) -> CoreResult<()> {
        self.modify(|playbooks| {
            if let Some(pos) = playbooks.iter().position(|p| p.id == playbook.id) {
                playbooks[pos] = playbook.clone();
            } else {
                playbooks.push(playbook.clone());
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.modify(|playbooks| {
            let before = playbooks.len();
            playbooks.retain(|p| p.id != id);
            if playbooks.len() == before {
                return Err(CoreError::PlaybookNotFound(id.to_string()));
            }
            Ok(())
        })
        .await
    }
}
