//! Preferences persisted to a JSON file

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use soarca_gui_core::traits::PreferenceStore;
use soarca_gui_core::{CoreError, CoreResult};

use super::config_service::config_dir;

/// `preferences.json`: a flat string map, rewritten on every change
pub struct JsonPreferenceStore {
    path: PathBuf,
    /// Lazily loaded contents
    cache: Mutex<Option<BTreeMap<String, String>>>,
}

impl JsonPreferenceStore {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("preferences.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    fn load_from_file(&self) -> CoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_to_file(&self, values: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

impl Default for JsonPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        if cache.is_none() {
            *cache = Some(self.load_from_file()?);
        }
        Ok(cache.as_ref().and_then(|values| values.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        let mut values = match cache.take() {
            Some(values) => values,
            None => self.load_from_file()?,
        };
        values.insert(key.to_string(), value.to_string());
        let result = self.save_to_file(&values);
        *cache = Some(values);
        result
    }
}
