//! Client preference storage port

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// Key holding the rail's pinned flag (`"true"` / `"false"`)
pub const SIDEBAR_EXPANDED_KEY: &str = "sidebar-expanded";

/// Durable string key-value storage
///
/// Synchronous on purpose: the navigation state machine reads it during construction
/// and writes it inside UI event handling.
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory preference store
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let store = InMemoryPreferenceStore::new();
        let other = store.clone();
        store.set(SIDEBAR_EXPANDED_KEY, "true").unwrap();
        assert_eq!(other.get(SIDEBAR_EXPANDED_KEY).unwrap().as_deref(), Some("true"));
        assert_eq!(other.get("missing").unwrap(), None);
    }
}
