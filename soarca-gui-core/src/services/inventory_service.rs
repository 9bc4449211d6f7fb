//! Inventory service: the store backed by a playbook repository

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{Mutex, RwLock, RwLockReadGuard};

use crate::error::{CoreError, CoreResult};
use crate::services::{EditSession, InventoryStore};
use crate::traits::PlaybookRepository;
use crate::types::{BulkAction, BulkActionFailure, BulkActionResult, Playbook, PlaybookUpdate};

/// A repository write produced by a local mutation
enum PendingWrite {
    Save(Playbook),
    Delete(String),
}

impl PendingWrite {
    fn id(&self) -> &str {
        match self {
            Self::Save(playbook) => &playbook.id,
            Self::Delete(id) => id,
        }
    }
}

/// Clears the busy flag on drop
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn new(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Inventory service
///
/// Mutations are applied to the local store first, then written through the
/// repository one record at a time. Records whose write fails are rolled back to
/// their previous state; the others stay mutated. Mutations run one at a time.
pub struct InventoryService {
    repository: Arc<dyn PlaybookRepository>,
    store: RwLock<InventoryStore>,
    write_gate: Mutex<()>,
    busy: AtomicBool,
}

impl InventoryService {
    #[must_use]
    pub fn new(repository: Arc<dyn PlaybookRepository>) -> Self {
        Self {
            repository,
            store: RwLock::new(InventoryStore::default()),
            write_gate: Mutex::new(()),
            busy: AtomicBool::new(false),
        }
    }

    /// A mutation or load is in flight
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Read access to the store
    pub async fn read(&self) -> RwLockReadGuard<'_, InventoryStore> {
        self.store.read().await
    }

    /// Read access from synchronous code
    ///
    /// # Panics
    /// When called from within an asynchronous execution context.
    pub fn blocking_read(&self) -> RwLockReadGuard<'_, InventoryStore> {
        self.store.blocking_read()
    }

    /// Load (or reload) every playbook from the repository
    ///
    /// Returns the number of records loaded.
    pub async fn load(&self) -> CoreResult<usize> {
        let _gate = self.write_gate.lock().await;
        let _busy = BusyGuard::new(&self.busy);

        let records = self.repository.find_all().await.map_err(|e| match e {
            CoreError::ProviderError(_) => e,
            other => CoreError::ProviderError(other.to_string()),
        })?;
        let count = records.len();
        self.store.write().await.replace_records(records)?;
        log::info!("Loaded {count} playbook(s)");
        Ok(count)
    }

    pub async fn set_filter(&self, term: impl Into<String>) {
        self.store.write().await.set_filter(term);
    }

    pub async fn toggle_selection(&self, id: &str) -> CoreResult<()> {
        self.store.write().await.toggle_selection(id)
    }

    pub async fn select_all(&self, checked: bool) {
        self.store.write().await.select_all(checked);
    }

    /// Run a bulk action over the current selection
    pub async fn execute(&self, action: BulkAction) -> CoreResult<BulkActionResult> {
        let _gate = self.write_gate.lock().await;
        let _busy = BusyGuard::new(&self.busy);

        let (snapshot, writes) = {
            let mut store = self.store.write().await;
            if store.selection_count() == 0 {
                return Err(CoreError::EmptySelection);
            }
            let snapshot = store.records().to_vec();
            let writes: Vec<PendingWrite> = match action.target_status() {
                Some(status) => {
                    let changed = store.apply_bulk_status(status);
                    changed
                        .iter()
                        .filter_map(|id| store.get(id).cloned())
                        .map(PendingWrite::Save)
                        .collect()
                }
                None => store
                    .delete_selected()
                    .into_iter()
                    .map(|playbook| PendingWrite::Delete(playbook.id))
                    .collect(),
            };
            (snapshot, writes)
        };

        let outcomes = join_all(writes.iter().map(|write| async move {
            match write {
                PendingWrite::Save(playbook) => self.repository.save(playbook).await,
                PendingWrite::Delete(id) => self.repository.delete(id).await,
            }
        }))
        .await;

        let failures: Vec<BulkActionFailure> = writes
            .iter()
            .zip(outcomes)
            .filter_map(|(write, outcome)| {
                outcome.err().map(|e| BulkActionFailure {
                    playbook_id: write.id().to_string(),
                    reason: e.to_string(),
                })
            })
            .collect();

        if !failures.is_empty() {
            let failed_ids: Vec<String> = failures.iter().map(|f| f.playbook_id.clone()).collect();
            self.store.write().await.restore_from(&snapshot, &failed_ids);
            log::warn!(
                "Bulk action {action:?} partially failed: {} succeeded, {} failed",
                writes.len() - failures.len(),
                failures.len()
            );
        } else {
            log::info!("Bulk action {action:?} applied to {} playbook(s)", writes.len());
        }

        Ok(BulkActionResult {
            action,
            success_count: writes.len() - failures.len(),
            failed_count: failures.len(),
            failures,
        })
    }

    /// Merge `update` into its record and persist it
    ///
    /// The local change is reverted when the repository write fails.
    pub async fn save_playbook(&self, update: &PlaybookUpdate) -> CoreResult<Playbook> {
        let _gate = self.write_gate.lock().await;
        let _busy = BusyGuard::new(&self.busy);

        let (snapshot, saved) = {
            let mut store = self.store.write().await;
            let snapshot = store.records().to_vec();
            let saved = store.save_playbook(update)?.clone();
            (snapshot, saved)
        };

        if let Err(e) = self.repository.save(&saved).await {
            self.store
                .write()
                .await
                .restore_from(&snapshot, std::slice::from_ref(&saved.id));
            log::error!("Failed to save playbook {}: {e}", saved.id);
            return Err(e);
        }
        Ok(saved)
    }

    /// Validate an edit session and save it
    pub async fn commit_edit(&self, session: EditSession) -> CoreResult<Playbook> {
        let update = session.validate()?;
        self.save_playbook(&update).await
    }
}
