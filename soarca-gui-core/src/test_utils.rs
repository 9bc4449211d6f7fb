//! Test helpers
//!
//! Mock collaborators with error injection, and a context factory.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{
    AuthService, HealthProbe, InMemoryPreferenceStore, PlaybookRepository, PreferenceStore,
};
use crate::types::{sample_playbooks, AuthOutcome, BackendStatus, LoginRequest, Playbook};

// ===== MockPlaybookRepository =====

pub struct MockPlaybookRepository {
    playbooks: RwLock<Vec<Playbook>>,
    /// Ids whose save/delete fails with a storage error
    failing_ids: RwLock<HashSet<String>>,
    fail_find_all: RwLock<bool>,
    delay: RwLock<Duration>,
    save_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockPlaybookRepository {
    pub fn new(playbooks: Vec<Playbook>) -> Self {
        Self {
            playbooks: RwLock::new(playbooks),
            failing_ids: RwLock::new(HashSet::new()),
            fail_find_all: RwLock::new(false),
            delay: RwLock::new(Duration::ZERO),
            save_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub async fn fail_on(&self, id: &str) {
        self.failing_ids.write().await.insert(id.to_string());
    }

    pub async fn fail_find_all(&self, fail: bool) {
        *self.fail_find_all.write().await = fail;
    }

    /// Delay applied to every write
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }

    pub async fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Highest number of writes observed running at the same time
    pub async fn max_concurrent_writes(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn begin_write(&self, id: &str) -> CoreResult<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_ids.read().await.contains(id) {
            return Err(CoreError::StorageError(format!("write rejected for {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl PlaybookRepository for MockPlaybookRepository {
    async fn find_all(&self) -> CoreResult<Vec<Playbook>> {
        if *self.fail_find_all.read().await {
            return Err(CoreError::ProviderError("backend unavailable".to_string()));
        }
        Ok(self.playbooks.read().await.clone())
    }

    async fn save(&self, playbook: &Playbook) -> CoreResult<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.begin_write(&playbook.id).await?;
        let mut playbooks = self.playbooks.write().await;
        match playbooks.iter_mut().find(|p| p.id == playbook.id) {
            Some(existing) => *existing = playbook.clone(),
            None => playbooks.push(playbook.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.begin_write(id).await?;
        self.playbooks.write().await.retain(|p| p.id != id);
        Ok(())
    }
}

// ===== FailingPreferenceStore =====

/// Preference store whose every access fails
pub struct FailingPreferenceStore;

impl PreferenceStore for FailingPreferenceStore {
    fn get(&self, _key: &str) -> CoreResult<Option<String>> {
        Err(CoreError::StorageError("storage unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("storage unavailable".to_string()))
    }
}

// ===== MockAuthService =====

pub struct MockAuthService {
    outcome: RwLock<CoreResult<AuthOutcome>>,
    requests: RwLock<Vec<LoginRequest>>,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self {
            outcome: RwLock::new(Ok(AuthOutcome::Success)),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_outcome(&self, outcome: CoreResult<AuthOutcome>) {
        *self.outcome.write().await = outcome;
    }

    pub async fn requests(&self) -> Vec<LoginRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, request: &LoginRequest) -> CoreResult<AuthOutcome> {
        self.requests.write().await.push(request.clone());
        self.outcome.read().await.clone()
    }
}

// ===== MockHealthProbe =====

pub struct MockHealthProbe {
    status: std::sync::Mutex<BackendStatus>,
}

impl MockHealthProbe {
    pub fn new(status: BackendStatus) -> Self {
        Self {
            status: std::sync::Mutex::new(status),
        }
    }

    pub fn set_status(&self, status: BackendStatus) {
        *self.status.lock().unwrap() = status;
    }
}

#[async_trait]
impl HealthProbe for MockHealthProbe {
    async fn ping(&self) -> BackendStatus {
        *self.status.lock().unwrap()
    }
}

// ===== Factory =====

/// Handles on the collaborators behind a test context
pub struct TestMocks {
    pub repository: Arc<MockPlaybookRepository>,
    pub preferences: InMemoryPreferenceStore,
    pub auth: Arc<MockAuthService>,
    pub health: Arc<MockHealthProbe>,
}

/// Create a `ServiceContext` over mocks seeded with the sample inventory
pub fn create_test_context() -> (Arc<ServiceContext>, TestMocks) {
    let repository = Arc::new(MockPlaybookRepository::new(sample_playbooks()));
    let preferences = InMemoryPreferenceStore::new();
    let auth = Arc::new(MockAuthService::new());
    let health = Arc::new(MockHealthProbe::new(BackendStatus::Ok));

    let ctx = Arc::new(ServiceContext::new(
        repository.clone(),
        Arc::new(preferences.clone()),
        auth.clone(),
        health.clone(),
    ));

    (
        ctx,
        TestMocks {
            repository,
            preferences,
            auth,
            health,
        },
    )
}
