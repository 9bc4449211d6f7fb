//! Core service
//!
//! Wraps the soarca-gui-core services for the UI layer. Slow operations run on
//! the tokio runtime and report back through [`BackendEvent`]s, which the main
//! loop drains every tick.

use std::sync::Arc;
use std::time::Duration;

use soarca_gui_core::services::{EditSession, InventoryService, NavigationState, ServiceContext};
use soarca_gui_core::types::{
    default_nav_tree, AuthOutcome, BackendStatus, BulkAction, BulkActionResult, LoginRequest,
    Playbook,
};
use soarca_gui_core::CoreResult;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::auth_service::HttpAuthService;
use super::config_service::AppConfig;
use super::health_probe::{spawn_health_monitor, HttpHealthProbe};
use super::playbook_repository::JsonPlaybookRepository;
use super::preference_store::JsonPreferenceStore;

/// Completion of a background operation
#[derive(Debug)]
pub enum BackendEvent {
    /// Playbooks (re)loaded, with the record count
    Loaded(CoreResult<usize>),
    BulkFinished(CoreResult<BulkActionResult>),
    /// Edit of the playbook `id` committed
    Saved {
        id: String,
        result: CoreResult<Playbook>,
    },
    LoginFinished(CoreResult<AuthOutcome>),
    Health(BackendStatus),
}

/// TUI core service
pub struct CoreService {
    ctx: Arc<ServiceContext>,
    inventory: Arc<InventoryService>,
    runtime: Handle,
    events_tx: UnboundedSender<BackendEvent>,
    events_rx: UnboundedReceiver<BackendEvent>,
}

impl CoreService {
    /// Create the service with file storage and HTTP collaborators
    pub fn new(config: &AppConfig, runtime: Handle) -> CoreResult<Self> {
        let ctx = Arc::new(ServiceContext::new(
            Arc::new(JsonPlaybookRepository::new()),
            Arc::new(JsonPreferenceStore::new()),
            Arc::new(HttpAuthService::new(config.soarca_uri.clone())?),
            Arc::new(HttpHealthProbe::new(config.soarca_uri.clone())?),
        ));
        Ok(Self::with_context(ctx, runtime))
    }

    pub fn with_context(ctx: Arc<ServiceContext>, runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            inventory: Arc::new(ctx.inventory_service()),
            ctx,
            runtime,
            events_tx,
            events_rx,
        }
    }

    /// Inventory service; the UI reads the store through `blocking_read`
    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    /// Navigation state over the dashboard menu, with the stored rail mode
    pub fn navigation_state(&self) -> NavigationState {
        self.ctx.navigation_state(default_nav_tree())
    }

    /// Next finished background operation, if any
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.events_rx.try_recv().ok()
    }

    // ========== Inventory ==========

    pub fn set_filter(&self, term: &str) {
        self.runtime.block_on(self.inventory.set_filter(term));
    }

    pub fn toggle_selection(&self, id: &str) -> CoreResult<()> {
        self.runtime.block_on(self.inventory.toggle_selection(id))
    }

    pub fn select_all(&self, checked: bool) {
        self.runtime.block_on(self.inventory.select_all(checked));
    }

    pub fn load_playbooks(&self) {
        let inventory = self.inventory.clone();
        self.spawn(async move { BackendEvent::Loaded(inventory.load().await) });
    }

    pub fn execute(&self, action: BulkAction) {
        let inventory = self.inventory.clone();
        self.spawn(async move { BackendEvent::BulkFinished(inventory.execute(action).await) });
    }

    pub fn save_edit(&self, session: EditSession) {
        let inventory = self.inventory.clone();
        let id = session.id().to_string();
        self.spawn(async move {
            let result = inventory.commit_edit(session).await;
            BackendEvent::Saved { id, result }
        });
    }

    // ========== Login & health ==========

    pub fn login(&self, request: LoginRequest) {
        let ctx = self.ctx.clone();
        self.spawn(async move { BackendEvent::LoginFinished(ctx.login(&request).await) });
    }

    /// Start polling the backend status
    pub fn start_health_monitor(&self, interval: Duration) -> JoinHandle<()> {
        spawn_health_monitor(
            &self.runtime,
            self.ctx.health_probe.clone(),
            interval,
            self.events_tx.clone(),
        )
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = BackendEvent> + Send + 'static,
    {
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            // The receiver only goes away on shutdown
            let _ = events.send(task.await);
        });
    }

    /// Wait for the next event (tests only)
    #[cfg(test)]
    pub fn recv_blocking(&mut self) -> Option<BackendEvent> {
        self.runtime.block_on(self.events_rx.recv())
    }
}


#[cfg(test)]
mod tests {
    use soarca_gui_core::types::PlaybookStatus;
    use soarca_gui_core::CoreError;
    use tokio::runtime::Runtime;

    use super::testing::core_service;
    use super::*;

    #[test]
    fn new_wires_http_collaborators() {
        let runtime = Runtime::new().unwrap();
        let mut service = CoreService::new(&AppConfig::default(), runtime.handle().clone()).unwrap();
        service.login(LoginRequest {
            email: "analyst@soarca.local".to_string(),
            password: "secret".to_string(),
        });
        assert!(matches!(
            service.recv_blocking(),
            Some(BackendEvent::LoginFinished(Err(CoreError::NetworkError(_))))
        ));
    }

    #[test]
    fn load_reports_count() {
        let runtime = Runtime::new().unwrap();
        let mut service = core_service(&runtime);
        service.load_playbooks();
        assert!(matches!(service.recv_blocking(), Some(BackendEvent::Loaded(Ok(5)))));
        assert_eq!(service.inventory().blocking_read().len(), 5);
    }

    #[test]
    fn execute_updates_store() {
        let runtime = Runtime::new().unwrap();
        let mut service = core_service(&runtime);
        service.load_playbooks();
        service.recv_blocking();

        service.toggle_selection("pb-003").unwrap();
        service.execute(BulkAction::Activate);
        let Some(BackendEvent::BulkFinished(Ok(result))) = service.recv_blocking() else {
            panic!("expected bulk result");
        };
        assert_eq!(result.success_count, 1);
        let store = service.inventory().blocking_read();
        assert_eq!(store.get("pb-003").unwrap().status, PlaybookStatus::Active);
    }

    #[test]
    fn login_event_carries_outcome() {
        let runtime = Runtime::new().unwrap();
        let mut service = core_service(&runtime);
        service.login(LoginRequest {
            email: "analyst@example.org".to_string(),
            password: "correct horse".to_string(),
        });
        assert!(matches!(
            service.recv_blocking(),
            Some(BackendEvent::LoginFinished(Ok(AuthOutcome::Success)))
        ));
    }

    #[test]
    fn try_recv_is_empty_initially() {
        let runtime = Runtime::new().unwrap();
        let mut service = core_service(&runtime);
        assert!(service.try_recv().is_none());
    }
}
