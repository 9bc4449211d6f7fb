//! Dashboard state machines and services

mod bulk_action;
mod edit;
mod inventory_service;
mod inventory_store;
mod navigation;

pub use bulk_action::BulkActionDispatcher;
pub use edit::{EditSession, MAX_DESCRIPTION_LEN};
pub use inventory_service::InventoryService;
pub use inventory_store::InventoryStore;
pub use navigation::NavigationState;

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::{AuthService, HealthProbe, PlaybookRepository, PreferenceStore};
use crate::types::{AuthOutcome, BackendStatus, LoginRequest, NavNode};

/// Service context - holds all injected collaborators
///
/// The platform layer creates this context with its own storage and network
/// implementations.
pub struct ServiceContext {
    /// Playbook record source
    pub playbook_repository: Arc<dyn PlaybookRepository>,
    /// Client preferences (rail pin flag)
    pub preference_store: Arc<dyn PreferenceStore>,
    /// Login collaborator
    pub auth_service: Arc<dyn AuthService>,
    /// Backend reachability probe
    pub health_probe: Arc<dyn HealthProbe>,
}

impl ServiceContext {
    #[must_use]
    pub fn new(
        playbook_repository: Arc<dyn PlaybookRepository>,
        preference_store: Arc<dyn PreferenceStore>,
        auth_service: Arc<dyn AuthService>,
        health_probe: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            playbook_repository,
            preference_store,
            auth_service,
            health_probe,
        }
    }

    /// Inventory service over the context's repository (not yet loaded)
    #[must_use]
    pub fn inventory_service(&self) -> InventoryService {
        InventoryService::new(self.playbook_repository.clone())
    }

    /// Navigation state over `tree`, restoring the rail from the preference store
    #[must_use]
    pub fn navigation_state(&self, tree: Vec<NavNode>) -> NavigationState {
        NavigationState::new(tree, self.preference_store.clone())
    }

    /// Submit credentials
    pub async fn login(&self, request: &LoginRequest) -> CoreResult<AuthOutcome> {
        match self.auth_service.login(request).await {
            Ok(outcome) => {
                if outcome.is_success() {
                    log::info!("Login succeeded for {}", request.email);
                } else {
                    log::warn!("Login rejected for {}", request.email);
                }
                Ok(outcome)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Login failed: {e}");
                } else {
                    log::error!("Login failed: {e}");
                }
                Err(e)
            }
        }
    }

    /// Probe the backend once
    pub async fn check_health(&self) -> BackendStatus {
        let status = self.health_probe.ping().await;
        log::debug!("Backend status: {status:?}");
        status
    }
}
