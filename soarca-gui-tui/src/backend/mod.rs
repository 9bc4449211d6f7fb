//! Backend layer: business services
//!
//! Decoupled from the UI. Wraps soarca-gui-core and supplies the platform
//! collaborators it needs:
//!
//! ```text
//!     core_service          CoreService, BackendEvent (entry point for the UI)
//!     config_service        AppConfig, FileConfigService (config.json + SOARCA_URI)
//!     playbook_repository   JsonPlaybookRepository (playbooks.json)
//!     preference_store      JsonPreferenceStore (preferences.json)
//!     auth_service          HttpAuthService (POST {base}/login)
//!     health_probe          HttpHealthProbe (GET {base}/status/ping), health monitor task
//! ```
//!
//! Data flow for a bulk action:
//!
//! ```text
//!     Update layer handles ContentMessage::MenuConfirm
//!         ↓
//!     CoreService::execute spawns InventoryService::execute on the runtime
//!         ↓
//!     store mutated optimistically, repository writes, failed records rolled back
//!         ↓
//!     BackendEvent::BulkFinished sent to the main loop
//!         ↓
//!     Update layer reports the result in the status bar; View re-renders
//! ```

mod auth_service;
mod config_service;
mod core_service;
mod health_probe;
mod playbook_repository;
mod preference_store;

pub use config_service::{config_dir, AppConfig, ConfigService, FileConfigService};
pub use core_service::{BackendEvent, CoreService};

#[cfg(test)]
pub use core_service::testing;
