//! Storage and collaborator abstraction traits

mod auth_service;
mod playbook_repository;
mod preference_store;

pub use auth_service::{AuthService, HealthProbe};
pub use playbook_repository::{InMemoryPlaybookRepository, PlaybookRepository};
pub use preference_store::{InMemoryPreferenceStore, PreferenceStore, SIDEBAR_EXPANDED_KEY};
