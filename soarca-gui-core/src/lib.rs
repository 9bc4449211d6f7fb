//! SOARCA GUI Core Library
//!
//! Platform-independent state of the SOARCA security-operations dashboard:
//! - Playbook inventory (filter, selection, bulk actions, edit contract)
//! - Navigation rail state machine
//! - Collaborator ports for playbook storage, preferences, login and health checks
//!
//! Rendering and transport live in the front-end crates; the storage layer is
//! abstracted through traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{AuthService, HealthProbe, PlaybookRepository, PreferenceStore};
