//! Authentication and health collaborators

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{AuthOutcome, BackendStatus, LoginRequest};

/// Login collaborator
///
/// `Err` is reserved for failures the caller cannot show as credential feedback;
/// rejected credentials come back as `Ok(AuthOutcome::Rejected(..))`.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> CoreResult<AuthOutcome>;
}

/// Backend reachability probe
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Never `Checking`; that state only exists before the first probe
    async fn ping(&self) -> BackendStatus;
}
