//! Type definitions

mod auth;
mod bulk;
mod navigation;
mod playbook;

pub use auth::{AuthOutcome, BackendStatus, LoginRequest, GENERIC_LOGIN_FAILURE};
pub use bulk::{BulkAction, BulkActionFailure, BulkActionResult};
pub use navigation::{
    default_nav_tree, DismissEvent, NavEntry, NavIcon, NavNode, OverlayState, RailMode, Viewport,
};
pub use playbook::{sample_playbooks, Playbook, PlaybookStatus, PlaybookUpdate, StatusCounts};
