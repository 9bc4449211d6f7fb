//! Page content

pub mod dashboard;
pub mod login;
pub mod placeholder;
pub mod playbooks;
