//! Reusable widgets

pub mod header;
pub mod modal;
pub mod sidebar;
pub mod statusbar;
