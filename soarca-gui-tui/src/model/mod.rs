//! Model layer: application state
//!
//! The single source of truth for the UI. Plain data only; every change goes
//! through the Update layer and the View layer only reads it.
//!
//! ```text
//!     src/model/mod.rs
//!         mod app;        // App, rail geometry
//!         mod focus;      // FocusPanel (rail / content)
//!         mod page;       // Page routing
//!         pub mod state;  // per-page data (login form, inventory, modal)
//! ```
//!
//! The rail itself is the core `NavigationState`; the inventory records,
//! filter and selection are the core `InventoryStore`, reached through
//! `App::backend`. Page state here only adds cursors, text input and menus.

mod app;
mod focus;
mod page;
pub mod state;

pub use app::{viewport_for_width, App, PINNED_RAIL_WIDTH};
pub use focus::FocusPanel;
pub use page::Page;
pub use state::{EditField, InventoryState, LoginField, LoginState, Modal, ModalState};
