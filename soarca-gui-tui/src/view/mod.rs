//! View layer: rendering
//!
//! Reads the Model and draws a frame; never mutates state.
//!
//! ```text
//!     ┌──────────────── header (title, backend status) ────────────────┐
//!     │ rail │ page content                                            │
//!     │      │                                                         │
//!     └──────────────── status bar (hints, last message) ──────────────┘
//! ```
//!
//! In a narrow terminal the rail is drawn over the content instead of beside it.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
