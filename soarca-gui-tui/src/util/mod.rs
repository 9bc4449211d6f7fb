//! Util layer: terminal setup, logging and text helpers
//!
//! ```text
//!     terminal   raw mode, alternate screen, mouse capture
//!     logging    tracing subscriber writing to the config directory
//!     text       display-width aware truncation
//! ```

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate;
