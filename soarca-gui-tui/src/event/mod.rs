//! Event layer: terminal input to messages
//!
//! `poll_event` waits up to one tick for a crossterm event; `handle_event`
//! translates it into an `AppMessage` according to the current page, focus,
//! open modal and rail presentation. Key bindings live in `keymap`.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
