//! Message layer
//!
//! Messages are produced by the Event layer (and by finished background
//! operations) and consumed by the Update layer:
//!
//! ```text
//!     Event ──▶ AppMessage ──▶ Update ──▶ Model ──▶ View
//!                  ▲
//!     Backend ─────┘ (BackendEvent)
//! ```

mod app;
mod content;
mod login;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use login::LoginMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
