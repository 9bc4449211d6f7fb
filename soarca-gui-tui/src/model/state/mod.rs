//! Page data state

mod inventory;
mod login;
mod modal;

pub use inventory::InventoryState;
pub use login::{LoginField, LoginState};
pub use modal::{EditField, Modal, ModalState};
