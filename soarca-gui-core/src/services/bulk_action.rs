//! Bulk action dispatcher

use crate::error::{CoreError, CoreResult};
use crate::services::InventoryStore;
use crate::types::{BulkAction, BulkActionResult};

/// Maps bulk intents onto the inventory and owns the action menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkActionDispatcher {
    menu_open: bool,
    highlighted: usize,
}

impl BulkActionDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The control is only enabled with a non-empty selection
    #[must_use]
    pub fn is_enabled(selection_count: usize) -> bool {
        selection_count > 0
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Open or close the menu; a disabled control stays closed
    pub fn toggle_menu(&mut self, selection_count: usize) {
        if self.menu_open || !Self::is_enabled(selection_count) {
            self.close_menu();
        } else {
            self.menu_open = true;
            self.highlighted = 0;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.highlighted = 0;
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % BulkAction::ALL.len();
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self
            .highlighted
            .checked_sub(1)
            .unwrap_or(BulkAction::ALL.len() - 1);
    }

    #[must_use]
    pub fn highlighted_action(&self) -> BulkAction {
        BulkAction::ALL[self.highlighted % BulkAction::ALL.len()]
    }

    /// Gate an action before asynchronous execution
    ///
    /// The menu is closed whether or not the action is accepted.
    pub fn prepare(&mut self, selection_count: usize, action: BulkAction) -> CoreResult<BulkAction> {
        self.close_menu();
        if !Self::is_enabled(selection_count) {
            log::warn!("Bulk action {action:?} rejected: empty selection");
            return Err(CoreError::EmptySelection);
        }
        Ok(action)
    }

    /// Apply an action directly to the store
    pub fn dispatch(
        &mut self,
        store: &mut InventoryStore,
        action: BulkAction,
    ) -> CoreResult<BulkActionResult> {
        self.prepare(store.selection_count(), action)?;
        let affected = match action.target_status() {
            Some(status) => store.apply_bulk_status(status).len(),
            None => store.delete_selected().len(),
        };
        log::info!("Bulk action {action:?} applied to {affected} playbook(s)");
        Ok(BulkActionResult::succeeded(action, affected))
    }
}
