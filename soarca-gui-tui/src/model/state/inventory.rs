//! Playbook inventory page state
//!
//! The records, filter and selection live in the core inventory store; this
//! only holds what the terminal adds on top of it.

use soarca_gui_core::services::BulkActionDispatcher;

/// Inventory page state
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    /// Row cursor within the filtered records
    pub cursor: usize,
    /// Search box has keyboard focus
    pub filter_editing: bool,
    /// Search box contents, mirrored into the store on every keystroke
    pub filter_input: String,
    /// Bulk action menu
    pub dispatcher: BulkActionDispatcher,
    /// First load finished
    pub loaded: bool,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor inside `len` rows
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = InventoryState::new();
        state.select_previous();
        assert_eq!(state.cursor, 0);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.cursor, 1);
        state.clamp_cursor(0);
        assert_eq!(state.cursor, 0);
    }
}
