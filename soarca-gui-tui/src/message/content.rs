//! Content panel messages

/// Content panel message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== Row navigation ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== Selection ==========
    /// Toggle the row under the cursor
    ToggleSelection,
    /// Header checkbox: select every filtered row, or clear
    ToggleSelectAll,

    // ========== Search ==========
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    /// Leave the search box, keeping the term
    FinishFilter,
    /// Empty the search box
    ClearFilter,

    // ========== Bulk actions ==========
    ToggleActionMenu,
    MenuNext,
    MenuPrevious,
    MenuConfirm,
    MenuClose,

    /// Edit the row under the cursor
    Edit,
}
