//! Rail messages

/// Rail message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Open the page under the cursor, or toggle its group
    Confirm,
}
