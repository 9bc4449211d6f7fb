//! Modal messages

/// Modal message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Close,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    /// Cycle the status field (`true` = forward)
    CycleStatus(bool),
    /// Switch between cancel and confirm buttons
    ToggleButton,
    Confirm,
}
