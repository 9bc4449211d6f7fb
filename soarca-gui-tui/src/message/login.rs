//! Login form messages

/// Login form message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMessage {
    NextField,
    Input(char),
    Backspace,
    ToggleSecrets,
    Submit,
}
