// src/core/error.rs

/// Failures surfaced by the keypad mapping and the combination generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeypadError {
    /// A character outside `2..=9` was handed to the core.
    /// `position` is the char index within the input sequence.
    #[error("invalid keypad digit {digit:?} at position {position}; expected 2-9")]
    InvalidDigit { digit: char, position: usize },
}
