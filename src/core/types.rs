// src/core/types.rs
use crate::core::error::KeypadError;
use crate::core::keypad;
use std::fmt;

/// One complete candidate string, a letter chosen per input digit.
pub type Combination = String;

/// A single telephone keypad key that carries letters (2 through 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values that have no letters assigned.
    pub fn new(value: u8) -> Option<Self> {
        (2..=9).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The ordered letter set of this key.
    pub fn letters(self) -> &'static [char] {
        keypad::LETTERS[usize::from(self.0 - 2)]
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = KeypadError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or(KeypadError::InvalidDigit { digit: c, position: 0 })
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parses a whole digit sequence, failing on the first character outside 2-9.
pub fn parse_digits(digits: &str) -> Result<Vec<Digit>, KeypadError> {
    digits
        .chars()
        .enumerate()
        .map(|(position, c)| {
            Digit::try_from(c).map_err(|_| KeypadError::InvalidDigit { digit: c, position })
        })
        .collect()
}
