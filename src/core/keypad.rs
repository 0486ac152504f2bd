// src/core/keypad.rs
use crate::core::error::KeypadError;
use crate::core::types::Digit;
use std::ops::RangeInclusive;

/// The keys that carry letters.
pub const KEYPAD_DIGITS: RangeInclusive<char> = '2'..='9';

/// Letter sets for keys 2 through 9, in key order.
pub(crate) static LETTERS: [&[char]; 8] = [
    &['a', 'b', 'c'],
    &['d', 'e', 'f'],
    &['g', 'h', 'i'],
    &['j', 'k', 'l'],
    &['m', 'n', 'o'],
    &['p', 'q', 'r', 's'],
    &['t', 'u', 'v'],
    &['w', 'x', 'y', 'z'],
];

pub fn is_keypad_digit(c: char) -> bool {
    KEYPAD_DIGITS.contains(&c)
}

/// Returns the ordered letter set printed on a keypad key.
pub fn letters_for(digit: char) -> Result<&'static [char], KeypadError> {
    Digit::try_from(digit).map(Digit::letters)
}
