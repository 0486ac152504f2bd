// src/core/generator.rs
use crate::core::error::KeypadError;
use crate::core::types::{parse_digits, Combination, Digit};

/// Expands a digit string into every letter combination it can spell.
///
/// Digits are validated up front, so an invalid character never produces
/// partial output. An empty input yields an empty list, not `[""]`.
pub fn letter_combinations(digits: &str) -> Result<Vec<Combination>, KeypadError> {
    let parsed = parse_digits(digits)?;
    Ok(combinations_of(&parsed))
}

/// Expands already validated digits.
///
/// Left fold over the digits: each pass extends every existing prefix with
/// each letter of the next key. Prefix order is the outer loop and letter
/// order the inner one, so the first key varies slowest.
pub fn combinations_of(digits: &[Digit]) -> Vec<Combination> {
    if digits.is_empty() {
        return vec![];
    }

    let mut combinations = vec![String::with_capacity(digits.len())];
    for digit in digits {
        let letters = digit.letters();
        let mut next = Vec::with_capacity(combinations.len() * letters.len());
        for prefix in &combinations {
            for &letter in letters {
                let mut extended = String::with_capacity(digits.len());
                extended.push_str(prefix);
                extended.push(letter);
                next.push(extended);
            }
        }
        combinations = next;
    }
    combinations
}

/// Number of combinations `letter_combinations` would return, without expanding.
/// Saturates at `usize::MAX`.
pub fn combination_count(digits: &str) -> Result<usize, KeypadError> {
    let parsed = parse_digits(digits)?;
    if parsed.is_empty() {
        return Ok(0);
    }
    Ok(parsed
        .iter()
        .fold(1usize, |acc, d| acc.saturating_mul(d.letters().len())))
}
