// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenter;
pub mod protocol;

pub use crate::config::{AdapterConfig, ConfigError, Messages};
pub use crate::core::error::KeypadError;
pub use crate::core::generator::{combination_count, combinations_of, letter_combinations};
pub use crate::core::keypad::{is_keypad_digit, letters_for, KEYPAD_DIGITS};
pub use crate::core::types::{parse_digits, Combination, Digit};
pub use crate::presenter::{FormAction, FormOutcome, KeypadForm, ResultsView};
