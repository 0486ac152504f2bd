// File: src/presenter.rs
//! Presentation adapter: a single digit input field, an error region and a
//! results region, driven by submit (button or Enter) and reset actions.
//! Front ends only render the state kept here.

use crate::config::AdapterConfig;
use crate::core::generator::letter_combinations;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

static KEYPAD_INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[2-9]+$").expect("valid keypad input regex"));

/// What a front end can ask of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Insert(char),
    Backspace,
    Submit,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// Size of the full result set, even when `items` is capped.
    pub count: usize,
    pub items: Vec<String>,
    pub truncated: bool,
}

pub struct KeypadForm {
    pub input: String,
    pub error: Option<String>,
    pub results: Option<ResultsView>,
    pub focused: bool,
    config: AdapterConfig,
}

impl KeypadForm {
    pub fn new(config: AdapterConfig) -> Self {
        Self {
            input: String::new(),
            error: None,
            results: None,
            focused: true,
            config,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn apply(&mut self, action: FormAction) -> FormOutcome {
        match action {
            FormAction::Insert(c) => self.input.push(c),
            FormAction::Backspace => {
                self.input.pop();
            }
            FormAction::Submit => self.submit(),
            FormAction::Reset => self.reset(),
            FormAction::Quit => return FormOutcome::Quit,
        }
        FormOutcome::Continue
    }

    /// Validates the input field and, when it holds only keypad digits,
    /// fills the results view.
    pub fn submit(&mut self) {
        self.error = None;
        let digits = self.input.trim().to_string();

        if digits.is_empty() {
            self.fail(self.config.messages.empty_input.clone(), "empty_input");
            return;
        }
        if !KEYPAD_INPUT_RE.is_match(&digits) {
            self.fail(self.config.messages.invalid_digits.clone(), "invalid_digits");
            return;
        }

        let combinations = match letter_combinations(&digits) {
            Ok(combinations) => combinations,
            Err(err) => {
                self.fail(err.to_string(), "generator_error");
                return;
            }
        };
        if combinations.is_empty() {
            self.fail(self.config.messages.no_combinations.clone(), "no_combinations");
            return;
        }

        let count = combinations.len();
        let mut items = combinations;
        let truncated = match self.config.max_display {
            Some(limit) if count > limit => {
                items.truncate(limit);
                true
            }
            _ => false,
        };
        info!(
            "event=generate module=presenter status=ok digits={} count={} truncated={}",
            digits.len(),
            count,
            truncated
        );
        self.results = Some(ResultsView { count, items, truncated });
    }

    /// Clears the input and every message, hides results and takes focus.
    pub fn reset(&mut self) {
        self.input.clear();
        self.error = None;
        self.results = None;
        self.focused = true;
        debug!("event=reset module=presenter status=ok");
    }

    /// The count line for the current results, if any are shown.
    pub fn count_label(&self) -> Option<String> {
        self.results.as_ref().map(|view| {
            self.config
                .messages
                .count_label
                .replace("{count}", &view.count.to_string())
        })
    }

    fn fail(&mut self, message: String, reason: &str) {
        info!("event=validation_failed module=presenter status=rejected reason={reason}");
        self.error = Some(message);
        self.results = None;
    }
}
