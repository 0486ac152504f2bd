// File: src/input.rs
//! Maps `crossterm` key events onto form actions.

use crate::presenter::FormAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn action_for_key(event: KeyEvent) -> Option<FormAction> {
    // Windows terminals also report releases.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(FormAction::Quit),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(FormAction::Insert(c)),
        KeyCode::Enter => Some(FormAction::Submit),
        KeyCode::Esc => Some(FormAction::Reset),
        KeyCode::Backspace => Some(FormAction::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_submits_and_escape_resets() {
        assert_eq!(action_for_key(key(KeyCode::Enter)), Some(FormAction::Submit));
        assert_eq!(action_for_key(key(KeyCode::Esc)), Some(FormAction::Reset));
        assert_eq!(action_for_key(key(KeyCode::Backspace)), Some(FormAction::Backspace));
    }

    #[test]
    fn printable_keys_are_inserted_even_when_invalid() {
        assert_eq!(action_for_key(key(KeyCode::Char('7'))), Some(FormAction::Insert('7')));
        assert_eq!(action_for_key(key(KeyCode::Char('x'))), Some(FormAction::Insert('x')));
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_c), Some(FormAction::Quit));
        assert_eq!(action_for_key(ctrl_a), None);
        assert_eq!(action_for_key(key(KeyCode::F(1))), None);
    }
}
