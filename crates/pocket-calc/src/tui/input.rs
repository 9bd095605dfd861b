//! Keyboard input handling
//!
//! Error prevention - Type-safe key actions prevent invalid input

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::keymap::{self, event_for_char};
use crate::core::CalcEvent;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the calculator
    Calc(CalcEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Some terminals report releases too; only presses count
        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => event_for_char(c).map_or(KeyAction::None, KeyAction::Calc),
            KeyCode::Enter => KeyAction::Calc(keymap::ENTER),
            KeyCode::Esc => KeyAction::Calc(keymap::ESCAPE),
            _ => KeyAction::None,
        }
    }

    /// The key event a user would type for `event`
    #[must_use]
    pub fn key_for_event(event: CalcEvent) -> KeyEvent {
        let code = if event == keymap::ENTER {
            KeyCode::Enter
        } else if event == keymap::ESCAPE {
            KeyCode::Esc
        } else {
            KeyCode::Char(keymap::char_for_event(event))
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operator};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in Digit::all() {
            let event = key_event(KeyCode::Char(d.as_char()));
            assert_eq!(handler.handle_key(event), KeyAction::Calc(CalcEvent::Digit(d)));
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
            ('=', Operator::Equals),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calc(CalcEvent::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_shifted_operator() {
        // '+' and '*' often arrive with SHIFT held
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Calc(CalcEvent::Operator(Operator::Add))
        );
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Calc(CalcEvent::DecimalPoint)
        );
    }

    #[test]
    fn test_handle_percent_and_sign() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Calc(CalcEvent::Percentage)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            KeyAction::Calc(CalcEvent::ToggleSign)
        );
    }

    // ===== Action key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Calc(CalcEvent::Operator(Operator::Equals))
        );
    }

    #[test]
    fn test_handle_escape_and_c() {
        let handler = InputHandler::new();
        for code in [KeyCode::Esc, KeyCode::Char('c'), KeyCode::Char('C')] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Calc(CalcEvent::Clear)
            );
        }
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_q() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_handle_ctrl_c_and_ctrl_q() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    // ===== Ignored input tests =====

    #[test]
    fn test_handle_unmapped_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::F(1),
            KeyCode::Tab,
            KeyCode::Backspace,
            KeyCode::Char('x'),
            KeyCode::Char('^'),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_handle_release_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    // ===== key_for_event tests =====

    #[test]
    fn test_key_for_event_roundtrips() {
        let handler = InputHandler::new();
        let events = Digit::all()
            .map(CalcEvent::Digit)
            .chain([
                CalcEvent::DecimalPoint,
                CalcEvent::Clear,
                CalcEvent::ToggleSign,
                CalcEvent::Percentage,
            ])
            .chain(Operator::ALL.into_iter().map(CalcEvent::Operator));
        for event in events {
            let key = InputHandler::key_for_event(event);
            assert_eq!(handler.handle_key(key), KeyAction::Calc(event));
        }
    }

    #[test]
    fn test_key_for_equals_is_enter() {
        let key = InputHandler::key_for_event(CalcEvent::Operator(Operator::Equals));
        assert_eq!(key.code, KeyCode::Enter);
    }
}
