//! Keyboard routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::BinaryOp;

/// Actions the keyboard can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a digit to the current operand.
    Digit(u8),
    /// Append the decimal point.
    Point,
    /// Select a pending binary operation.
    Operation(BinaryOp),
    /// Fold the pending expression.
    Evaluate,
    /// Drop the last character of the current operand.
    Delete,
    /// Reset the operands and pending operation.
    Clear,
    /// Clear everything including the tape.
    ClearAll,
    /// Divide the current operand by one hundred.
    Percent,
    /// Toggle the scientific keypad.
    ToggleScientific,
    /// Recall the last tape result into the current operand.
    RecallLast,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm key events to calculator actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearAll,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => KeyAction::Digit(c as u8 - b'0'),
            KeyCode::Char('.') => KeyAction::Point,
            KeyCode::Char('+') => KeyAction::Operation(BinaryOp::Add),
            KeyCode::Char('-') => KeyAction::Operation(BinaryOp::Subtract),
            KeyCode::Char('*') => KeyAction::Operation(BinaryOp::Multiply),
            KeyCode::Char('/') => KeyAction::Operation(BinaryOp::Divide),
            KeyCode::Char('^') => KeyAction::Operation(BinaryOp::Power),
            KeyCode::Char('%') => KeyAction::Percent,
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Backspace => KeyAction::Delete,
            KeyCode::Esc => KeyAction::Clear,
            KeyCode::Tab => KeyAction::ToggleScientific,
            KeyCode::Up => KeyAction::RecallLast,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Digit and point keys =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            let action = handler.handle_key(key_event(KeyCode::Char(c)));
            assert_eq!(action, KeyAction::Digit(i as u8));
        }
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Point
        );
    }

    // ===== Operator keys =====

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', BinaryOp::Add),
            ('-', BinaryOp::Subtract),
            ('*', BinaryOp::Multiply),
            ('/', BinaryOp::Divide),
            ('^', BinaryOp::Power),
        ];
        for (c, op) in cases {
            let action = handler.handle_key(key_event(KeyCode::Char(c)));
            assert_eq!(action, KeyAction::Operation(op));
        }
    }

    #[test]
    fn test_handle_percent() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Percent
        );
    }

    // ===== Action keys =====

    #[test]
    fn test_handle_equals_and_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Evaluate
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Evaluate
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Delete
        );
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Clear
        );
    }

    #[test]
    fn test_handle_tab_toggles_scientific() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Tab)),
            KeyAction::ToggleScientific
        );
    }

    #[test]
    fn test_handle_up_recalls() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Up)),
            KeyAction::RecallLast
        );
    }

    // ===== Ctrl combinations =====

    #[test]
    fn test_handle_ctrl_c_and_q_quit() {
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
    fn test_handle_ctrl_l_clears_all() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::ClearAll
        );
    }

    #[test]
    fn test_handle_ctrl_unknown_is_none() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    // ===== Unknown keys =====

    #[test]
    fn test_handle_unknown_key_is_none() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('a'))),
            KeyAction::None
        );
    }
}
