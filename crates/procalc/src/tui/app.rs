//! TUI application state.
//!
//! Owns the engine and everything around it the widget needs: the tape,
//! the keypad models, the modal error notification and the quit flag.
//! Every dispatched action is a single engine transition followed by a
//! re-render; while the notification is up, the next key or click only
//! dismisses it.

use tracing::{debug, warn};

use crate::core::history::History;
use crate::core::{BinaryOp, CalcResult, Calculator};

use super::input::KeyAction;
use super::keypad::{ButtonAction, Keypad};
use super::ui::ScreenAreas;

/// Calculator application state for the TUI.
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator engine.
    engine: Calculator,
    /// Tape of confirmed folds.
    history: History,
    /// Standard button pad.
    keypad: Keypad,
    /// Scientific button pad.
    sci_keypad: Keypad,
    /// Modal error message, blocking input until dismissed.
    notification: Option<String>,
    /// Whether the app should quit.
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default tape capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(History::DEFAULT_MAX_ENTRIES)
    }

    /// Creates an app with a custom tape capacity.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            engine: Calculator::new(),
            history: History::with_capacity(limit),
            keypad: Keypad::standard(),
            sci_keypad: Keypad::scientific(),
            notification: None,
            should_quit: false,
        }
    }

    /// The calculator engine.
    #[must_use]
    pub fn engine(&self) -> &Calculator {
        &self.engine
    }

    /// The tape of confirmed folds.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The standard button pad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The scientific button pad.
    #[must_use]
    pub fn sci_keypad(&self) -> &Keypad {
        &self.sci_keypad
    }

    /// The modal error message, if one is up.
    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Opens the scientific keypad if it is not already open.
    pub fn open_scientific(&mut self) {
        if !self.engine.scientific_mode() {
            self.engine.toggle_scientific();
        }
    }

    /// Applies a keyboard action.
    ///
    /// Quit always wins; any other input while the notification is up only
    /// dismisses it.
    pub fn apply_key(&mut self, action: KeyAction) {
        if matches!(action, KeyAction::Quit) {
            self.quit();
            return;
        }
        if self.dismiss_notification() {
            return;
        }
        self.highlight_key(action);
        match action {
            KeyAction::Digit(d) => self.engine.append_digit(d),
            KeyAction::Point => self.engine.append_point(),
            KeyAction::Operation(op) => self.choose_operation(op),
            KeyAction::Evaluate => self.evaluate(),
            KeyAction::Delete => self.engine.delete_last(),
            KeyAction::Clear => self.engine.clear(),
            KeyAction::ClearAll => self.clear_all(),
            KeyAction::Percent => self.engine.percent(),
            KeyAction::ToggleScientific => self.engine.toggle_scientific(),
            KeyAction::RecallLast => self.recall_last(),
            KeyAction::Quit | KeyAction::None => {}
        }
    }

    /// Applies a keypad button action.
    pub fn apply_button(&mut self, action: ButtonAction) {
        if self.dismiss_notification() {
            return;
        }
        match action {
            ButtonAction::Digit(d) => self.engine.append_digit(d),
            ButtonAction::Point => self.engine.append_point(),
            ButtonAction::Operator(op) => self.choose_operation(op),
            ButtonAction::Equals => self.evaluate(),
            ButtonAction::Clear => self.engine.clear(),
            ButtonAction::Delete => self.engine.delete_last(),
            ButtonAction::Percent => self.engine.percent(),
            ButtonAction::Unary(function) => self.engine.apply_unary(function),
            ButtonAction::ToggleMode => self.engine.toggle_scientific(),
        }
    }

    /// Handles a left click at absolute screen coordinates.
    pub fn click(&mut self, areas: &ScreenAreas, x: u16, y: u16) {
        if self.dismiss_notification() {
            return;
        }
        self.keypad.release_all();
        self.sci_keypad.release_all();
        if let Some(index) = self.keypad.hit_test(areas.keypad, x, y) {
            self.press_pad_button(index, false);
        } else if self.engine.scientific_mode() {
            if let Some(index) = self.sci_keypad.hit_test(areas.sci_keypad, x, y) {
                self.press_pad_button(index, true);
            }
        }
    }

    fn press_pad_button(&mut self, index: usize, scientific: bool) {
        let pad = if scientific {
            &mut self.sci_keypad
        } else {
            &mut self.keypad
        };
        let Some(action) = pad.get_button(index).map(|b| b.action) else {
            return;
        };
        pad.press_button(index);
        self.apply_button(action);
    }

    /// Drops the notification if one is up. Returns whether it did.
    fn dismiss_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }

    fn choose_operation(&mut self, op: BinaryOp) {
        let result = self.engine.choose_operation(op);
        self.notify_on_error(result);
    }

    fn evaluate(&mut self) {
        let expression = self.engine.expression();
        let result = self.engine.compute();
        if result.is_ok() {
            if let Some(expression) = expression {
                // Pending cleared means the fold actually happened.
                if self.engine.pending_op().is_none() {
                    if let Ok(value) = self.engine.current_operand().parse::<f64>() {
                        debug!(%expression, value, "folded");
                        self.history.record(&expression, value);
                    }
                }
            }
        }
        self.notify_on_error(result);
    }

    fn clear_all(&mut self) {
        self.engine.clear();
        self.history.clear();
    }

    fn recall_last(&mut self) {
        if let Some(entry) = self.history.last() {
            let value = entry.value;
            self.engine.recall(value);
        }
    }

    fn notify_on_error(&mut self, result: CalcResult<()>) {
        if let Err(error) = result {
            warn!(%error, "transition rejected");
            self.notification = Some(error.to_string());
        }
    }

    /// Echoes a key press on the matching keypad button.
    fn highlight_key(&mut self, action: KeyAction) {
        self.keypad.release_all();
        self.sci_keypad.release_all();
        let target = match action {
            KeyAction::Digit(d) => Some(ButtonAction::Digit(d)),
            KeyAction::Point => Some(ButtonAction::Point),
            KeyAction::Operation(op) => Some(ButtonAction::Operator(op)),
            KeyAction::Evaluate => Some(ButtonAction::Equals),
            KeyAction::Clear => Some(ButtonAction::Clear),
            KeyAction::Delete => Some(ButtonAction::Delete),
            KeyAction::Percent => Some(ButtonAction::Percent),
            KeyAction::ToggleScientific => Some(ButtonAction::ToggleMode),
            _ => None,
        };
        if let Some(target) = target {
            if !self.keypad.highlight_action(target) {
                self.sci_keypad.highlight_action(target);
            }
        }
    }
}
