//! The calculator engine: a state machine over operand text.
//!
//! State is the `(current, previous, pending)` triple plus the display-mode
//! flag. Every public method is a single transition that runs to completion
//! before the next user event is processed; the only transition that can
//! fail is a fold that divides by zero, which leaves the state untouched
//! and hands the error to the caller.

use crate::core::format::format_number;
use crate::core::scientific::UnaryFn;
use crate::core::{CalcError, CalcResult};

/// Binary operation pending between the previous and current operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
    /// Exponentiation, `previous ^ current`.
    Power,
}

impl BinaryOp {
    /// Display symbol shown in the secondary display line.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Applies the operation to two operands.
    pub(crate) fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            Self::Power => Ok(lhs.powf(rhs)),
        }
    }
}

/// Read-only projection of the state for the two display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Primary line: the operand being entered.
    pub primary: String,
    /// Secondary line: the captured operand and pending operator, or empty.
    pub secondary: String,
}

/// The calculator engine.
///
/// Created in the initial state `("0", "", none)`; [`Calculator::clear`] is
/// the only transition that returns there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    /// Operand being entered.
    current: String,
    /// Operand captured before an operation was chosen; empty when none.
    previous: String,
    /// Operation in progress, if any.
    pending: Option<BinaryOp>,
    /// Whether the scientific keypad is visible. No arithmetic effect.
    scientific_mode: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates an engine in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            pending: None,
            scientific_mode: false,
        }
    }

    /// The operand currently being entered.
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// The operand captured before the pending operation, empty when none.
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// The operation in progress, if any.
    #[must_use]
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.pending
    }

    /// Whether the scientific keypad is visible.
    #[must_use]
    pub fn scientific_mode(&self) -> bool {
        self.scientific_mode
    }

    /// Appends a digit (`0..=9`) to the current operand.
    ///
    /// A digit replaces a lone `"0"`; anything else is appended verbatim.
    pub fn append_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        if self.current == "0" {
            self.current.clear();
        }
        self.current.push(char::from(b'0' + digit));
    }

    /// Appends the decimal point to the current operand.
    ///
    /// No-op when the operand already contains one.
    pub fn append_point(&mut self) {
        if self.current.contains('.') {
            return;
        }
        self.current.push('.');
    }

    /// Selects the pending binary operation.
    ///
    /// No-op when the current operand is empty. When an operation is
    /// already pending with a right operand typed, the expression folds
    /// first and the result becomes the new left operand; a failed fold
    /// aborts the whole transition with the state unchanged. Otherwise the
    /// current operand moves into the previous slot and entry restarts
    /// empty.
    pub fn choose_operation(&mut self, op: BinaryOp) -> CalcResult<()> {
        if self.current.is_empty() {
            return Ok(());
        }
        if !self.previous.is_empty() {
            self.compute()?;
        }
        self.pending = Some(op);
        self.previous = std::mem::take(&mut self.current);
        Ok(())
    }

    /// Folds `previous op current` into the current operand.
    ///
    /// No-op when no operation is pending or either operand fails to parse
    /// (the guard for an incomplete expression). Division by zero aborts
    /// with the state unchanged. On success the formatted result becomes
    /// the current operand and the pending slots clear.
    pub fn compute(&mut self) -> CalcResult<()> {
        let Some(op) = self.pending else {
            return Ok(());
        };
        let (Ok(prev), Ok(cur)) = (self.previous.parse::<f64>(), self.current.parse::<f64>())
        else {
            return Ok(());
        };
        let result = op.apply(prev, cur)?;
        self.current = format_number(result);
        self.pending = None;
        self.previous.clear();
        Ok(())
    }

    /// Applies a unary scientific function to the current operand.
    ///
    /// No-op when the operand fails to parse. The result replaces the
    /// current operand; the pending operation and previous operand are
    /// untouched.
    pub fn apply_unary(&mut self, function: UnaryFn) {
        let Ok(value) = self.current.parse::<f64>() else {
            return;
        };
        self.current = format_number(function.apply(value));
    }

    /// Divides the current operand by one hundred.
    ///
    /// No-op when the operand fails to parse.
    pub fn percent(&mut self) {
        let Ok(value) = self.current.parse::<f64>() else {
            return;
        };
        self.current = format_number(value / 100.0);
    }

    /// Drops the last character of the current operand.
    ///
    /// A single-character operand resets to `"0"`; an empty operand stays
    /// empty.
    pub fn delete_last(&mut self) {
        if self.current.len() == 1 {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
    }

    /// Resets the arithmetic triple to the initial `("0", "", none)`.
    ///
    /// The display-mode flag is a view preference and survives.
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.pending = None;
    }

    /// Flips the scientific keypad flag.
    pub fn toggle_scientific(&mut self) {
        self.scientific_mode = !self.scientific_mode;
    }

    /// Replaces the current operand with a recalled numeric value.
    ///
    /// The pending operation and previous operand are untouched, so a
    /// recalled result can serve as the right operand of a pending fold.
    pub fn recall(&mut self, value: f64) {
        self.current = format_number(value);
    }

    /// The pending expression text, e.g. `"3 + 4"`, when an operation is
    /// in progress.
    #[must_use]
    pub fn expression(&self) -> Option<String> {
        self.pending
            .map(|op| format!("{} {} {}", self.previous, op.symbol(), self.current))
    }

    /// Projects the display-relevant state.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        let secondary = match self.pending {
            Some(op) => format!("{} {}", self.previous, op.symbol()),
            None => String::new(),
        };
        DisplayState {
            primary: self.current.clone(),
            secondary,
        }
    }
}
