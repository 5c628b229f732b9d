//! Calculator core: operand state machine, formatting, scientific functions.
//!
//! Everything under this module is UI-agnostic. The view layer owns a
//! [`Calculator`] instance, feeds transitions into it, and re-renders from
//! [`Calculator::display`] after every call.

pub mod engine;
pub mod format;
pub mod history;
pub mod scientific;

pub use engine::{BinaryOp, Calculator, DisplayState};
pub use scientific::UnaryFn;

use thiserror::Error;

/// Result type for calculator transitions.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors a transition surfaces to the user.
///
/// Operands that fail to parse silently abort the requested transition and
/// are not represented here. Non-finite results are not errors either; they
/// render as the `"Error"` display literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted; the transition was aborted.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Cannot divide by zero");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("divide"));
    }
}
