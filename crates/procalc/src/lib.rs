//! Procalc, a scientific pocket calculator.
//!
//! The crate splits into a UI-agnostic [`core`] (the operand state machine,
//! display formatting, scientific functions, and the calculation tape) and
//! a [`tui`] view layer (keypad grids, keyboard routing, rendering) behind
//! the default `tui` feature.
//!
//! The engine is a small state machine over operand text: digits accumulate
//! into the current operand, choosing an operation captures it as the left
//! operand, and computing folds the pair back into a single operand. The
//! only failure it surfaces is division by zero; everything else either
//! no-ops (incomplete input) or renders as the `"Error"` literal
//! (non-finite results).
//!
//! # Example
//!
//! ```rust
//! use procalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit(3);
//! calc.choose_operation(BinaryOp::Add)?;
//! calc.append_digit(4);
//! calc.compute()?;
//! assert_eq!(calc.current_operand(), "7");
//! # Ok::<(), CalcError>(())
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::format::format_number;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{BinaryOp, CalcError, CalcResult, Calculator, DisplayState, UnaryFn};

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, InputHandler, KeyAction, Keypad};
}
