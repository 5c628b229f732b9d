//! Unary scientific functions.

use std::f64::consts::{E, PI};

/// Unary scientific functions selectable from the scientific keypad.
///
/// Every function consumes the parsed current operand; [`UnaryFn::Pi`] and
/// [`UnaryFn::E`] ignore its value and yield the constant. The power key is
/// not in this set: it selects a pending binary operation instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    /// Sine, input in degrees.
    Sin,
    /// Cosine, input in degrees.
    Cos,
    /// Tangent, input in degrees.
    Tan,
    /// Square root.
    Sqrt,
    /// Base-10 logarithm.
    Log10,
    /// Natural logarithm.
    Ln,
    /// The constant π.
    Pi,
    /// The constant e.
    E,
    /// Factorial over successive integers.
    Factorial,
    /// Absolute value.
    Abs,
    /// Multiplicative inverse, `1/x`.
    Reciprocal,
}

impl UnaryFn {
    /// Keypad legend for this function.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "√",
            Self::Log10 => "lg",
            Self::Ln => "ln",
            Self::Pi => "π",
            Self::E => "e",
            Self::Factorial => "n!",
            Self::Abs => "|x|",
            Self::Reciprocal => "1/x",
        }
    }

    /// Applies the function to the current operand value.
    ///
    /// Out-of-domain inputs (negative square roots, logarithms of zero,
    /// reciprocals of zero) come back as NaN or infinity and are rendered
    /// as the `"Error"` literal by the formatter, not rejected here.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => to_radians(value).sin(),
            Self::Cos => to_radians(value).cos(),
            Self::Tan => to_radians(value).tan(),
            Self::Sqrt => value.sqrt(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
            Self::Pi => PI,
            Self::E => E,
            Self::Factorial => factorial(value),
            Self::Abs => value.abs(),
            Self::Reciprocal => 1.0 / value,
        }
    }
}

/// Converts a degree input to radians.
fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Iterative factorial over successive integers.
///
/// Negative input yields NaN. Fractional input multiplies the integers up
/// to `floor(n)`. The loop stops once the accumulator leaves the finite
/// range; the remaining factors cannot change the result.
fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    let mut result = 1.0_f64;
    let mut factor = 2.0_f64;
    while factor <= n {
        result *= factor;
        factor += 1.0;
        if !result.is_finite() {
            break;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // ===== Trigonometry (degree inputs) =====

    #[test]
    fn test_sin_zero_degrees() {
        assert_eq!(UnaryFn::Sin.apply(0.0), 0.0);
    }

    #[test]
    fn test_sin_ninety_degrees() {
        assert_close(UnaryFn::Sin.apply(90.0), 1.0);
    }

    #[test]
    fn test_cos_zero_degrees() {
        assert_eq!(UnaryFn::Cos.apply(0.0), 1.0);
    }

    #[test]
    fn test_cos_sixty_degrees() {
        assert_close(UnaryFn::Cos.apply(60.0), 0.5);
    }

    #[test]
    fn test_tan_forty_five_degrees() {
        assert_close(UnaryFn::Tan.apply(45.0), 1.0);
    }

    // ===== Roots and logarithms =====

    #[test]
    fn test_sqrt() {
        assert_eq!(UnaryFn::Sqrt.apply(16.0), 4.0);
    }

    #[test]
    fn test_sqrt_negative_is_nan() {
        assert!(UnaryFn::Sqrt.apply(-1.0).is_nan());
    }

    #[test]
    fn test_log10() {
        assert_close(UnaryFn::Log10.apply(1000.0), 3.0);
    }

    #[test]
    fn test_log10_of_zero_is_infinite() {
        assert!(UnaryFn::Log10.apply(0.0).is_infinite());
    }

    #[test]
    fn test_ln() {
        assert_close(UnaryFn::Ln.apply(E), 1.0);
    }

    // ===== Constants =====

    #[test]
    fn test_pi_ignores_input() {
        assert_eq!(UnaryFn::Pi.apply(123.0), PI);
    }

    #[test]
    fn test_e_ignores_input() {
        assert_eq!(UnaryFn::E.apply(-7.0), E);
    }

    // ===== Factorial =====

    #[test]
    fn test_factorial_of_zero() {
        assert_eq!(UnaryFn::Factorial.apply(0.0), 1.0);
    }

    #[test]
    fn test_factorial_of_one() {
        assert_eq!(UnaryFn::Factorial.apply(1.0), 1.0);
    }

    #[test]
    fn test_factorial_of_five() {
        assert_eq!(UnaryFn::Factorial.apply(5.0), 120.0);
    }

    #[test]
    fn test_factorial_of_ten() {
        assert_eq!(UnaryFn::Factorial.apply(10.0), 3_628_800.0);
    }

    #[test]
    fn test_factorial_negative_is_nan() {
        assert!(UnaryFn::Factorial.apply(-1.0).is_nan());
    }

    #[test]
    fn test_factorial_fractional_input_uses_integer_factors() {
        // 4.5 multiplies 2 * 3 * 4, the integers at or below it.
        assert_eq!(UnaryFn::Factorial.apply(4.5), 24.0);
    }

    #[test]
    fn test_factorial_overflow_terminates() {
        assert!(UnaryFn::Factorial.apply(1e6).is_infinite());
    }

    // ===== Absolute value and reciprocal =====

    #[test]
    fn test_abs() {
        assert_eq!(UnaryFn::Abs.apply(-3.5), 3.5);
        assert_eq!(UnaryFn::Abs.apply(3.5), 3.5);
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(UnaryFn::Reciprocal.apply(4.0), 0.25);
    }

    #[test]
    fn test_reciprocal_of_zero_is_infinite() {
        assert!(UnaryFn::Reciprocal.apply(0.0).is_infinite());
    }

    // ===== Labels =====

    #[test]
    fn test_labels_are_distinct() {
        let fns = [
            UnaryFn::Sin,
            UnaryFn::Cos,
            UnaryFn::Tan,
            UnaryFn::Sqrt,
            UnaryFn::Log10,
            UnaryFn::Ln,
            UnaryFn::Pi,
            UnaryFn::E,
            UnaryFn::Factorial,
            UnaryFn::Abs,
            UnaryFn::Reciprocal,
        ];
        for (i, a) in fns.iter().enumerate() {
            for b in &fns[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
