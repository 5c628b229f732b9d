//! End-to-end engine scenarios through the public API.

use procalc::prelude::*;

#[test]
fn chained_entry_folds_left_to_right() {
    let mut calc = Calculator::new();
    calc.append_digit(3);
    calc.choose_operation(BinaryOp::Add).unwrap();
    calc.append_digit(4);
    calc.choose_operation(BinaryOp::Subtract).unwrap();
    calc.append_digit(5);
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "2");
    assert_eq!(calc.display().primary, "2");
    assert_eq!(calc.display().secondary, "");
}

#[test]
fn power_is_left_associative_across_folds() {
    // 2 ^ 3 ^ 2 entered sequentially folds as (2 ^ 3) ^ 2 = 64.
    let mut calc = Calculator::new();
    calc.append_digit(2);
    calc.choose_operation(BinaryOp::Power).unwrap();
    calc.append_digit(3);
    calc.choose_operation(BinaryOp::Power).unwrap();
    calc.append_digit(2);
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "64");
}

#[test]
fn divide_by_zero_keeps_expression_editable() {
    let mut calc = Calculator::new();
    calc.append_digit(9);
    calc.choose_operation(BinaryOp::Divide).unwrap();
    calc.append_digit(0);
    assert_eq!(calc.compute(), Err(CalcError::DivisionByZero));

    // The rejected fold left everything in place; fixing the divisor works.
    calc.delete_last();
    calc.append_digit(3);
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "3");
}

#[test]
fn error_literal_blocks_arithmetic_until_clear() {
    let mut calc = Calculator::new();
    calc.recall(-1.0);
    calc.apply_unary(UnaryFn::Factorial);
    assert_eq!(calc.current_operand(), "Error");

    calc.percent();
    calc.apply_unary(UnaryFn::Sqrt);
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "Error");

    calc.clear();
    assert_eq!(calc.current_operand(), "0");
    assert_eq!(calc.previous_operand(), "");
    assert_eq!(calc.pending_op(), None);
}

#[test]
fn negative_sqrt_renders_error_literal() {
    let mut calc = Calculator::new();
    calc.recall(-16.0);
    calc.apply_unary(UnaryFn::Sqrt);
    assert_eq!(calc.current_operand(), "Error");
}

#[test]
fn percent_then_operation_chain() {
    // 50% of 200: 200 × 0.5 entered as 200 × 50 % =.
    let mut calc = Calculator::new();
    calc.append_digit(2);
    calc.append_digit(0);
    calc.append_digit(0);
    calc.choose_operation(BinaryOp::Multiply).unwrap();
    calc.append_digit(5);
    calc.append_digit(0);
    calc.percent();
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "100");
}

#[test]
fn scientific_functions_compose_with_pending_operation() {
    // 2 + sqrt(9) = 5: the unary result becomes the right operand.
    let mut calc = Calculator::new();
    calc.append_digit(2);
    calc.choose_operation(BinaryOp::Add).unwrap();
    calc.append_digit(9);
    calc.apply_unary(UnaryFn::Sqrt);
    calc.compute().unwrap();
    assert_eq!(calc.current_operand(), "5");
}

#[test]
fn trig_results_are_noise_free() {
    let mut calc = Calculator::new();
    calc.append_digit(1);
    calc.append_digit(8);
    calc.append_digit(0);
    calc.apply_unary(UnaryFn::Sin);
    // sin(180 deg) rounds to 0 rather than 1.2e-16.
    assert_eq!(calc.current_operand(), "0");
}

#[test]
fn large_results_switch_to_scientific_notation() {
    let mut calc = Calculator::new();
    for _ in 0..7 {
        calc.append_digit(9);
    }
    calc.choose_operation(BinaryOp::Multiply).unwrap();
    for _ in 0..7 {
        calc.append_digit(9);
    }
    calc.compute().unwrap();
    // 9999999^2 = 99999980000001 > 999999999999.
    assert_eq!(calc.current_operand(), "9.999998e13");
}

#[test]
fn display_projection_tracks_pending_operation() {
    let mut calc = Calculator::new();
    calc.append_digit(7);
    calc.choose_operation(BinaryOp::Power).unwrap();
    assert_eq!(calc.display().secondary, "7 ^");
    calc.append_digit(2);
    assert_eq!(calc.display().primary, "2");
    calc.compute().unwrap();
    assert_eq!(calc.display(), DisplayState {
        primary: "49".to_string(),
        secondary: String::new(),
    });
}
