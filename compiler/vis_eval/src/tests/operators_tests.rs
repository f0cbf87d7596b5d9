//! Tests for binary operator dispatch.

#![expect(clippy::unwrap_used, reason = "tests unwrap known-good inputs")]

use crate::operators::evaluate_binary;
use crate::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;
use vis_ir::BinaryOp;

fn eval(left: impl Into<Value>, right: impl Into<Value>, op: BinaryOp) -> Value {
    evaluate_binary(&left.into(), &right.into(), op).unwrap()
}

#[test]
fn test_logical_operations() {
    for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
        assert_eq!(eval(a, b, BinaryOp::And), Value::Bool(a && b));
        assert_eq!(eval(a, b, BinaryOp::Or), Value::Bool(a || b));
    }
}

#[test]
fn test_equality() {
    assert_eq!(eval(42_i64, 42_i64, BinaryOp::Eq), Value::Bool(true));
    assert_eq!(eval(1_i64, 2_i64, BinaryOp::NotEq), Value::Bool(true));
    assert_eq!(eval(true, false, BinaryOp::Eq), Value::Bool(false));
    assert_eq!(eval(true, true, BinaryOp::NotEq), Value::Bool(false));
    assert_eq!(eval("abc", "abc", BinaryOp::Eq), Value::Bool(true));
    assert_eq!(eval("abc", "ABC", BinaryOp::NotEq), Value::Bool(true));
}

#[test]
fn test_int_comparisons() {
    assert_eq!(eval(2_i64, 3_i64, BinaryOp::Lt), Value::Bool(true));
    assert_eq!(eval(3_i64, 2_i64, BinaryOp::Gt), Value::Bool(true));
    assert_eq!(eval(5_i64, 6_i64, BinaryOp::LtEq), Value::Bool(true));
    assert_eq!(eval(6_i64, 6_i64, BinaryOp::GtEq), Value::Bool(true));
    assert_eq!(eval(6_i64, 6_i64, BinaryOp::Gt), Value::Bool(false));
    assert_eq!(eval(i64::MIN, i64::MAX, BinaryOp::Lt), Value::Bool(true));
}

#[test]
fn test_logic_on_ints_is_a_mismatch() {
    let error = evaluate_binary(&Value::Int(1), &Value::Int(2), BinaryOp::And).unwrap_err();
    assert_eq!(
        error.kind(),
        &EvalErrorKind::BinaryTypeMismatch {
            op: BinaryOp::And,
            left: "int",
            right: "int",
        }
    );
    assert_eq!(
        error.message(),
        "Operation 'and' cannot be applied to operands of type 'int' and 'int'."
    );
}

#[test]
fn test_mixed_types_are_a_mismatch() {
    let error =
        evaluate_binary(&Value::Int(1), &Value::string("1"), BinaryOp::Eq).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Operation 'eq' cannot be applied to operands of type 'int' and 'string'."
    );

    let error =
        evaluate_binary(&Value::Bool(true), &Value::Int(1), BinaryOp::Or).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Operation 'or' cannot be applied to operands of type 'bool' and 'int'."
    );
}

#[test]
fn test_ordering_is_int_only() {
    for op in [BinaryOp::Gt, BinaryOp::Lt, BinaryOp::GtEq, BinaryOp::LtEq] {
        assert!(evaluate_binary(&Value::string("a"), &Value::string("b"), op).is_err());
        assert!(evaluate_binary(&Value::Bool(false), &Value::Bool(true), op).is_err());
    }
}

#[test]
fn test_logic_on_strings_is_a_mismatch() {
    let error =
        evaluate_binary(&Value::string("a"), &Value::string("b"), BinaryOp::Or).unwrap_err();
    assert_eq!(
        error.message(),
        "Operation 'or' cannot be applied to operands of type 'string' and 'string'."
    );
}
