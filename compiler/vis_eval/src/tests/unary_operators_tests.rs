//! Tests for unary operator dispatch.

#![expect(clippy::unwrap_used, reason = "tests unwrap known-good inputs")]

use crate::unary_operators::evaluate_unary;
use crate::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;
use vis_ir::UnaryOp;

#[test]
fn test_not() {
    assert_eq!(
        evaluate_unary(&Value::Bool(true), UnaryOp::Not).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_unary(&Value::Bool(false), UnaryOp::Not).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_not_on_int() {
    let error = evaluate_unary(&Value::Int(0), UnaryOp::Not).unwrap_err();
    assert_eq!(
        error.kind(),
        &EvalErrorKind::UnaryTypeMismatch {
            op: UnaryOp::Not,
            operand: "int",
        }
    );
    assert_eq!(
        error.message(),
        "Operation 'not' cannot be applied to an operand of type 'int'."
    );
}

#[test]
fn test_not_on_string() {
    let error = evaluate_unary(&Value::string(""), UnaryOp::Not).unwrap_err();
    assert_eq!(
        error.message(),
        "Operation 'not' cannot be applied to an operand of type 'string'."
    );
}
