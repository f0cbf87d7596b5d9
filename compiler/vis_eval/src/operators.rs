//! Binary operator implementations.
//!
//! Dispatch is on the operand type pair first, then on the operator. Every
//! operator yields a boolean; any pair the table below does not list is a
//! type mismatch.
//!
//! | Operator | Operand types |
//! |---|---|
//! | `and` `or` | bool, bool |
//! | `eq` `neq` | bool, bool / int, int / string, string |
//! | `gt` `lt` `gte` `lte` | int, int |

use vis_ir::BinaryOp;

use crate::errors::binary_type_mismatch;
use crate::{EvalResult, Value};

/// Evaluate `left op right`. Both operands are already evaluated.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let result = match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        _ => None,
    };
    result
        .map(Value::Bool)
        .ok_or_else(|| binary_type_mismatch(op, left, right))
}

/// Binary operations on booleans.
///
/// Both operands have been evaluated; `and`/`or` do not short-circuit.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> Option<bool> {
    match op {
        BinaryOp::And => Some(a && b),
        BinaryOp::Or => Some(a || b),
        BinaryOp::Eq => Some(a == b),
        BinaryOp::NotEq => Some(a != b),
        BinaryOp::Gt | BinaryOp::Lt | BinaryOp::GtEq | BinaryOp::LtEq => None,
    }
}

/// Binary operations on integers.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Option<bool> {
    match op {
        BinaryOp::Eq => Some(a == b),
        BinaryOp::NotEq => Some(a != b),
        BinaryOp::Gt => Some(a > b),
        BinaryOp::Lt => Some(a < b),
        BinaryOp::GtEq => Some(a >= b),
        BinaryOp::LtEq => Some(a <= b),
        BinaryOp::And | BinaryOp::Or => None,
    }
}

/// Binary operations on strings. Only equality is defined.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Option<bool> {
    match op {
        BinaryOp::Eq => Some(a == b),
        BinaryOp::NotEq => Some(a != b),
        BinaryOp::And
        | BinaryOp::Or
        | BinaryOp::Gt
        | BinaryOp::Lt
        | BinaryOp::GtEq
        | BinaryOp::LtEq => None,
    }
}
