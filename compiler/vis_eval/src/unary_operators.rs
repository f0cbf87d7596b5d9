//! Unary operator implementations.

use vis_ir::UnaryOp;

use crate::errors::unary_type_mismatch;
use crate::{EvalResult, Value};

/// Evaluate `op value`.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        (Value::Int(_) | Value::Str(_), UnaryOp::Not) => Err(unary_type_mismatch(op, value)),
    }
}
