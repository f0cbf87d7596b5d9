//! Evaluation errors.
//!
//! Construct errors through the factory functions; `EvalErrorKind` is
//! public so callers can match on the category instead of the message.

use thiserror::Error;
use vis_ir::{BinaryOp, UnaryOp};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("Variable '{name}' is not defined.")]
    UndefinedVariable { name: String },

    #[error("Operation '{op}' cannot be applied to operands of type '{left}' and '{right}'.")]
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    #[error("Operation '{op}' cannot be applied to an operand of type '{operand}'.")]
    UnaryTypeMismatch { op: UnaryOp, operand: &'static str },
}

/// Evaluation error. Carries no position: tree nodes have no source spans.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

// Factories

/// The resolver has no value for `name`.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    }
    .into()
}

/// `op` is not defined for this pair of operand types.
#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
    .into()
}

/// `op` is not defined for this operand type.
#[cold]
pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> EvalError {
    EvalErrorKind::UnaryTypeMismatch {
        op,
        operand: operand.type_name(),
    }
    .into()
}
