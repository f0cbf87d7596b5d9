//! Parse errors.
//!
//! Every error carries the index of the token it refers to. The rendered
//! messages are stable and meant to be shown to whoever wrote the condition.

use thiserror::Error;
use vis_ir::Arity;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Unexpected token '{text}'.")]
    UnexpectedToken { text: String },

    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,

    #[error("Expected an operation name; found '{found}' instead.")]
    ExpectedOperationName { found: String },

    #[error("Unknown operation '{name}'.")]
    UnknownOperation { name: String },

    /// The operands were parsed but the next token is not `)`.
    #[error("Operation '{name}' takes {arity}; ')' expected.")]
    MissingCloseParen { name: &'static str, arity: Arity },

    /// An operand failed to parse. The inner failure is not kept.
    #[error("Expression expected.")]
    ExpressionExpected,

    #[error("Integer literal '{text}' is out of range.")]
    IntegerOutOfRange { text: String },
}

/// A parse failure at a token index.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ParseErrorKind,
    index: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, index: usize) -> Self {
        ParseError { kind, index }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Index of the offending token.
    ///
    /// May equal the token count when a list without `EndOfInput` ran out.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
