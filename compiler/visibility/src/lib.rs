//! Visibility conditions.
//!
//! A visibility condition is a small, fully parenthesised expression such as
//!
//! ```text
//! (and (gte age 18) (not (eq country "XX")))
//! ```
//!
//! evaluated against variables supplied by the host. The pipeline is
//! lexer ([`vis_lexer`]) → parser ([`vis_parse`]) → interpreter
//! ([`vis_eval`]); this crate runs all three in one call.
//!
//! ```
//! use visibility::{is_visible, Variables};
//!
//! let vars = Variables::new().with("age", 20_i64).with("country", "NZ");
//! let shown = is_visible("(and (gte age 18) (not (eq country \"XX\")))", &vars);
//! assert_eq!(shown, Ok(true));
//! ```

mod tracing_setup;

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

pub use tracing_setup::init_tracing;
pub use vis_eval::{
    interpret, EvalError, EvalErrorKind, EvalResult, Interpreter, Resolver, Value, Variables,
};
pub use vis_ir::{Arity, BinaryOp, Expr, Operator, Token, TokenKind, TokenList, UnaryOp};
pub use vis_lexer::{lex, Lexer};
pub use vis_parse::{parse, ParseError, ParseErrorKind, ParseResult, Parsed};

/// Why a condition could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConditionError {
    /// The text is not a well-formed condition.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// The condition parsed but failed to evaluate.
    #[error("{0}")]
    Eval(#[from] EvalError),

    /// The condition evaluated to something other than a boolean.
    #[error("Condition evaluated to a value of type '{type_name}', not 'bool'.")]
    NotBoolean { type_name: &'static str },
}

/// Lex and parse `source` into an expression.
pub fn compile(source: &str) -> Result<Expr, ParseError> {
    let tokens = lex(source);
    if !tokens.is_terminated() {
        debug!(tokens = tokens.len(), "lexer stopped before end of input");
    }
    parse(&tokens).map(|parsed| parsed.expr)
}

/// Lex, parse and interpret `source`.
pub fn evaluate<R: Resolver + ?Sized>(source: &str, resolver: &R) -> Result<Value, ConditionError> {
    let expr = compile(source)?;
    Ok(interpret(&expr, resolver)?)
}

/// Evaluate `source` and require a boolean result.
pub fn is_visible<R: Resolver + ?Sized>(
    source: &str,
    resolver: &R,
) -> Result<bool, ConditionError> {
    let value = evaluate(source, resolver)?;
    value.as_bool().ok_or(ConditionError::NotBoolean {
        type_name: value.type_name(),
    })
}

/// Evaluate many independent conditions in parallel.
///
/// Results are returned in input order. Each condition is evaluated on its
/// own; the resolver is shared between threads and so must be `Sync`.
pub fn evaluate_all<S, R>(sources: &[S], resolver: &R) -> Vec<Result<Value, ConditionError>>
where
    S: AsRef<str> + Sync,
    R: Resolver + Sync + ?Sized,
{
    sources
        .par_iter()
        .map(|source| evaluate(source.as_ref(), resolver))
        .collect()
}
