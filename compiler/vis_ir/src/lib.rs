//! Shared data model for visibility conditions.
//!
//! - [`Token`] / [`TokenList`]: lexer output, consumed by the parser
//! - [`Expr`]: the immutable syntax tree produced by the parser and walked
//!   by the interpreter
//! - [`UnaryOp`] / [`BinaryOp`] / [`Operator`]: the closed operator set
//!
//! The only workspace dependency is `vis_stack`, so hosts (and tools such as
//! highlighters) can depend on this crate without the pipeline.

mod ast;
mod token;

pub use ast::{Arity, BinaryOp, Expr, Operator, UnaryOp};
pub use token::{Token, TokenKind, TokenList};
