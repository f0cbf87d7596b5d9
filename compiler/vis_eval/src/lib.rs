//! Interpreter for visibility conditions.
//!
//! # Architecture
//!
//! - [`Value`]: the three runtime shapes (int, string, bool)
//! - [`Resolver`]: host-supplied variable lookup
//! - [`evaluate_binary`] / [`evaluate_unary`]: enum dispatch over the
//!   operator and operand types
//! - [`interpret`]: the tree walk
//!
//! Evaluation is synchronous and keeps no state between calls. Concurrent
//! calls are independent; sharing a resolver across threads requires only
//! that the resolver itself is `Sync`.

pub mod errors;
mod interpreter;
mod operators;
mod resolver;
mod unary_operators;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{interpret, Interpreter};
pub use operators::evaluate_binary;
pub use resolver::{Resolver, Variables};
pub use unary_operators::evaluate_unary;
pub use value::Value;

#[cfg(test)]
mod tests;
