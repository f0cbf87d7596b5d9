//! Tree-walking interpreter.

use tracing::{debug, trace};
use vis_ir::Expr;
use vis_stack::ensure_sufficient_stack;

use crate::errors::undefined_variable;
use crate::{evaluate_binary, evaluate_unary, EvalResult, Resolver};

/// Evaluate `expr`, looking variables up through `resolver`.
///
/// Evaluation is bottom-up. A failing operand stops evaluation of its
/// parent: the right operand of a binary node is not evaluated when the left
/// one fails. Values never short-circuit, so `(and false x)` still resolves
/// `x`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn interpret<R: Resolver + ?Sized>(expr: &Expr, resolver: &R) -> EvalResult {
    Interpreter::new(resolver).eval(expr)
}

/// Interpreter bound to one resolver. Holds no other state, so one instance
/// can evaluate any number of expressions.
pub struct Interpreter<'r, R: Resolver + ?Sized> {
    resolver: &'r R,
}

impl<'r, R: Resolver + ?Sized> Interpreter<'r, R> {
    pub fn new(resolver: &'r R) -> Self {
        Interpreter { resolver }
    }

    /// Evaluate an expression.
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Variable(name) => self.resolver.resolve(name).ok_or_else(|| {
                debug!(name = %name, "undefined variable");
                undefined_variable(name)
            }),
            Expr::Int(n) => Ok((*n).into()),
            Expr::Str(s) => Ok(s.as_str().into()),
            Expr::Bool(b) => Ok((*b).into()),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                trace!(op = op.name(), value = %value, "unary");
                evaluate_unary(&value, *op)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                trace!(op = op.name(), left = %left, right = %right, "binary");
                evaluate_binary(&left, &right, *op)
            }
        }
    }
}
