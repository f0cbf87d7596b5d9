//! Expression grammar.
//!
//! One method per production. Each consumes exactly the tokens of the node
//! it builds and leaves the cursor on the following token.

use tracing::{debug, trace};
use vis_ir::{Expr, Operator, TokenKind};
use vis_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse one expression.
    ///
    /// Wrapped in `ensure_sufficient_stack` since nesting depth is unbounded.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.current() else {
            return Err(self.error_here(ParseErrorKind::UnexpectedEndOfInput));
        };

        debug!(
            pos = self.cursor.position(),
            kind = token.kind.display_name(),
            text = %token.text,
            "parse_expr"
        );

        match token.kind {
            TokenKind::Symbol => {
                self.cursor.advance();
                Ok(Expr::Variable(token.text.clone()))
            }
            TokenKind::IntLiteral => {
                // Leading zeros are accepted by `str::parse`.
                let value = token.text.parse::<i64>().map_err(|_| {
                    self.error_here(ParseErrorKind::IntegerOutOfRange {
                        text: token.text.clone(),
                    })
                })?;
                self.cursor.advance();
                Ok(Expr::Int(value))
            }
            TokenKind::BooleanLiteral => {
                let value = match token.text.as_str() {
                    "true" => true,
                    "false" => false,
                    _ => {
                        return Err(self.error_here(ParseErrorKind::UnexpectedToken {
                            text: token.text.clone(),
                        }));
                    }
                };
                self.cursor.advance();
                Ok(Expr::Bool(value))
            }
            TokenKind::StringLiteral => {
                // Drop the first and last character (the quotes). No escapes.
                let mut chars = token.text.chars();
                chars.next();
                chars.next_back();
                self.cursor.advance();
                Ok(Expr::Str(chars.as_str().to_owned()))
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                self.parse_s_expr()
            }
            TokenKind::EndOfInput => Err(self.error_here(ParseErrorKind::UnexpectedEndOfInput)),
            TokenKind::RightParen => Err(self.error_here(ParseErrorKind::UnexpectedToken {
                text: token.text.clone(),
            })),
        }
    }

    /// Parse the body of an S-expression. The `(` is already consumed.
    fn parse_s_expr(&mut self) -> Result<Expr, ParseError> {
        let Some(head) = self.cursor.current() else {
            return Err(self.error_here(ParseErrorKind::UnexpectedEndOfInput));
        };
        if !head.is(TokenKind::Symbol) {
            return Err(self.error_here(ParseErrorKind::ExpectedOperationName {
                found: head.text.clone(),
            }));
        }
        let Some(op) = Operator::from_name(&head.text) else {
            return Err(self.error_here(ParseErrorKind::UnknownOperation {
                name: head.text.clone(),
            }));
        };
        self.cursor.advance();

        trace!(op = op.name(), "parse_s_expr");

        let expr = match op {
            Operator::Unary(op) => {
                let operand = self.parse_operand()?;
                Expr::unary(op, operand)
            }
            Operator::Binary(op) => {
                let left = self.parse_operand()?;
                let right = self.parse_operand()?;
                Expr::binary(op, left, right)
            }
        };

        self.expect_close(op)?;
        Ok(expr)
    }

    /// Parse an operand of an S-expression.
    ///
    /// Any failure inside the operand is replaced by `Expression expected.`
    /// at the operand's first token.
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.position();
        self.parse_expr().map_err(|inner| {
            trace!(start, inner = %inner, "operand failed");
            ParseError::new(ParseErrorKind::ExpressionExpected, start)
        })
    }

    /// Consume the `)` that closes an S-expression headed by `op`.
    fn expect_close(&mut self, op: Operator) -> Result<(), ParseError> {
        if self.cursor.check(TokenKind::RightParen) {
            self.cursor.advance();
            return Ok(());
        }
        let kind = if self.cursor.current().is_some() {
            ParseErrorKind::MissingCloseParen {
                name: op.name(),
                arity: op.arity(),
            }
        } else {
            ParseErrorKind::UnexpectedEndOfInput
        };
        Err(self.error_here(kind))
    }
}
