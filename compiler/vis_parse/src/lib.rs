//! Recursive descent parser for visibility conditions.
//!
//! The grammar is prefix and fully parenthesised:
//!
//! ```text
//! expression := variable | int | bool | string | '(' sexpr ')'
//! sexpr      := unary-op expression | binary-op expression expression
//! ```
//!
//! so a single token of lookahead picks the production and each operator's
//! arity fixes how many operands follow. There is no precedence or
//! associativity to resolve.

mod cursor;
mod error;
mod grammar;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;
use vis_ir::{Expr, Token, TokenKind};

/// A successfully parsed expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    pub expr: Expr,
    /// Index of the first token after the expression (the `EndOfInput`
    /// token for a complete parse).
    pub next: usize,
}

/// Result of [`parse`].
pub type ParseResult = Result<Parsed, ParseError>;

/// Parse exactly one expression from `tokens`.
///
/// The token after the expression must be `EndOfInput`; anything else is
/// reported as an unexpected token, and a list that ends early (the lexer
/// stopped on unrecognized text) as an unexpected end of input.
pub fn parse(tokens: &[Token]) -> ParseResult {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(Parsed {
        expr,
        next: parser.cursor.position(),
    })
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Error at the current position.
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.position())
    }

    /// Require the current token to be `EndOfInput`. Does not consume it.
    fn expect_end(&self) -> Result<(), ParseError> {
        match self.cursor.current() {
            Some(token) if token.is(TokenKind::EndOfInput) => Ok(()),
            Some(token) => Err(self.error_here(ParseErrorKind::UnexpectedToken {
                text: token.text.clone(),
            })),
            None => Err(self.error_here(ParseErrorKind::UnexpectedEndOfInput)),
        }
    }
}

#[cfg(test)]
mod tests;
