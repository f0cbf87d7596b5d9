//! Token cursor.

use vis_ir::{Token, TokenKind};

/// Position in a token slice.
///
/// Unlike a lexer-produced list, the slice is not guaranteed to end in
/// `EndOfInput`, so lookups past the end return `None`.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the first unconsumed token.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.is(kind))
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        debug_assert!(self.pos < self.tokens.len(), "advanced past the last token");
        self.pos += 1;
    }
}
