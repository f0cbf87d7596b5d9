//! Tokens produced by the lexer.
//!
//! A token records the whitespace run that precedes it as well as its own
//! text, so the exact source layout can be recovered from a token list.

mod list;


pub use list::TokenList;

use std::fmt;

/// Token kinds.
///
/// Boolean literals share one kind; the token text tells `true` from `false`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Symbol,
    BooleanLiteral,
    IntLiteral,
    StringLiteral,
    EndOfInput,
}

impl TokenKind {
    /// Human-readable name, used in logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::Symbol => "symbol",
            Self::BooleanLiteral => "boolean literal",
            Self::IntLiteral => "integer literal",
            Self::StringLiteral => "string literal",
            Self::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A lexed token.
///
/// Offsets are byte offsets into the source. `text` is the exact matched
/// slice without surrounding whitespace; string literals keep their quotes
/// and `EndOfInput` has empty text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Offset of the whitespace run preceding the token.
    pub whitespace_start: usize,
    /// Length of that whitespace run (may be zero).
    pub whitespace_len: usize,
    pub text: String,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        whitespace_start: usize,
        whitespace_len: usize,
        text: impl Into<String>,
    ) -> Self {
        Token {
            kind,
            whitespace_start,
            whitespace_len,
            text: text.into(),
        }
    }

    /// Offset of the token proper (`whitespace_start + whitespace_len`).
    #[inline]
    pub fn start(&self) -> usize {
        self.whitespace_start + self.whitespace_len
    }

    /// Offset one past the last byte of the token text.
    #[inline]
    pub fn end(&self) -> usize {
        self.start() + self.text.len()
    }

    /// Byte range of the token text in the source.
    #[inline]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start()..self.end()
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}", self.kind, self.text, self.start())
    }
}
