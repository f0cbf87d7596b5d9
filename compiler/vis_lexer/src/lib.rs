//! Tokenizer for visibility conditions.
//!
//! Scanning runs left to right. At each position whitespace is skipped and
//! then exactly one rule from the rule table is applied. Every token
//! records the whitespace run before it, so offsets and layout survive.
//!
//! # Stopping early
//!
//! There is no lexical error type. When no rule matches (an unknown
//! character, an unterminated string) scanning stops and the tokens gathered
//! so far are returned without an `EndOfInput` terminator. Callers detect
//! malformed input with [`TokenList::is_terminated`]; the parser reports it
//! when it runs off the end of the list.

mod cursor;
mod rules;

use cursor::Cursor;
use tracing::{debug, trace};
use vis_ir::{Token, TokenKind, TokenList};

/// Lex `source` into a token list.
///
/// The list ends in a single `EndOfInput` token when the whole source was
/// well-formed.
pub fn lex(source: &str) -> TokenList {
    Lexer::new(source).collect()
}

/// Streaming lexer.
///
/// Yields tokens until it has produced `EndOfInput` or met text that no
/// rule matches, then returns `None` forever.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// True once the lexer has stopped, either at the end of input or on
    /// unrecognized text.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let whitespace_start = self.cursor.pos();
        let whitespace_len = self.cursor.skip_whitespace();
        let rest = self.cursor.rest();

        let Some((kind, len)) = rules::match_rule(rest) else {
            self.finished = true;
            debug!(
                pos = self.cursor.pos(),
                found = ?rest.chars().next(),
                "no token rule matches; stopping without end of input"
            );
            return None;
        };

        let token = Token::new(kind, whitespace_start, whitespace_len, &rest[..len]);
        self.cursor.advance(len);
        if kind == TokenKind::EndOfInput {
            self.finished = true;
        }

        trace!(
            kind = kind.display_name(),
            start = token.start(),
            text = %token.text,
            "token"
        );
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
