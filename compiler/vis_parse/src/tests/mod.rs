//! Parser tests, driven through the real lexer.

#![expect(clippy::unwrap_used, reason = "tests unwrap known-good inputs")]

mod errors;

use crate::{parse, ParseResult};

fn parse_source(source: &str) -> ParseResult {
    parse(&vis_lexer::lex(source))
}
