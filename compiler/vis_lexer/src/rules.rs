//! Token rules, in priority order.
//!
//! At each position the rules are tried top to bottom and the first match
//! wins. There is no longest-match resolution: `true` is tried as a plain
//! prefix before symbols, so `truex` scans as `true` followed by `x`.
//!
//! Each rule looks at the unconsumed text (already past any whitespace) and
//! returns the byte length of its match.

use vis_ir::TokenKind;

type Rule = fn(&str) -> Option<usize>;

/// The rule table. Order is significant.
const RULES: [(TokenKind, Rule); 8] = [
    (TokenKind::LeftParen, left_paren),
    (TokenKind::RightParen, right_paren),
    (TokenKind::BooleanLiteral, true_literal),
    (TokenKind::BooleanLiteral, false_literal),
    (TokenKind::Symbol, symbol),
    (TokenKind::IntLiteral, int_literal),
    (TokenKind::StringLiteral, string_literal),
    (TokenKind::EndOfInput, end_of_input),
];

/// Apply the rule table to `rest`, returning the first match.
pub(crate) fn match_rule(rest: &str) -> Option<(TokenKind, usize)> {
    RULES
        .iter()
        .find_map(|&(kind, rule)| rule(rest).map(|len| (kind, len)))
}

fn literal(rest: &str, text: &str) -> Option<usize> {
    rest.starts_with(text).then_some(text.len())
}

fn left_paren(rest: &str) -> Option<usize> {
    literal(rest, "(")
}

fn right_paren(rest: &str) -> Option<usize> {
    literal(rest, ")")
}

fn true_literal(rest: &str) -> Option<usize> {
    literal(rest, "true")
}

fn false_literal(rest: &str) -> Option<usize> {
    literal(rest, "false")
}

/// An ASCII letter followed by ASCII letters and digits.
fn symbol(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !bytes.first()?.is_ascii_alphabetic() {
        return None;
    }
    let tail = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    Some(1 + tail)
}

/// One or more ASCII digits. Leading zeros are kept in the text.
fn int_literal(rest: &str) -> Option<usize> {
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    (len > 0).then_some(len)
}

/// A double-quoted run with no escapes. The match includes both quotes.
///
/// A string without its closing quote does not match, which leaves the
/// remaining rules (and then the lexer) to give up at the opening quote.
fn string_literal(rest: &str) -> Option<usize> {
    let body = rest.as_bytes().strip_prefix(b"\"")?;
    let close = memchr::memchr(b'"', body)?;
    Some(close + 2)
}

/// Matches only at the very end of the text, with zero length.
fn end_of_input(rest: &str) -> Option<usize> {
    rest.is_empty().then_some(0)
}

#[cfg(test)]
mod tests;
