//! Parse failures: message text and token index.

use super::parse_source;
use crate::{parse, ParseErrorKind};
use pretty_assertions::assert_eq;
use vis_ir::{Token, TokenKind};

/// Parse `source` and return `(message, index)` of the failure.
fn failure(source: &str) -> (String, usize) {
    let error = parse_source(source).unwrap_err();
    (error.message(), error.index())
}

#[test]
fn test_empty_input() {
    assert_eq!(failure(""), ("Unexpected end of input.".into(), 0));
    assert_eq!(failure("  \n"), ("Unexpected end of input.".into(), 0));
}

#[test]
fn test_trailing_token() {
    assert_eq!(failure("abc def"), ("Unexpected token 'def'.".into(), 1));
    assert_eq!(failure("(not x) y"), ("Unexpected token 'y'.".into(), 4));
    assert_eq!(failure("1)"), ("Unexpected token ')'.".into(), 1));
}

#[test]
fn test_close_paren_where_expression_expected() {
    assert_eq!(failure(")"), ("Unexpected token ')'.".into(), 0));
}

#[test]
fn test_unknown_operation() {
    assert_eq!(failure("(foo 1)"), ("Unknown operation 'foo'.".into(), 1));
    assert_eq!(failure("(NOT x)"), ("Unknown operation 'NOT'.".into(), 1));
}

#[test]
fn test_expected_operation_name() {
    assert_eq!(
        failure("(1 2)"),
        ("Expected an operation name; found '1' instead.".into(), 1)
    );
    assert_eq!(
        failure("((not x))"),
        ("Expected an operation name; found '(' instead.".into(), 1)
    );
    assert_eq!(
        failure("(true)"),
        ("Expected an operation name; found 'true' instead.".into(), 1)
    );
    // The end-of-input token has empty text.
    assert_eq!(
        failure("("),
        ("Expected an operation name; found '' instead.".into(), 1)
    );
}

#[test]
fn test_unary_arity() {
    assert_eq!(
        failure("(not true false)"),
        ("Operation 'not' takes one operand; ')' expected.".into(), 3)
    );
    assert_eq!(
        failure("(not true"),
        ("Operation 'not' takes one operand; ')' expected.".into(), 3)
    );
}

#[test]
fn test_binary_arity() {
    assert_eq!(
        failure("(eq 1 2 3)"),
        ("Operation 'eq' takes two operands; ')' expected.".into(), 4)
    );
    assert_eq!(
        failure("(or a b"),
        ("Operation 'or' takes two operands; ')' expected.".into(), 4)
    );
}

#[test]
fn test_missing_operand_is_expression_expected() {
    assert_eq!(failure("(and true)"), ("Expression expected.".into(), 3));
    assert_eq!(failure("(not)"), ("Expression expected.".into(), 2));
    assert_eq!(failure("(gt 1"), ("Expression expected.".into(), 3));
}

#[test]
fn test_inner_failure_is_replaced() {
    // The unknown operation at index 3 surfaces as a failed operand at 2.
    assert_eq!(failure("(not (foo 1))"), ("Expression expected.".into(), 2));
    assert_eq!(
        failure("(and (not x y) z)"),
        ("Expression expected.".into(), 2)
    );
}

#[test]
fn test_lexer_stopped_early() {
    // `$` stops the lexer after `x`, so the list has no terminator.
    assert_eq!(failure("x $"), ("Unexpected end of input.".into(), 1));
    // Inside an S-expression the missing operand is reported instead.
    assert_eq!(failure("(eq x $y)"), ("Expression expected.".into(), 3));
    assert_eq!(
        failure("(eq name \"bob)"),
        ("Expression expected.".into(), 3)
    );
}

#[test]
fn test_integer_out_of_range() {
    let error = parse_source("(gt x 99999999999999999999)").unwrap_err();
    assert_eq!(error.message(), "Expression expected.");

    let error = parse_source("99999999999999999999").unwrap_err();
    assert_eq!(
        error.kind(),
        &ParseErrorKind::IntegerOutOfRange {
            text: "99999999999999999999".into()
        }
    );
    assert_eq!(
        error.to_string(),
        "Integer literal '99999999999999999999' is out of range."
    );
}

#[test]
fn test_malformed_boolean_token() {
    let tokens = [
        Token::new(TokenKind::BooleanLiteral, 0, 0, "yes"),
        Token::new(TokenKind::EndOfInput, 3, 0, ""),
    ];
    let error = parse(&tokens).unwrap_err();
    assert_eq!(error.message(), "Unexpected token 'yes'.");
    assert_eq!(error.index(), 0);
}

#[test]
fn test_empty_token_slice() {
    let error = parse(&[]).unwrap_err();
    assert_eq!(error.kind(), &ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(error.index(), 0);
}
