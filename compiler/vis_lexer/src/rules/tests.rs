use super::*;

#[test]
fn test_booleans_win_over_symbols() {
    assert_eq!(match_rule("true"), Some((TokenKind::BooleanLiteral, 4)));
    assert_eq!(match_rule("truex"), Some((TokenKind::BooleanLiteral, 4)));
    assert_eq!(match_rule("falsehood"), Some((TokenKind::BooleanLiteral, 5)));
    assert_eq!(match_rule("tru"), Some((TokenKind::Symbol, 3)));
}

#[test]
fn test_symbol_shape() {
    assert_eq!(symbol("abc1 rest"), Some(4));
    assert_eq!(symbol("a_b"), Some(1));
    assert_eq!(symbol("1abc"), None);
    assert_eq!(symbol("_x"), None);
    assert_eq!(symbol(""), None);
}

#[test]
fn test_int_literal() {
    assert_eq!(int_literal("0123)"), Some(4));
    assert_eq!(int_literal("12ab"), Some(2));
    assert_eq!(int_literal("x"), None);
}

#[test]
fn test_digits_before_letters_split() {
    assert_eq!(match_rule("12ab"), Some((TokenKind::IntLiteral, 2)));
}

#[test]
fn test_string_literal() {
    assert_eq!(string_literal("\"\""), Some(2));
    assert_eq!(string_literal("\"a b\" c"), Some(5));
    assert_eq!(string_literal("\"a\\\"b\""), Some(4));
    assert_eq!(string_literal("\"é\""), Some(4));
}

#[test]
fn test_unterminated_string_does_not_match() {
    assert_eq!(string_literal("\"abc"), None);
    assert_eq!(match_rule("\"abc"), None);
    assert_eq!(match_rule("\""), None);
}

#[test]
fn test_end_of_input_only_at_end() {
    assert_eq!(match_rule(""), Some((TokenKind::EndOfInput, 0)));
    assert_eq!(end_of_input(" "), None);
}

#[test]
fn test_unmatched_characters() {
    for rest in ["$", "_", "-1", "é", "[", "'a'"] {
        assert_eq!(match_rule(rest), None, "expected no rule to match {rest:?}");
    }
}
