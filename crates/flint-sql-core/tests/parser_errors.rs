//! Error reporting tests: lexical failures, furthest-failure selection and
//! positions.

mod common;
use common::*;

use flint_sql_core::lexer::Keyword;
use flint_sql_core::{ParseErrorKind, Span, TokenKind};

// ===================================================================
// Lexical errors
// ===================================================================

#[test]
fn unterminated_string_is_lexical() {
    let err = parse_err("select 'abc");
    assert_eq!(err.kind, ParseErrorKind::Lex);
    assert_eq!(err.span.start, 7);
    assert_eq!(err.message, "Unterminated string literal");
}

#[test]
fn unknown_character_is_lexical() {
    let err = parse_err("select a from t;");
    assert!(err.is_lex());
    assert_eq!(err.span, Span::new(15, 16));

    assert!(parse_err("select # from t").is_lex());
    assert!(parse_err("select a from t where a != 1").is_lex());
}

#[test]
fn integer_overflow_is_lexical() {
    let err = parse_err("select 99999999999999999999 from t");
    assert!(err.is_lex());
    assert_eq!(err.span, Span::new(7, 27));
}

// ===================================================================
// Syntax errors
// ===================================================================

#[test]
fn missing_select_list() {
    let err = parse_err("select from");
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert_eq!(err.span.start, 7);
    assert_eq!(err.expected.as_deref(), Some("value"));
    assert_eq!(err.found, Some(TokenKind::Keyword(Keyword::From)));
}

#[test]
fn unknown_statement_names_every_form() {
    let err = parse_err("drop table t");
    assert_eq!(err.span, Span::new(0, 4));
    assert_eq!(
        err.expected.as_deref(),
        Some("SELECT, INSERT, UPDATE, DELETE or CREATE")
    );
    assert_eq!(err.found, Some(TokenKind::Identifier("drop".into())));
}

#[test]
fn empty_input() {
    let err = parse_err("");
    assert!(err.is_syntax());
    assert_eq!(err.found, Some(TokenKind::Eof));
    assert!(err.message.starts_with("Unexpected end of input"));

    assert!(parse_err("   \n\t").is_syntax());
}

#[test]
fn having_requires_group_by() {
    let err = parse_err("select a from t having a > 1");
    assert_eq!(err.span.start, 16);
    assert_eq!(err.expected.as_deref(), Some("end of input"));
    assert_eq!(err.found, Some(TokenKind::Keyword(Keyword::Having)));
}

#[test]
fn trailing_input() {
    let err = parse_err("select a from t t2");
    assert_eq!(err.span.start, 16);
    assert_eq!(err.found, Some(TokenKind::Identifier("t2".into())));
    assert!(err.message.starts_with("Unexpected trailing input"));
}

#[test]
fn only_one_statement() {
    let _ = parse_err("select a from t select b from u");
    let _ = parse_err("delete from t delete from u");
}

#[test]
fn error_at_end_of_input() {
    let err = parse_err("select a from t where");
    assert_eq!(err.span.start, 21);
    assert_eq!(err.found, Some(TokenKind::Eof));
    assert_eq!(err.message, "Unexpected end of input: expected value");
}

#[test]
fn incomplete_predicate() {
    let err = parse_err("select a from t where a");
    assert_eq!(err.span.start, 23);
    assert_eq!(
        err.expected.as_deref(),
        Some("comparison operator or BETWEEN")
    );

    let err = parse_err("select a from t where a between 1");
    assert_eq!(err.expected.as_deref(), Some("AND"));
}

#[test]
fn furthest_failure_is_reported() {
    let err = parse_err("select count(a, from t");
    assert_eq!(err.span.start, 16);
    assert_eq!(err.expected.as_deref(), Some("value"));
    assert_eq!(err.found, Some(TokenKind::Keyword(Keyword::From)));
}

#[test]
fn failure_inside_later_alternative() {
    let err = parse_err("create index on t using btree (a,)");
    assert_eq!(err.span.start, 33);
    assert_eq!(err.expected.as_deref(), Some("identifier"));
}

#[test]
fn comparisons_do_not_chain() {
    let _ = parse_err("select a from t where a < b < c");
    let _ = parse_err("select a from t where a = 1 = 2");
}

#[test]
fn parentheses_are_not_grouping() {
    let _ = parse_err("select (a + 1) from t");
    let _ = parse_err("select a from t where (a = 1)");
}

// ===================================================================
// Rendering
// ===================================================================

#[test]
fn display_includes_position() {
    let err = parse_err("select from");
    assert_eq!(
        err.to_string(),
        "Unexpected token: expected value, found keyword FROM at position 7..11"
    );
}

#[test]
fn span_resolves_to_line_and_column() {
    let sql = "select a\nfrom t\nwhere";
    let err = parse_err(sql);
    assert_eq!(err.span.line_col(sql), (3, 6));
}
