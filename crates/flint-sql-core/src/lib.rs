//! # flint-sql-core
//!
//! A parser for a compact SQL dialect that produces a typed AST.
//!
//! This crate provides:
//! - A hand-written lexer with byte spans on every token
//! - A recursive descent parser with ordered alternatives and backtracking,
//!   using precedence climbing for operators
//! - A closed AST whose `Display` output re-parses to an equal tree
//!
//! ## Parsing
//!
//! ```rust
//! use flint_sql_core::ast::{Expr, Statement};
//!
//! let stmt = flint_sql_core::parse("select * from t where x between 1 and 10").unwrap();
//! let Statement::Select(select) = stmt else { unreachable!() };
//! assert_eq!(
//!     select.where_clause,
//!     Some(Expr::ident("x").between(Expr::integer(1), Expr::integer(10)))
//! );
//! ```
//!
//! ## Operator precedence
//!
//! `*` and `/` bind tighter than `+` and `-`, which bind tighter than the
//! comparisons. `AND` and `OR` share a single level and group left to
//! right, so `a = 1 AND b = 2 OR c = 3` is `(a = 1 AND b = 2) OR c = 3`.
//!
//! ## Errors
//!
//! Failures are reported as a [`ParseError`] carrying a byte span:
//!
//! ```rust
//! let err = flint_sql_core::parse("select 'abc").unwrap_err();
//! assert!(err.is_lex());
//!
//! let err = flint_sql_core::parse("select from t").unwrap_err();
//! assert!(err.is_syntax());
//! assert_eq!(err.span.start, 7);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Statement};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{ParseError, ParseErrorKind, Parser};

/// Parses one complete statement.
///
/// # Errors
///
/// Returns a lexical `ParseError` if the text cannot be tokenized, or a
/// syntax `ParseError` if the tokens do not form exactly one statement.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
    Parser::new(sql)?.parse_statement()
}
