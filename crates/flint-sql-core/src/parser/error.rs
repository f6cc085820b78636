//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// Which stage of parsing rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The text could not be split into tokens.
    Lex,
    /// The tokens did not form a statement of the dialect.
    Syntax,
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// Lexical or syntactic failure.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a lexical error.
    #[must_use]
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Lex,
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates a syntax error with a free-form message.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        if found == TokenKind::Eof {
            return Self::unexpected_eof(expected, span);
        }
        let expected_str: String = expected.into();
        Self {
            kind: ParseErrorKind::Syntax,
            message: format!("Unexpected token: expected {expected_str}, found {found}"),
            span,
            expected: Some(expected_str),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected_str: String = expected.into();
        Self {
            kind: ParseErrorKind::Syntax,
            message: format!("Unexpected end of input: expected {expected_str}"),
            span,
            expected: Some(expected_str),
            found: Some(TokenKind::Eof),
        }
    }

    /// Creates an error for input left over after a complete statement.
    #[must_use]
    pub fn trailing(found: TokenKind, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            message: format!("Unexpected trailing input starting with {found}"),
            span,
            expected: Some(String::from("end of input")),
            found: Some(found),
        }
    }

    /// Returns true if the input could not be tokenized.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lex)
    }

    /// Returns true if the tokens did not match the grammar.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax)
    }
}
