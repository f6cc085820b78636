//! SQL Lexer/Tokenizer
//!
//! Turns statement text into keywords, identifiers, integer and string
//! literals, and the fixed operator/punctuation set. Whitespace between
//! tokens is skipped.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
