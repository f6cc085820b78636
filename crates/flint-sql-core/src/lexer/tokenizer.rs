//! Scanner for the dialect's source text.

use tracing::trace;

use super::{Keyword, Span, Token, TokenKind};
use crate::parser::ParseError;

/// Splits statement text into [`Token`]s carrying byte spans.
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Byte offset where the token being scanned began.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Starts scanning at the beginning of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Looks at the next unread character.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Looks one character past `peek`.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Consumes `next` if it is the current character.
    fn eat(&mut self, next: char) -> bool {
        if self.peek() == Some(next) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Scans a word; reserved words become keywords.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans an unsigned integer literal.
    fn scan_integer(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match text.parse::<i64>() {
            Ok(n) => self.make_token(TokenKind::Integer(n)),
            Err(e) => self.make_token(TokenKind::Error(format!("Invalid integer {text}: {e}"))),
        }
    }

    /// Scans a single-quoted string literal.
    ///
    /// The token keeps the raw text between the quotes; doubled quotes are
    /// collapsed when the parser builds the literal.
    fn scan_string(&mut self) -> Token {
        self.advance();
        let content_start = self.pos;

        loop {
            match self.peek() {
                Some('\'') => {
                    if self.peek_next() == Some('\'') {
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "Unterminated string literal",
                    )));
                }
            }
        }

        let content = String::from(&self.input[content_start..self.pos]);
        self.advance();
        self.make_token(TokenKind::String(content))
    }

    /// Produces the token starting at the cursor.
    ///
    /// Unclassifiable input produces a [`TokenKind::Error`] token; scanning
    /// may continue after it.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '=' => self.make_token(TokenKind::Eq),
            '<' => {
                if self.eat('=') {
                    self.make_token(TokenKind::LtEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.eat('=') {
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }

            '\'' => {
                self.pos = self.start;
                self.scan_string()
            }

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_integer()
            }

            c if c.is_ascii_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => self.make_token(TokenKind::Error(format!("Unexpected character: {c}"))),
        }
    }

    /// Tokenizes the entire input, ending with an `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns a lexical [`ParseError`] for the first unclassifiable
    /// character sequence (unknown character, unterminated string, integer
    /// out of range).
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if let TokenKind::Error(message) = token.kind {
                return Err(ParseError::lex(message, token.span));
            }
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        trace!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}
