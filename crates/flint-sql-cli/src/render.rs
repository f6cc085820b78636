//! Output formatting: statements, token dumps and error diagnostics.

use std::fmt::Write as _;

use clap::ValueEnum;
use flint_sql_core::{Lexer, ParseError, Statement};

use crate::error::Result;

/// How parsed statements are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust debug tree of the AST.
    Pretty,
    /// Canonical SQL.
    Sql,
    /// JSON.
    Json,
}

/// Renders a parsed statement in the given format.
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn render_statement(stmt: &Statement, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Pretty => format!("{stmt:#?}"),
        OutputFormat::Sql => stmt.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(stmt)?,
    };
    Ok(text)
}

/// Lists every token of `sql` with its byte span, one per line.
///
/// Unclassifiable input shows up as an error entry and scanning carries on.
#[must_use]
pub fn render_tokens(sql: &str) -> String {
    let mut lexer = Lexer::new(sql);
    let mut out = String::new();
    loop {
        let token = lexer.next_token();
        let span = format!("{}..{}", token.span.start, token.span.end);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{span:<10} {}", token.kind);
        if token.is_eof() {
            break;
        }
    }
    out
}

/// Formats a parse error with the offending source line and a caret
/// under the failing span.
///
/// `first_line` is the line of `source` within the whole input, so that
/// batch diagnostics point at the right place.
#[must_use]
pub fn render_diagnostic(source: &str, first_line: usize, err: &ParseError) -> String {
    let (line, col) = err.span.line_col(source);
    let text = source.lines().nth(line - 1).unwrap_or("");
    let width = source
        .get(err.span.start..err.span.end)
        .and_then(|s| s.lines().next())
        .map_or(0, |s| s.chars().count())
        .max(1);

    let number = (first_line + line - 1).to_string();
    let gutter = " ".repeat(number.len());
    let kind = if err.is_lex() { "lex error" } else { "error" };

    let mut out = String::new();
    let _ = writeln!(out, "{kind}: {}", err.message);
    let _ = writeln!(out, "{gutter}--> {number}:{col}");
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{number} | {text}");
    let _ = writeln!(
        out,
        "{gutter} | {}{}",
        " ".repeat(col - 1),
        "^".repeat(width)
    );
    out
}
