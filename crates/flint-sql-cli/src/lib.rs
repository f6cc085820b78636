//! # flint-sql-cli
//!
//! Checks SQL text against the flint-sql dialect and prints the parsed
//! statement, its canonical SQL, a JSON tree or the raw token stream.

pub mod error;
pub mod input;
pub mod render;

use std::io::Write;

use flint_sql_core::Lexer;
use tracing::{debug, info};

use crate::error::{CliError, Result};
use crate::input::{split_statements, Chunk, Source};
use crate::render::{render_diagnostic, render_statement, render_tokens, OutputFormat};

/// Settings for one run of the tool.
#[derive(Debug, Clone)]
pub struct Options {
    /// Where to read SQL from.
    pub source: Source,
    /// Output format for parsed statements.
    pub format: OutputFormat,
    /// Print tokens instead of parsing.
    pub tokens: bool,
    /// Treat every non-blank line as its own statement.
    pub each_line: bool,
}

/// Reads the input and checks every statement in it.
///
/// Results go to `out` and diagnostics to `diag`. Every statement is
/// checked even after a failure.
///
/// # Errors
///
/// Returns [`CliError::Parse`] if any statement was rejected, or an IO or
/// JSON error if reading or writing fails.
pub fn run(options: &Options, out: &mut impl Write, diag: &mut impl Write) -> Result<()> {
    let text = options.source.read()?;
    let chunks = split_statements(&text, options.each_line);

    let mut failed = 0;
    for chunk in &chunks {
        debug!(line = chunk.line, "checking statement");
        let ok = if options.tokens {
            check_tokens(chunk, out, diag)?
        } else {
            check_statement(chunk, options.format, out, diag)?
        };
        if !ok {
            failed += 1;
        }
    }

    let total = chunks.len();
    if options.each_line {
        info!(total, failed, "checked statements");
    }
    if failed > 0 {
        return Err(CliError::Parse { failed, total });
    }
    Ok(())
}

fn check_statement(
    chunk: &Chunk<'_>,
    format: OutputFormat,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<bool> {
    match flint_sql_core::parse(chunk.text) {
        Ok(stmt) => {
            writeln!(out, "{}", render_statement(&stmt, format)?)?;
            Ok(true)
        }
        Err(err) => {
            write!(diag, "{}", render_diagnostic(chunk.text, chunk.line, &err))?;
            Ok(false)
        }
    }
}

fn check_tokens(chunk: &Chunk<'_>, out: &mut impl Write, diag: &mut impl Write) -> Result<bool> {
    write!(out, "{}", render_tokens(chunk.text))?;
    match Lexer::new(chunk.text).tokenize() {
        Ok(_) => Ok(true),
        Err(err) => {
            write!(diag, "{}", render_diagnostic(chunk.text, chunk.line, &err))?;
            Ok(false)
        }
    }
}
