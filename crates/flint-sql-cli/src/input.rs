//! Reading SQL text and splitting it into statements.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;

/// Where the SQL text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text given on the command line.
    Inline(String),
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl Source {
    /// Reads the whole source into a string.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            Self::Inline(sql) => sql.clone(),
            Self::File(path) => {
                debug!(path = %path.display(), "reading SQL file");
                std::fs::read_to_string(path)?
            }
            Self::Stdin => read_all(std::io::stdin().lock())?,
        };
        Ok(text)
    }
}

/// Reads everything from `reader`.
///
/// # Errors
///
/// Returns an IO error if reading fails or the input is not UTF-8.
pub fn read_all(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// A statement to check, with the 1-based line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Line number of the first character.
    pub line: usize,
    /// The statement text.
    pub text: &'a str,
}

/// Splits input into statements.
///
/// With `each_line`, every non-blank line is its own statement. Otherwise
/// the whole text is one statement.
#[must_use]
pub fn split_statements(text: &str, each_line: bool) -> Vec<Chunk<'_>> {
    if !each_line {
        return vec![Chunk { line: 1, text }];
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Chunk {
            line: i + 1,
            text: line,
        })
        .collect()
}
