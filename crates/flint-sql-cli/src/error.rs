//! Error types for the command-line tool.

/// Errors that can occur while checking SQL input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// IO error (reading the input file or stdin, writing output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more statements were rejected; diagnostics were already
    /// written.
    #[error("{failed} of {total} statement(s) failed to parse")]
    Parse {
        /// Number of rejected statements.
        failed: usize,
        /// Number of statements checked.
        total: usize,
    },

    /// Failed to serialize a statement as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
