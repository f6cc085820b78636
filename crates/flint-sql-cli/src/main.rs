//! flint-sql CLI
//!
//! Command-line tool for checking and formatting flint-sql statements.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use flint_sql_cli::error::CliError;
use flint_sql_cli::input::Source;
use flint_sql_cli::render::OutputFormat;
use flint_sql_cli::{run, Options};

/// Parse and pretty-print statements of the flint-sql dialect.
#[derive(Parser)]
#[command(name = "flint-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL text to parse (reads --file or stdin when omitted).
    sql: Option<String>,

    /// Read SQL from a file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// Output format for parsed statements.
    #[arg(long, value_enum, env = "FLINT_SQL_FORMAT", default_value = "sql")]
    format: OutputFormat,

    /// Print the token stream instead of the parsed statement.
    #[arg(long)]
    tokens: bool,

    /// Treat every non-blank input line as a separate statement.
    #[arg(long)]
    each_line: bool,

    /// Enable verbose output (repeat for trace output).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(self) -> Options {
        let source = match (self.sql, self.file) {
            (Some(sql), _) => Source::Inline(sql),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        };
        Options {
            source,
            format: self.format,
            tokens: self.tokens,
            each_line: self.each_line,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = cli.options();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    match run(&options, &mut stdout, &mut stderr) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err @ CliError::Parse { .. }) => {
            error!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
