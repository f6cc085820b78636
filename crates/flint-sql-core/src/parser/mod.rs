//! SQL Parser
//!
//! A recursive descent parser over a fully tokenized input. Rules that
//! share a prefix are tried as ordered alternatives with cursor rollback,
//! and binary operators are handled by precedence climbing.

mod error;
mod parser;
mod pratt;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
