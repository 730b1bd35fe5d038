//! Command handlers for the `svlex` CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

mod explain;
mod keywords;
mod lex;

pub use explain::explain_code;
pub use keywords::{keyword_listing, list_keywords};
pub use lex::{lex_file, lex_source, parse_lex_options, LexConfig, LexReport};

use crate::DriverError;

/// Read a source file as raw bytes, classifying the common failures.
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, DriverError> {
    std::fs::read(path).map_err(|e| DriverError::from_io(path, e))
}
