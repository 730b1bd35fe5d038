//! Errors the driver reports before or instead of lexing.

use sv_lexer_core::SourceBufferError;
use thiserror::Error;

/// A driver failure. Lexical problems are diagnostics, not errors.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Buffer(#[from] SourceBufferError),

    #[error("unknown keyword version '{0}' (expected e.g. 1364-2005 or 1800-2017)")]
    UnknownKeywordVersion(String),

    #[error("invalid value for --max-errors: '{0}'")]
    InvalidMaxErrors(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("missing file path")]
    MissingPath,
}

impl DriverError {
    /// Classify an I/O error from reading `path`.
    pub(crate) fn from_io(path: &str, error: std::io::Error) -> Self {
        let path = path.to_owned();
        match error.kind() {
            std::io::ErrorKind::NotFound => DriverError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            _ => DriverError::Io {
                path,
                source: error,
            },
        }
    }
}
