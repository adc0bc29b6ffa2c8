//! Error types for the command-line driver.

use std::path::PathBuf;

use sql_ra_core::{DocumentError, ParseError};

/// Errors that can occur while compiling one input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// The query was rejected by the parser.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input document was invalid, or output could not be serialized.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Document(DocumentError::Json(err))
    }
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, CliError>;
