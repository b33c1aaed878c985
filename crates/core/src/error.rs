//! Error types for the tickbar pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tickbar pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or zero-length aggregation interval. Fatal: propagates to
    /// the caller instead of defaulting.
    #[error("invalid interval format: {0}")]
    InvalidInterval(String),

    /// A source file could not be opened or read. The file contributes no
    /// rows and the run continues.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row's timestamp/price/volume failed to parse. Always recovered
    /// locally: the row is dropped and the occurrence is counted.
    #[error("row parse error: {0}")]
    RowParse(String),

    /// Invocation or configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error (output path and other structural failures).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid-interval error.
    pub fn invalid_interval(msg: impl Into<String>) -> Self {
        Error::InvalidInterval(msg.into())
    }

    /// Create a file-read error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a row-parse error.
    pub fn row_parse(msg: impl Into<String>) -> Self {
        Error::RowParse(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
