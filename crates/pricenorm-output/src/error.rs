//! Error types for canonical output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing or reading canonical series files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A canonical CSV could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Buffered output could not be flushed to disk.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A canonical CSV could not be read.
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// A canonical CSV lacks one of `Date`, `Product`, `Value`.
    #[error("{path} is not a canonical series: missing {column} column")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
