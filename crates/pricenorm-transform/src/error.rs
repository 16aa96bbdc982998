//! File-level normalization errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised for a whole file; per-cell failures never reach this type.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The table holds no non-blank row to use as a header.
    #[error("no header row found in {file}")]
    EmptyTable { file: PathBuf },

    /// The file matches none of the layout families, even after fallback.
    #[error("unrecognized layout in file {file}: {reason}")]
    UnrecognizedLayout { file: PathBuf, reason: String },

    /// A multi-block file yielded no usable year/quarter block.
    #[error("no year/quarter blocks found in {file}")]
    MalformedBlock { file: PathBuf },

    /// A column required by the detected layout is missing.
    #[error("{file}: missing {column} column")]
    MissingColumn { file: PathBuf, column: &'static str },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
