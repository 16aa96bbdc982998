//! Raw table ingestion for commodity price sources.
//!
//! This crate turns the files of an input folder into [`RawTable`]s without
//! interpreting any row as a header. Layout detection happens downstream.
//!
//! # Features
//!
//! - **Discovery**: list `.csv`, `.xls` and `.xlsx` files, skipping anything else
//! - **CSV Loading**: delimiter sniffing, UTF-8 with Windows-1252 fallback
//! - **Workbook Loading**: first worksheet of XLS/XLSX files via calamine
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pricenorm_ingest::{list_input_files, read_raw_table};
//!
//! for path in list_input_files(Path::new("data"))? {
//!     let table = read_raw_table(&path)?;
//!     println!("{}: {} rows", table.base_name, table.rows.len());
//! }
//! ```

mod delimited;
mod discovery;
mod error;
mod workbook;

use std::path::Path;

use pricenorm_model::RawTable;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use delimited::{read_csv_raw, sniff_delimiter};

// === File Discovery ===
pub use discovery::{InputFormat, list_input_files};

// === Workbook Reading ===
pub use workbook::read_workbook_raw;

/// Reads any supported input file into a [`RawTable`].
///
/// The reader is chosen from the file extension.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    match InputFormat::from_path(path) {
        Some(InputFormat::Csv) => read_csv_raw(path),
        Some(InputFormat::Xls | InputFormat::Xlsx) => read_workbook_raw(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
