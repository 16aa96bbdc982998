//! Layout detection and normalization for commodity price tables.
//!
//! A [`RawTable`](pricenorm_model::RawTable) is classified into one of four
//! structural families and reshaped into a long-form series of
//! [`CanonicalRecord`](pricenorm_model::CanonicalRecord)s.
//!
//! # Overview
//!
//! - **Classification**: [`classify`] decides the [`LayoutKind`](pricenorm_model::LayoutKind)
//!   from the header row and column count
//! - **Normalization**: [`normalize_table`] runs the matching normalizer
//! - **Cell parsing**: [`normalization`] holds the locale date parser, the
//!   ISO-week resolver and the numeric cleaners
//!
//! # Example
//!
//! ```ignore
//! use pricenorm_transform::{NormalizeOptions, normalize_table};
//!
//! let table = pricenorm_ingest::read_raw_table(path)?;
//! let normalized = normalize_table(&table, &NormalizeOptions::default())?;
//! for record in &normalized.records {
//!     println!("{} {} {}", record.date, record.product, record.value);
//! }
//! ```
//!
//! Per-cell failures never surface as errors: rows with an unresolvable
//! date or value are dropped and counted. Only file-level problems produce
//! a [`NormalizeError`].

mod error;
mod layout;
mod layouts;
mod normalize;
mod options;

pub mod normalization;

pub use error::{NormalizeError, Result};
pub use layout::{
    CANONICAL_HEADERS, DATE_KEYWORD, PRODUCT_KEYWORD, WEEK_KEYWORD, classify, classify_headers,
    is_canonical_shape,
};
pub use normalize::{NormalizedTable, normalize_table};
pub use options::{DateTokenMode, HeaderMatch, NormalizeOptions};
