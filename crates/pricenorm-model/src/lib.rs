//! Data model shared by the price normalization crates.
//!
//! - [`Cell`] / [`RawTable`]: the uninterpreted grid read from a source file
//! - [`LayoutKind`]: the structural family a file was classified into
//! - [`CanonicalRecord`]: one `(Date, Product, Value)` row of the canonical series

pub mod cell;
pub mod layout;
pub mod record;
pub mod table;

pub use cell::Cell;
pub use layout::LayoutKind;
pub use record::{CANONICAL_COLUMNS, CanonicalRecord, sort_by_date};
pub use table::{RawTable, row_is_blank, trim_trailing_empty};
