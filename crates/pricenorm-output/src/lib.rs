//! Canonical series output.
//!
//! - **Writing**: [`write_canonical`] persists one dataset as
//!   `<base>_normalized.csv` with the header `Date,Product,Value`
//! - **Reading back**: [`read_product_series`] loads a canonical file and
//!   splits it into one [`ProductSeries`] per product, the shape the
//!   downstream scalogram, MRA and forecasting tools consume
//! - **Naming**: [`sanitize_filename`] makes product names safe to use in
//!   per-product artifact file names

mod error;
mod naming;
mod series;
mod writer;

pub use error::{OutputError, Result};
pub use naming::{NORMALIZED_SUFFIX, output_path_for, sanitize_filename};
pub use series::{ProductSeries, read_canonical, read_product_series, split_by_product};
pub use writer::{DATE_FORMAT, ensure_output_dir, write_canonical};
