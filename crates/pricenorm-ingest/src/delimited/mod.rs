//! Delimited text loading.

mod reader;
mod sniff;

pub use reader::read_csv_raw;
pub use sniff::sniff_delimiter;
