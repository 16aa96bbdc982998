//! Two-column series: a date column and a value column, one product.

use pricenorm_model::{RawTable, row_is_blank};

use super::Collector;
use crate::normalization::{clean_numeric_light, parse_date_cell};
use crate::options::DateTokenMode;

/// Reads column 0 as the date and column 1 as the value.
///
/// The product is the file's base name. Dates always use the full cell and
/// values the light cleaner, so `.` stays a decimal point.
pub(crate) fn normalize_two_column(table: &RawTable) -> Collector {
    let mut collector = Collector::default();
    for row in table.data_rows() {
        if row_is_blank(row) {
            continue;
        }
        let date = parse_date_cell(RawTable::cell(row, 0), DateTokenMode::Full);
        let value = clean_numeric_light(RawTable::cell(row, 1));
        collector.offer(date, &table.base_name, value);
    }
    collector.into_sorted()
}
