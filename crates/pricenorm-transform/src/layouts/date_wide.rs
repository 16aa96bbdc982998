//! Date-indexed wide tables, plus the already-canonical long form.

use pricenorm_model::{RawTable, row_is_blank};
use tracing::debug;

use super::Collector;
use crate::error::{NormalizeError, Result};
use crate::layout::{DATE_KEYWORD, find_column, is_canonical_shape};
use crate::normalization::{clean_numeric, clean_numeric_light, parse_date_cell};
use crate::options::{DateTokenMode, HeaderMatch, NormalizeOptions};

/// Unpivots every named non-date column into `(date, header, value)`.
///
/// Under [`HeaderMatch::Exact`] a `Date,Product,Value` table is read
/// long-form instead.
pub(crate) fn normalize_date_wide(table: &RawTable, options: &NormalizeOptions) -> Result<Collector> {
    let headers = table.header_names();
    if options.header_match == HeaderMatch::Exact && is_canonical_shape(&headers) {
        debug!("reading canonical long-form table");
        return read_long_form(table, &headers);
    }

    let date_idx = find_column(&headers, DATE_KEYWORD).ok_or_else(|| missing(table, DATE_KEYWORD))?;
    let value_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| *idx != date_idx && !name.is_empty())
        .map(|(idx, name)| (idx, name.as_str()))
        .collect();

    let mut collector = Collector::default();
    for row in table.data_rows() {
        if row_is_blank(row) {
            continue;
        }
        let date = parse_date_cell(RawTable::cell(row, date_idx), options.wide_date_tokens);
        for (idx, product) in &value_columns {
            collector.offer(date, product, clean_numeric(RawTable::cell(row, *idx)));
        }
    }
    Ok(collector.into_sorted())
}

fn read_long_form(table: &RawTable, headers: &[String]) -> Result<Collector> {
    let position = |name: &'static str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
            .ok_or_else(|| missing(table, name))
    };
    let date_idx = position("date")?;
    let product_idx = position("product")?;
    let value_idx = position("value")?;

    let mut collector = Collector::default();
    for row in table.data_rows() {
        if row_is_blank(row) {
            continue;
        }
        let date = parse_date_cell(RawTable::cell(row, date_idx), DateTokenMode::Full);
        let product = RawTable::cell(row, product_idx).to_text();
        let value = clean_numeric_light(RawTable::cell(row, value_idx));
        collector.offer(date, &product, value);
    }
    Ok(collector.into_sorted())
}

fn missing(table: &RawTable, column: &'static str) -> NormalizeError {
    NormalizeError::MissingColumn {
        file: table.source.clone(),
        column,
    }
}
