//! Product rows by ISO-week columns.

use chrono::NaiveDate;
use pricenorm_model::{RawTable, row_is_blank};

use super::Collector;
use crate::error::{NormalizeError, Result};
use crate::layout::{PRODUCT_KEYWORD, WEEK_KEYWORD, find_column};
use crate::normalization::{clean_numeric, parse_iso_week};

/// Melts the week columns into one record per (product, week).
///
/// Week labels like `KW 2/2018` resolve to the Monday of that ISO week; a
/// column whose label does not resolve drops every row under it.
pub(crate) fn normalize_product_week(table: &RawTable) -> Result<Collector> {
    let headers = table.header_names();
    let product_idx =
        find_column(&headers, PRODUCT_KEYWORD).ok_or_else(|| NormalizeError::MissingColumn {
            file: table.source.clone(),
            column: PRODUCT_KEYWORD,
        })?;
    let weeks: Vec<(usize, Option<NaiveDate>)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| *idx != product_idx && name.to_lowercase().contains(WEEK_KEYWORD))
        .map(|(idx, name)| (idx, parse_iso_week(name)))
        .collect();

    let mut collector = Collector::default();
    for row in table.data_rows() {
        if row_is_blank(row) {
            continue;
        }
        let product = RawTable::cell(row, product_idx).to_text();
        for (idx, date) in &weeks {
            collector.offer(*date, &product, clean_numeric(RawTable::cell(row, *idx)));
        }
    }
    Ok(collector.into_sorted())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_melts_week_columns() {
        let table = RawTable::from_rows(
            "weekly.csv",
            vec![
                vec!["Product", "KW 2/2018", "KW 1/2018", "Note"],
                vec!["PVC", "1.234,5", "1.200", "x"],
                vec!["", "5", "6", ""],
                vec!["PE", "-", "7,5", ""],
            ],
        );
        let collector = normalize_product_week(&table).expect("week table");
        assert_eq!(collector.candidates, 6);
        // Empty product (2) and unparseable value (1).
        assert_eq!(collector.dropped, 3);
        let got: Vec<(NaiveDate, &str, f64)> = collector
            .records
            .iter()
            .map(|r| (r.date, r.product.as_str(), r.value))
            .collect();
        assert_eq!(
            got,
            vec![
                (ymd(2018, 1, 1), "PVC", 1200.0),
                (ymd(2018, 1, 1), "PE", 7.5),
                (ymd(2018, 1, 8), "PVC", 1234.5),
            ]
        );
    }

    #[test]
    fn test_bad_week_label_drops_column() {
        let table = RawTable::from_rows(
            "weekly.csv",
            vec![vec!["Product", "KW 60/2018", "KW 3/2018"], vec!["PVC", "1", "2"]],
        );
        let collector = normalize_product_week(&table).expect("week table");
        assert_eq!(collector.records.len(), 1);
        assert_eq!(collector.records[0].date, ymd(2018, 1, 15));
    }
}
