//! Reading canonical files back as per-product series.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use pricenorm_model::{CANONICAL_COLUMNS, CanonicalRecord, sort_by_date};
use tracing::{debug, trace};

use crate::error::{OutputError, Result};
use crate::writer::DATE_FORMAT;

/// One product's observations, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSeries {
    pub product: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl ProductSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Smallest and largest value, or `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.iter().fold(None, |range, &value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
    }
}

/// Reads a `Date,Product,Value` file into records sorted by date.
///
/// Every column is read as text. Rows whose date or value does not parse are
/// skipped.
pub fn read_canonical(path: &Path) -> Result<Vec<CanonicalRecord>> {
    let df = load_frame(path)?;
    let column = |name: &'static str| {
        df.column(name)
            .and_then(|column| column.str().cloned())
            .map_err(|_| OutputError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let [date_name, product_name, value_name] = CANONICAL_COLUMNS;
    let dates = column(date_name)?;
    let products = column(product_name)?;
    let values = column(value_name)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for ((date, product), value) in dates.iter().zip(products.iter()).zip(values.iter()) {
        let date = date.and_then(|text| NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok());
        let value = value.and_then(|text| text.trim().parse::<f64>().ok());
        let record = match (date, product, value) {
            (Some(date), Some(product), Some(value)) => CanonicalRecord::new(date, product, value),
            _ => None,
        };
        match record {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                trace!(path = %path.display(), "skipped unparseable canonical row");
            }
        }
    }
    sort_by_date(&mut records);
    debug!(
        path = %path.display(),
        records = records.len(),
        skipped,
        "read canonical series"
    );
    Ok(records)
}

/// Groups records by product; series come back ordered by product name.
pub fn split_by_product(records: &[CanonicalRecord]) -> Vec<ProductSeries> {
    let mut grouped: BTreeMap<&str, Vec<&CanonicalRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.product.as_str()).or_default().push(record);
    }
    grouped
        .into_iter()
        .map(|(product, mut group)| {
            group.sort_by_key(|record| record.date);
            ProductSeries {
                product: product.to_string(),
                dates: group.iter().map(|record| record.date).collect(),
                values: group.iter().map(|record| record.value).collect(),
            }
        })
        .collect()
}

/// [`read_canonical`] followed by [`split_by_product`].
pub fn read_product_series(path: &Path) -> Result<Vec<ProductSeries>> {
    let records = read_canonical(path)?;
    Ok(split_by_product(&records))
}

fn load_frame(path: &Path) -> Result<DataFrame> {
    let read_err = |message: String| OutputError::Read {
        path: path.to_path_buf(),
        message,
    };
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| read_err(e.to_string()))?
        .finish()
        .map_err(|e| read_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, product: &str, value: f64) -> CanonicalRecord {
        let date = NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
        CanonicalRecord::new(date, product, value).unwrap()
    }

    #[test]
    fn test_split_groups_and_orders() {
        let records = vec![
            record(3, "PVC", 3.0),
            record(1, "PE", 1.0),
            record(2, "PVC", 2.0),
        ];
        let series = split_by_product(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].product, "PE");
        assert_eq!(series[1].product, "PVC");
        assert_eq!(series[1].values, vec![2.0, 3.0]);
        assert_eq!(series[1].value_range(), Some((2.0, 3.0)));
        assert_eq!(series[1].first_date(), NaiveDate::from_ymd_opt(2021, 1, 2));
    }

    #[test]
    fn test_empty_series_has_no_range() {
        let series = ProductSeries {
            product: "x".to_string(),
            dates: Vec::new(),
            values: Vec::new(),
        };
        assert!(series.is_empty());
        assert_eq!(series.value_range(), None);
        assert_eq!(series.last_date(), None);
    }
}
