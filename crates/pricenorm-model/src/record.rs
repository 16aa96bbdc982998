//! The canonical long-form record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names of every canonical output, in order.
pub const CANONICAL_COLUMNS: [&str; 3] = ["Date", "Product", "Value"];

/// One observation of the canonical series.
///
/// Normalizers only ever construct records with a resolved date, a
/// non-empty product and a finite value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

impl CanonicalRecord {
    /// Builds a record, rejecting empty products and non-finite values.
    pub fn new(date: NaiveDate, product: impl Into<String>, value: f64) -> Option<Self> {
        let product = product.into();
        let product = product.trim();
        if product.is_empty() || !value.is_finite() {
            return None;
        }
        Some(Self {
            date,
            product: product.to_string(),
            value,
        })
    }
}

/// Stable ascending sort by date; records sharing a date keep their order.
pub fn sort_by_date(records: &mut [CanonicalRecord]) {
    records.sort_by_key(|record| record.date);
}
