//! One normalizer per layout family.
//!
//! Every normalizer pushes candidate rows through a [`Collector`], which
//! keeps the resolved ones and counts the rest.

mod date_wide;
mod product_week;
mod two_column;
mod year_quarter;

pub(crate) use date_wide::normalize_date_wide;
pub(crate) use product_week::normalize_product_week;
pub(crate) use two_column::normalize_two_column;
pub(crate) use year_quarter::{YearQuarterOutcome, normalize_year_quarter};

use chrono::NaiveDate;
use pricenorm_model::{CanonicalRecord, sort_by_date};
use tracing::trace;

/// Accumulates records for one dataset.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    pub records: Vec<CanonicalRecord>,
    pub candidates: usize,
    pub dropped: usize,
}

impl Collector {
    /// Offers one candidate row; rows with any unresolved part are dropped.
    pub fn offer(&mut self, date: Option<NaiveDate>, product: &str, value: Option<f64>) {
        self.candidates += 1;
        let record = match (date, value) {
            (Some(date), Some(value)) => CanonicalRecord::new(date, product, value),
            _ => None,
        };
        match record {
            Some(record) => self.records.push(record),
            None => {
                self.dropped += 1;
                trace!(
                    product,
                    date_resolved = date.is_some(),
                    value_resolved = value.is_some(),
                    "dropped unresolved row"
                );
            }
        }
    }

    /// Appends another collector's records and counters.
    pub fn extend(&mut self, other: Collector) {
        self.records.extend(other.records);
        self.candidates += other.candidates;
        self.dropped += other.dropped;
    }

    /// Sorts the records by date, keeping input order for equal dates.
    pub fn into_sorted(mut self) -> Self {
        sort_by_date(&mut self.records);
        self
    }
}
