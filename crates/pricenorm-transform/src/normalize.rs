//! Entry point: classify a raw table and run the matching normalizer.

use std::collections::BTreeSet;

use pricenorm_model::{CanonicalRecord, LayoutKind, RawTable};
use tracing::debug;

use crate::error::{NormalizeError, Result};
use crate::layout::classify;
use crate::layouts::{
    Collector, YearQuarterOutcome, normalize_date_wide, normalize_product_week,
    normalize_two_column, normalize_year_quarter,
};
use crate::options::NormalizeOptions;

/// One table normalized into canonical records, sorted by date.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub layout: LayoutKind,
    pub records: Vec<CanonicalRecord>,
    /// Candidate (date, product, value) rows considered.
    pub candidates: usize,
    /// Candidates dropped for an unresolved date, product or value.
    pub dropped: usize,
    /// Year/quarter blocks found; zero for other layouts.
    pub blocks: usize,
    /// Whether the year/quarter reader fell back to a single table.
    pub used_fallback: bool,
}

impl NormalizedTable {
    fn from_collector(layout: LayoutKind, collector: Collector) -> Self {
        Self {
            layout,
            records: collector.records,
            candidates: collector.candidates,
            dropped: collector.dropped,
            blocks: 0,
            used_fallback: false,
        }
    }

    /// Distinct product names, sorted.
    pub fn products(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.product.as_str())
            .collect()
    }
}

/// Classifies `table` and reshapes it into the canonical long form.
///
/// Unresolvable cells are dropped and counted, never reported as errors.
pub fn normalize_table(table: &RawTable, options: &NormalizeOptions) -> Result<NormalizedTable> {
    if table.is_empty() {
        return Err(NormalizeError::EmptyTable {
            file: table.source.clone(),
        });
    }
    let layout = classify(table, options.header_match)?;
    debug!(%layout, headers = ?table.header_names(), "classified table");

    let normalized = match layout {
        LayoutKind::TwoColumnSeries => {
            NormalizedTable::from_collector(layout, normalize_two_column(table))
        }
        LayoutKind::ProductByWeek => {
            NormalizedTable::from_collector(layout, normalize_product_week(table)?)
        }
        LayoutKind::DateWide => {
            NormalizedTable::from_collector(layout, normalize_date_wide(table, options)?)
        }
        LayoutKind::MultiBlockYearQuarter => {
            let YearQuarterOutcome {
                collector,
                blocks,
                used_fallback,
            } = normalize_year_quarter(table)?;
            NormalizedTable {
                blocks,
                used_fallback,
                ..NormalizedTable::from_collector(layout, collector)
            }
        }
    };
    debug!(
        records = normalized.records.len(),
        dropped = normalized.dropped,
        "normalized table"
    );
    Ok(normalized)
}
