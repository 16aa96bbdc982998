//! Structural layout families recognized by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The structural family of a raw input table.
///
/// Decided once per file; every file is normalized by exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    /// A date column plus one column per product.
    DateWide,
    /// A product column plus one column per ISO week (`KW <week>/<year>`).
    ProductByWeek,
    /// Exactly two columns: date and a single value series.
    TwoColumnSeries,
    /// One or more titled year-by-quarter blocks stacked vertically.
    MultiBlockYearQuarter,
}

impl LayoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateWide => "date-wide",
            Self::ProductByWeek => "product-by-week",
            Self::TwoColumnSeries => "two-column",
            Self::MultiBlockYearQuarter => "year-quarter",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
