//! Layout classification from a table's header row.

use pricenorm_model::{LayoutKind, RawTable};

use crate::error::{NormalizeError, Result};
use crate::options::HeaderMatch;

/// Header substring marking the product column of week tables.
pub const PRODUCT_KEYWORD: &str = "product";
/// Header substring marking ISO-week columns.
pub const WEEK_KEYWORD: &str = "kw";
/// Header substring marking the date column of wide tables.
pub const DATE_KEYWORD: &str = "date";
/// Header set of an already-canonical file (compared lowercased).
pub const CANONICAL_HEADERS: [&str; 3] = ["date", "product", "value"];

/// Classifies a raw table from its header row.
///
/// The header is the first non-blank row with trailing empty cells removed;
/// its length is the column count.
pub fn classify(table: &RawTable, header_match: HeaderMatch) -> Result<LayoutKind> {
    let headers = table.header_names();
    if headers.is_empty() {
        return Err(NormalizeError::EmptyTable {
            file: table.source.clone(),
        });
    }
    Ok(classify_headers(&headers, header_match))
}

/// Decision list over header names; the first matching rule wins.
///
/// 1. exactly two columns: [`LayoutKind::TwoColumnSeries`]
/// 2. a `product` column and another `kw` column: [`LayoutKind::ProductByWeek`]
/// 3. a `date` column: [`LayoutKind::DateWide`]
/// 4. anything else: [`LayoutKind::MultiBlockYearQuarter`]
///
/// Under [`HeaderMatch::Exact`] a canonical header set short-circuits to
/// [`LayoutKind::DateWide`], whose normalizer then reads it long-form.
pub fn classify_headers<S: AsRef<str>>(headers: &[S], header_match: HeaderMatch) -> LayoutKind {
    let lowered: Vec<String> = headers
        .iter()
        .map(|header| header.as_ref().trim().to_lowercase())
        .collect();

    if header_match == HeaderMatch::Exact && is_canonical_shape(&lowered) {
        return LayoutKind::DateWide;
    }

    if lowered.len() == 2 {
        return LayoutKind::TwoColumnSeries;
    }

    if let Some(product_idx) = find_column(&lowered, PRODUCT_KEYWORD) {
        let has_week = lowered
            .iter()
            .enumerate()
            .any(|(idx, name)| idx != product_idx && name.contains(WEEK_KEYWORD));
        if has_week {
            return LayoutKind::ProductByWeek;
        }
    }

    if find_column(&lowered, DATE_KEYWORD).is_some() {
        return LayoutKind::DateWide;
    }

    LayoutKind::MultiBlockYearQuarter
}

/// True when the headers are exactly `Date`, `Product`, `Value` in any order
/// and case.
pub fn is_canonical_shape<S: AsRef<str>>(headers: &[S]) -> bool {
    if headers.len() != CANONICAL_HEADERS.len() {
        return false;
    }
    let mut lowered: Vec<String> = headers
        .iter()
        .map(|header| header.as_ref().trim().to_lowercase())
        .collect();
    lowered.sort();
    let mut expected = CANONICAL_HEADERS;
    expected.sort_unstable();
    lowered.iter().zip(expected).all(|(name, want)| name == want)
}

/// Index of the first header containing `keyword` (case-insensitive).
pub(crate) fn find_column<S: AsRef<str>>(headers: &[S], keyword: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.as_ref().to_lowercase().contains(keyword))
}
