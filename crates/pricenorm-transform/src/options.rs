//! Normalization switches.

/// How header names are matched when sniffing layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMatch {
    /// A header set of exactly `{date, product, value}` is read as an
    /// already-canonical long table; everything else is sniffed by
    /// substring.
    #[default]
    Exact,
    /// Substring sniffing only. Canonical-shaped files are unpivoted like any
    /// other date-indexed wide table.
    Substring,
}

/// How much of a date cell is handed to the fuzzy parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateTokenMode {
    /// Parse the whole cell.
    #[default]
    Full,
    /// Keep only the first and last whitespace-separated tokens, dropping
    /// anything sandwiched between them (e.g. a weekday name).
    FirstLast,
}

/// Options shared by every normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub header_match: HeaderMatch,
    /// Token mode for the date column of date-indexed wide tables. Two-column
    /// series always parse the full cell.
    pub wide_date_tokens: DateTokenMode,
}

impl NormalizeOptions {
    #[must_use]
    pub fn with_header_match(mut self, header_match: HeaderMatch) -> Self {
        self.header_match = header_match;
        self
    }

    #[must_use]
    pub fn with_wide_date_tokens(mut self, mode: DateTokenMode) -> Self {
        self.wide_date_tokens = mode;
        self
    }
}
