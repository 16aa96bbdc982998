//! Raw, uninterpreted tables.

use std::path::{Path, PathBuf};

use crate::cell::Cell;

/// A grid of cells read straight from one source file.
///
/// No row has been interpreted as a header yet. Rows may have different
/// lengths; missing trailing cells read as [`Cell::Empty`].
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Source path the table was read from.
    pub source: PathBuf,
    /// File stem used as the product name for single-series layouts.
    pub base_name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(source: impl Into<PathBuf>, rows: Vec<Vec<Cell>>) -> Self {
        let source = source.into();
        let base_name = base_name_of(&source);
        Self {
            source,
            base_name,
            rows,
        }
    }

    /// Builds a table from string rows (convenient for fixtures).
    pub fn from_rows<R, C>(source: impl Into<PathBuf>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<Cell>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(source, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row_is_blank(row))
    }

    /// Index of the first row holding at least one non-empty cell.
    pub fn header_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| !row_is_blank(row))
    }

    /// The header row with trailing empty cells removed.
    pub fn header(&self) -> Option<&[Cell]> {
        let index = self.header_index()?;
        Some(trim_trailing_empty(&self.rows[index]))
    }

    /// Header cells rendered as trimmed text.
    pub fn header_names(&self) -> Vec<String> {
        self.header()
            .map(|cells| cells.iter().map(Cell::to_text).collect())
            .unwrap_or_default()
    }

    /// Rows after the header row (blank rows included).
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        match self.header_index() {
            Some(index) => &self.rows[index + 1..],
            None => &[],
        }
    }

    /// Cell at `(row, column)`, treating missing cells as empty.
    pub fn cell(row: &[Cell], column: usize) -> &Cell {
        row.get(column).unwrap_or(&Cell::Empty)
    }
}

/// True when every cell in the row is empty.
pub fn row_is_blank(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_empty)
}

/// Slice of `row` without its trailing empty cells.
pub fn trim_trailing_empty(row: &[Cell]) -> &[Cell] {
    let end = row
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |index| index + 1);
    &row[..end]
}

fn base_name_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}
