//! Year-by-quarter tables, possibly several stacked blocks per sheet.
//!
//! A block is an optional product title, a header row whose cells name the
//! quarters (`Q1`, `1º Tri`, ...), and data rows keyed by year:
//!
//! ```text
//! Acme
//! Year,Q1,Q2,Q3,Q4
//! 2020,10,20,30,40
//! ```
//!
//! Each quarter becomes a record dated the 15th of the quarter's last month.

use std::sync::LazyLock;

use chrono::NaiveDate;
use pricenorm_model::{Cell, RawTable, trim_trailing_empty};
use regex::Regex;
use tracing::{debug, warn};

use super::Collector;
use crate::error::{NormalizeError, Result};
use crate::normalization::clean_numeric;

/// First digit in a quarter label.
static QUARTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("quarter digit regex"));

/// Quarter number to the month its records are dated in.
const QUARTER_MONTHS: [(u32, u32); 4] = [(1, 3), (2, 6), (3, 9), (4, 12)];

/// Day of month for quarterly records.
const QUARTER_DAY: u32 = 15;

/// Label used when a block's leading header cell is empty.
const DEFAULT_YEAR_HEADER: &str = "Year";

/// Leading header prefixes that mark a simple table.
const CENTURY_PREFIXES: [&str; 2] = ["19", "20"];

/// Result of normalizing a year/quarter table.
#[derive(Debug)]
pub(crate) struct YearQuarterOutcome {
    pub collector: Collector,
    pub blocks: usize,
    pub used_fallback: bool,
}

#[derive(Debug)]
struct Block<'a> {
    product: String,
    header: Vec<String>,
    rows: Vec<&'a [Cell]>,
}

/// Normalizes a simple or multi-block year/quarter table.
///
/// When no block can be found the whole table is read as one simple table
/// under the file's base name; if that still yields nothing the file is
/// rejected as [`NormalizeError::UnrecognizedLayout`].
pub(crate) fn normalize_year_quarter(table: &RawTable) -> Result<YearQuarterOutcome> {
    let blocks = match simple_table(table) {
        Some(block) => {
            debug!("reading year/quarter data as a single table");
            vec![block]
        }
        None => scan_blocks(table),
    };

    if blocks.is_empty() {
        let cause = NormalizeError::MalformedBlock {
            file: table.source.clone(),
        };
        warn!(error = %cause, "falling back to single-table interpretation");
        let collector = whole_table_block(table)
            .map(|block| convert_block(&block))
            .unwrap_or_default();
        if collector.records.is_empty() {
            return Err(NormalizeError::UnrecognizedLayout {
                file: table.source.clone(),
                reason: format!("{cause}; single-table fallback produced no rows"),
            });
        }
        return Ok(YearQuarterOutcome {
            collector: collector.into_sorted(),
            blocks: 0,
            used_fallback: true,
        });
    }

    let mut collector = Collector::default();
    for block in &blocks {
        let converted = convert_block(block);
        debug!(
            product = %block.product,
            header = ?block.header,
            rows = block.rows.len(),
            records = converted.records.len(),
            "converted year/quarter block"
        );
        collector.extend(converted);
    }
    if collector.records.is_empty() {
        return Err(NormalizeError::UnrecognizedLayout {
            file: table.source.clone(),
            reason: format!("{} year/quarter block(s) yielded no rows", blocks.len()),
        });
    }
    Ok(YearQuarterOutcome {
        collector: collector.into_sorted(),
        blocks: blocks.len(),
        used_fallback: false,
    })
}

/// Year held in a leading cell: periods stripped, ASCII digits only.
fn year_of(cell: &Cell) -> Option<i32> {
    let text: String = cell.to_text().chars().filter(|ch| *ch != '.').collect();
    if text.is_empty() || !text.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn leading_year(row: &[Cell]) -> Option<i32> {
    year_of(RawTable::cell(row, 0))
}

/// Month of the quarter named by a header label, from its first digit.
fn quarter_month(label: &str) -> Option<u32> {
    let digit = QUARTER_DIGIT.find(label)?.as_str().parse::<u32>().ok()?;
    QUARTER_MONTHS
        .iter()
        .find(|(quarter, _)| *quarter == digit)
        .map(|&(_, month)| month)
}

fn header_labels(row: &[Cell]) -> Vec<String> {
    let mut labels: Vec<String> = trim_trailing_empty(row).iter().map(Cell::to_text).collect();
    if let Some(first) = labels.first_mut()
        && first.is_empty()
    {
        *first = DEFAULT_YEAR_HEADER.to_string();
    }
    labels
}

/// The whole table as one block: first non-blank row as header, every
/// later non-blank row as data.
fn whole_table_block(table: &RawTable) -> Option<Block<'_>> {
    let header = table.header()?;
    let rows = table
        .data_rows()
        .iter()
        .map(|row| trim_trailing_empty(row))
        .filter(|row| !row.is_empty())
        .collect();
    Some(Block {
        product: table.base_name.clone(),
        header: header_labels(header),
        rows,
    })
}

/// A single table: the first column header is itself a year.
///
/// Titled or untitled tables with a label header go through the block scan,
/// which keeps later block titles intact.
fn simple_table(table: &RawTable) -> Option<Block<'_>> {
    let leading = RawTable::cell(table.header()?, 0).to_text();
    if !CENTURY_PREFIXES
        .iter()
        .any(|prefix| leading.starts_with(prefix))
    {
        return None;
    }
    whole_table_block(table)
}

fn next_non_blank(rows: &[&[Cell]], from: usize) -> Option<usize> {
    (from..rows.len()).find(|&idx| !rows[idx].is_empty())
}

fn scan_blocks(table: &RawTable) -> Vec<Block<'_>> {
    let rows: Vec<&[Cell]> = table
        .rows
        .iter()
        .map(|row| trim_trailing_empty(row))
        .collect();
    let mut blocks = Vec::new();
    let mut idx = 0;
    while idx < rows.len() {
        let row = rows[idx];
        if row.is_empty() || leading_year(row).is_some() {
            idx += 1;
            continue;
        }
        let Some(next) = next_non_blank(&rows, idx + 1) else {
            break;
        };
        let (product, header_idx) = if leading_year(rows[next]).is_some() {
            (table.base_name.clone(), idx)
        } else {
            let title = row
                .iter()
                .find(|cell| !cell.is_empty())
                .map(Cell::to_text)
                .unwrap_or_default();
            (title, next)
        };

        let mut cursor = header_idx + 1;
        while cursor < rows.len() && rows[cursor].is_empty() {
            cursor += 1;
        }
        let start = cursor;
        while cursor < rows.len() && !rows[cursor].is_empty() && leading_year(rows[cursor]).is_some()
        {
            cursor += 1;
        }
        if cursor == start {
            idx += 1;
            continue;
        }
        blocks.push(Block {
            product,
            header: header_labels(rows[header_idx]),
            rows: rows[start..cursor].to_vec(),
        });
        idx = cursor;
    }
    blocks
}

fn convert_block(block: &Block<'_>) -> Collector {
    let quarters: Vec<(usize, u32)> = block
        .header
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, label)| quarter_month(label).map(|month| (idx, month)))
        .collect();

    let mut collector = Collector::default();
    for row in &block.rows {
        let year = leading_year(row);
        for &(idx, month) in &quarters {
            let date = year.and_then(|year| NaiveDate::from_ymd_opt(year, month, QUARTER_DAY));
            collector.offer(date, &block.product, clean_numeric(RawTable::cell(row, idx)));
        }
    }
    collector.into_sorted()
}
