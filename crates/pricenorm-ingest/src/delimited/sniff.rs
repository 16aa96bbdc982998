//! Delimiter detection for delimited text of unknown dialect.

use std::collections::BTreeMap;

/// Delimiters considered, in tie-break order.
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Number of non-blank lines inspected.
const SNIFF_LINES: usize = 20;

/// Picks the delimiter whose per-line count is most consistent.
///
/// For each candidate the modal non-zero count over the sampled lines is
/// computed; the candidate matching its mode on the most lines wins, then
/// the one occurring most often in the first line. Falls back to `,`.
pub fn sniff_delimiter(text: &str) -> u8 {
    let lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    let mut best = (b',', 0usize, 0usize);
    for candidate in CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_unquoted(line, candidate))
            .collect();
        let Some(mode) = modal_count(&counts) else {
            continue;
        };
        let consistent = counts.iter().filter(|&&count| count == mode).count();
        let first = counts.first().copied().unwrap_or(0);
        if (consistent, first) > (best.1, best.2) {
            best = (candidate, consistent, first);
        }
    }
    best.0
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Most frequent non-zero count; ties go to the larger count.
fn modal_count(counts: &[usize]) -> Option<usize> {
    let mut frequency: BTreeMap<usize, usize> = BTreeMap::new();
    for &count in counts.iter().filter(|&&count| count > 0) {
        *frequency.entry(count).or_insert(0) += 1;
    }
    frequency
        .into_iter()
        .max_by_key(|&(count, seen)| (seen, count))
        .map(|(count, _)| count)
}
