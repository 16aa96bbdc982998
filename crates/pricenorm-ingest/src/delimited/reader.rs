//! Headerless CSV loading into raw tables.

use std::borrow::Cow;
use std::path::Path;

use csv::ReaderBuilder;
use pricenorm_model::{Cell, RawTable};

use crate::error::{IngestError, Result};

use super::sniff::sniff_delimiter;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a delimited text file without interpreting any header row.
///
/// The delimiter is sniffed from the content, rows may have differing
/// lengths, and every cell becomes [`Cell::Text`] or [`Cell::Empty`].
pub fn read_csv_raw(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::file_read(path, e))?;
    let text = decode_text(&bytes);
    let delimiter = sniff_delimiter(&text);
    tracing::debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter).escape_default(),
        "sniffed delimiter"
    );

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(Cell::text).collect::<Vec<_>>());
    }

    let table = RawTable::new(path, rows);
    if table.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(table)
}

/// Decodes file bytes as UTF-8, falling back to Windows-1252.
///
/// The fallback decoder also honours UTF-16 byte order marks.
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, encoding, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            tracing::debug!(encoding = encoding.name(), "decoded non UTF-8 input");
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_reads_semicolon_file_without_header_interpretation() {
        let file = create_temp_csv(b"Date;Value\n15 mar. 2020;12,5\n");
        let table = read_csv_raw(file.path()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec![Cell::text("Date"), Cell::text("Value")]);
        assert_eq!(table.rows[1][1], Cell::text("12,5"));
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let file = create_temp_csv(b"Acme\nYear,Q1,Q2\n2020,1,2\n");
        let table = read_csv_raw(file.path()).unwrap();

        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_bom_is_stripped() {
        let file = create_temp_csv(b"\xEF\xBB\xBFDate,Value\n2020-01-01,1\n");
        let table = read_csv_raw(file.path()).unwrap();

        assert_eq!(table.rows[0][0], Cell::text("Date"));
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "Preço" encoded as Windows-1252
        let file = create_temp_csv(b"Date,Pre\xE7o\n2020-01-01,1\n");
        let table = read_csv_raw(file.path()).unwrap();

        assert_eq!(table.rows[0][1], Cell::text("Preço"));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = create_temp_csv(b"\n , \n");
        let result = read_csv_raw(file.path());

        assert!(matches!(result, Err(IngestError::EmptyTable { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_raw(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
