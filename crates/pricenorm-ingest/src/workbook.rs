//! XLS/XLSX loading via calamine.

use std::path::Path;

use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use pricenorm_model::{Cell, RawTable};

use crate::error::{IngestError, Result};

/// Reads the first worksheet of a workbook without header interpretation.
///
/// Numeric cells stay typed; spreadsheet dates become ISO `YYYY-MM-DD` text
/// so every downstream date path goes through the same parser.
pub fn read_workbook_raw(path: &Path) -> Result<RawTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoWorksheet {
            path: path.to_path_buf(),
        });
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let (height, width) = range.get_size();
    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        height,
        width,
        "read worksheet"
    );

    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    let table = RawTable::new(path, rows);
    if table.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(table)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::Number(*value),
        Data::String(value) => Cell::text(value.as_str()),
        Data::Bool(value) => Cell::text(value.to_string()),
        Data::DateTime(value) => cell_from_excel_datetime(value),
        Data::DateTimeIso(value) => {
            Cell::text(value.split('T').next().unwrap_or_default().to_string())
        }
        Data::DurationIso(value) => Cell::text(value.as_str()),
        _ => Cell::Empty,
    }
}

/// Calendar cells become ISO dates in the workbook's own date system;
/// durations keep their day count.
fn cell_from_excel_datetime(value: &ExcelDateTime) -> Cell {
    if !value.is_datetime() {
        return Cell::Number(value.as_f64());
    }
    value.as_datetime().map_or(Cell::Empty, |datetime| {
        Cell::text(datetime.date().format("%Y-%m-%d").to_string())
    })
}

#[cfg(test)]
mod tests {
    use calamine::ExcelDateTimeType;

    use super::*;

    #[test]
    fn test_excel_dates_follow_date_system() {
        let in_1900 = Data::DateTime(ExcelDateTime::new(
            43905.75,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(cell_from_data(&in_1900), Cell::text("2020-03-15"));

        let in_1904 = Data::DateTime(ExcelDateTime::new(
            42443.0,
            ExcelDateTimeType::DateTime,
            true,
        ));
        assert_eq!(cell_from_data(&in_1904), Cell::text("2020-03-15"));

        let early = Data::DateTime(ExcelDateTime::new(
            1.0,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(cell_from_data(&early), Cell::text("1900-01-01"));
    }

    #[test]
    fn test_duration_is_not_a_date() {
        let duration = Data::DateTime(ExcelDateTime::new(
            1.5,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_from_data(&duration), Cell::Number(1.5));
    }

    #[test]
    fn test_cell_from_data() {
        assert_eq!(cell_from_data(&Data::Int(2020)), Cell::Number(2020.0));
        assert_eq!(cell_from_data(&Data::Float(12.5)), Cell::Number(12.5));
        assert_eq!(
            cell_from_data(&Data::String(" Acme ".to_string())),
            Cell::text("Acme")
        );
        assert_eq!(cell_from_data(&Data::String("  ".to_string())), Cell::Empty);
        assert_eq!(
            cell_from_data(&Data::DateTimeIso("2020-03-15T00:00:00".to_string())),
            Cell::text("2020-03-15")
        );
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn test_missing_workbook() {
        let result = read_workbook_raw(Path::new("/definitely/not/here.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_corrupt_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let result = read_workbook_raw(&path);
        assert!(matches!(result, Err(IngestError::Workbook { .. })));
    }
}
