//! Canonical CSV writer.

use std::path::Path;

use pricenorm_model::{CANONICAL_COLUMNS, CanonicalRecord};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Date format of the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Creates the output directory (and parents) if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes records as `Date,Product,Value`, overwriting `path`.
///
/// Records are written in the order given; callers pass them sorted by date.
/// Values use `f64`'s `Display`, which never switches to exponent notation.
pub fn write_canonical(path: &Path, records: &[CanonicalRecord]) -> Result<()> {
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer.write_record(CANONICAL_COLUMNS).map_err(write_err)?;
    for record in records {
        writer
            .write_record([
                record.date.format(DATE_FORMAT).to_string(),
                record.product.clone(),
                record.value.to_string(),
            ])
            .map_err(write_err)?;
    }
    writer.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), records = records.len(), "wrote canonical series");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_writes_header_and_plain_decimals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x_normalized.csv");
        let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        let records = vec![
            CanonicalRecord::new(date, "Acme", 10.0).unwrap(),
            CanonicalRecord::new(date, "Beta, Inc", 0.000_001).unwrap(),
            CanonicalRecord::new(date, "Gamma", 1.5e16).unwrap(),
        ];
        write_canonical(&path, &records).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Product,Value");
        assert_eq!(lines[1], "2020-03-15,Acme,10");
        assert_eq!(lines[2], "2020-03-15,\"Beta, Inc\",0.000001");
        assert_eq!(lines[3], "2020-03-15,Gamma,15000000000000000");
    }

    #[test]
    fn test_empty_dataset_writes_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty_normalized.csv");
        write_canonical(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Date,Product,Value\n");
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
