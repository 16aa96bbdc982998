//! Canonical files written by this crate read back unchanged.

use std::fs;

use chrono::NaiveDate;
use pricenorm_ingest::read_raw_table;
use pricenorm_model::CanonicalRecord;
use pricenorm_output::{
    OutputError, output_path_for, read_canonical, read_product_series, write_canonical,
};
use pricenorm_transform::{NormalizeOptions, normalize_table};
use tempfile::TempDir;

fn triples(records: &[CanonicalRecord]) -> Vec<(NaiveDate, String, f64)> {
    records
        .iter()
        .map(|r| (r.date, r.product.clone(), r.value))
        .collect()
}

fn normalize_file(path: &std::path::Path) -> Vec<CanonicalRecord> {
    let table = read_raw_table(path).expect("read raw");
    normalize_table(&table, &NormalizeOptions::default())
        .expect("normalize")
        .records
}

#[test]
fn renormalizing_canonical_output_is_identity() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("resins.csv");
    fs::write(
        &input,
        "Date;PVC;PE\n15 mar. 2020;1.234,56;900\n01 jan. 2020;1.100;\n31 dez. 2021;0,5;1\n",
    )
    .expect("write input");

    let first = normalize_file(&input);
    assert_eq!(first.len(), 5);

    let output = output_path_for(dir.path(), "resins");
    write_canonical(&output, &first).expect("write canonical");
    let second = normalize_file(&output);
    assert_eq!(triples(&first), triples(&second));

    let read_back = read_canonical(&output).expect("read canonical");
    assert_eq!(triples(&first), triples(&read_back));
}

#[test]
fn series_split_per_product() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("quarterly.csv");
    fs::write(
        &input,
        "Acme,,,,\nYear,Q1,Q2,Q3,Q4\n2020,10,20,30,40\n,,,,\nBeta,,,,\nYear,Q1,Q2,Q3,Q4\n2019,1,2,3,4\n",
    )
    .expect("write input");
    let records = normalize_file(&input);
    let output = output_path_for(dir.path(), "quarterly");
    write_canonical(&output, &records).expect("write canonical");

    let series = read_product_series(&output).expect("read series");
    let names: Vec<&str> = series.iter().map(|s| s.product.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Beta"]);
    assert_eq!(series[0].values, vec![10.0, 20.0, 30.0, 40.0]);
    assert_eq!(series[1].first_date(), NaiveDate::from_ymd_opt(2019, 3, 15));
    assert_eq!(series[1].last_date(), NaiveDate::from_ymd_opt(2019, 12, 15));
}

#[test]
fn non_canonical_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("other.csv");
    fs::write(&path, "Date,Price\n2020-01-01,1\n").expect("write");
    let result = read_canonical(&path);
    assert!(matches!(
        result,
        Err(OutputError::MissingColumn {
            column: "Product",
            ..
        })
    ));
}
