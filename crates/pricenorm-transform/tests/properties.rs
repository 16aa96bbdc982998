//! Property tests for the cell parsers and the ordering invariant.

use chrono::{Datelike, NaiveDate, Weekday};
use pricenorm_model::RawTable;
use pricenorm_transform::normalization::{clean_numeric_str, clean_numeric_str_light, parse_iso_week};
use pricenorm_transform::{NormalizeOptions, normalize_table};
use proptest::prelude::*;

/// Formats `units` with `.` thousands groups and a `,` decimal part.
fn locale_number(units: u64, cents: u32) -> String {
    let digits = units.to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{grouped},{cents:02}")
}

proptest! {
    #[test]
    fn prop_iso_week_is_monday_of_that_week(year in 1990i32..2060, week in 1u32..=52) {
        let date = parse_iso_week(&format!("KW {week}/{year}")).expect("valid week");
        prop_assert_eq!(date.weekday(), Weekday::Mon);
        prop_assert_eq!(date.iso_week().week(), week);
        prop_assert_eq!(date.iso_week().year(), year);
    }

    #[test]
    fn prop_week_labels_without_slash_are_rejected(week in 1u32..=52, year in 1990i32..2060) {
        prop_assert_eq!(parse_iso_week(&format!("KW {week}-{year}")), None);
        prop_assert_eq!(parse_iso_week(&format!("WK {week}/{year}")), None);
    }

    #[test]
    fn prop_locale_numbers_parse(units in 0u64..10_000_000, cents in 0u32..100) {
        let text = locale_number(units, cents);
        let expected: f64 = format!("{units}.{cents:02}").parse().expect("plain decimal");
        prop_assert_eq!(clean_numeric_str(&text), Some(expected));
    }

    #[test]
    fn prop_light_cleaner_reads_display_output(value in -1.0e9f64..1.0e9) {
        prop_assert_eq!(clean_numeric_str_light(&value.to_string()), Some(value));
    }

    #[test]
    fn prop_two_column_output_is_sorted(
        days in prop::collection::vec((2000i32..2030, 1u32..=12, 1u32..=28, 0u32..1000), 1..40)
    ) {
        let mut rows = vec![vec!["Date".to_string(), "Value".to_string()]];
        for (year, month, day, value) in &days {
            let date = NaiveDate::from_ymd_opt(*year, *month, *day).expect("valid date");
            rows.push(vec![date.format("%d/%m/%Y").to_string(), value.to_string()]);
        }
        let table = RawTable::from_rows("series.csv", rows);
        let normalized = normalize_table(&table, &NormalizeOptions::default()).expect("normalize");
        prop_assert_eq!(normalized.records.len(), days.len());
        prop_assert!(normalized.records.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}
