//! ISO calendar week labels (`KW <week>/<year>`).

use chrono::{NaiveDate, Weekday};

/// Marker preceding the week number in week-column labels.
pub const WEEK_MARKER: &str = "KW";

/// Resolves `"KW 2/2018"` to the Monday of ISO week 2 of 2018.
///
/// The label must be exactly two whitespace-separated tokens: the marker
/// (case-insensitive) and `<week>/<year>`. Anything else, including a week
/// that does not exist in that year, is unresolvable.
pub fn parse_iso_week(label: &str) -> Option<NaiveDate> {
    let mut parts = label.split_whitespace();
    let (Some(marker), Some(week_year), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    if !marker.eq_ignore_ascii_case(WEEK_MARKER) {
        return None;
    }
    let (week, year) = week_year.split_once('/')?;
    let week: u32 = week.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_monday_of_week() {
        assert_eq!(parse_iso_week("KW 2/2018"), NaiveDate::from_ymd_opt(2018, 1, 8));
        assert_eq!(parse_iso_week("kw 1/2021"), NaiveDate::from_ymd_opt(2021, 1, 4));
        assert_eq!(parse_iso_week("  KW  53/2020 "), NaiveDate::from_ymd_opt(2020, 12, 28));
    }

    #[test]
    fn test_malformed_labels() {
        assert_eq!(parse_iso_week("KW 2018"), None);
        assert_eq!(parse_iso_week("KW x/2018"), None);
        assert_eq!(parse_iso_week("KW 2/yy"), None);
        assert_eq!(parse_iso_week("WK 2/2018"), None);
        assert_eq!(parse_iso_week("KW2/2018"), None);
        assert_eq!(parse_iso_week("KW 2/2018 extra"), None);
        assert_eq!(parse_iso_week("KW 53/2021"), None);
        assert_eq!(parse_iso_week(""), None);
    }
}
