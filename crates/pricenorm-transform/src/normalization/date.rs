//! Dates written with Portuguese month abbreviations.

use chrono::NaiveDate;
use pricenorm_model::Cell;

use crate::options::DateTokenMode;

use super::fuzzy::parse_fuzzy_date;

/// Portuguese month abbreviations and their English equivalents.
pub const PORTUGUESE_MONTHS: [(&str, &str); 12] = [
    ("jan.", "Jan"),
    ("fev.", "Feb"),
    ("mar.", "Mar"),
    ("abr.", "Apr"),
    ("mai.", "May"),
    ("jun.", "Jun"),
    ("jul.", "Jul"),
    ("ago.", "Aug"),
    ("set.", "Sep"),
    ("out.", "Oct"),
    ("nov.", "Nov"),
    ("dez.", "Dec"),
];

/// Parses a locale date token such as `"15 mar. 2020"` or `"31 dez. 2021"`.
///
/// Month abbreviations are replaced with English names, then the text goes
/// through the day-first fuzzy parser. Returns `None` when no complete date
/// can be resolved.
pub fn parse_locale_date(value: &str) -> Option<NaiveDate> {
    parse_locale_date_with(value, DateTokenMode::Full)
}

/// [`parse_locale_date`] with an explicit token mode.
pub fn parse_locale_date_with(value: &str, mode: DateTokenMode) -> Option<NaiveDate> {
    let substituted = substitute_month_abbreviations(value);
    match mode {
        DateTokenMode::Full => parse_fuzzy_date(&substituted),
        DateTokenMode::FirstLast => parse_fuzzy_date(&first_and_last_token(&substituted)),
    }
}

/// Parses a date from a raw cell. Only text cells can hold a date.
pub fn parse_date_cell(cell: &Cell, mode: DateTokenMode) -> Option<NaiveDate> {
    match cell {
        Cell::Text(value) => parse_locale_date_with(value, mode),
        Cell::Number(_) | Cell::Empty => None,
    }
}

/// Replaces every occurrence of every Portuguese abbreviation, ignoring
/// ASCII case.
pub fn substitute_month_abbreviations(value: &str) -> String {
    let mut text = value.to_string();
    for (portuguese, english) in PORTUGUESE_MONTHS {
        text = replace_ignore_ascii_case(&text, portuguese, english);
    }
    text
}

fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    // ASCII lowercasing keeps byte offsets aligned with `haystack`.
    let lowered = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    for (start, _) in lowered.match_indices(needle) {
        out.push_str(&haystack[last..start]);
        out.push_str(replacement);
        last = start + needle.len();
    }
    out.push_str(&haystack[last..]);
    out
}

fn first_and_last_token(value: &str) -> String {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [first, .., last] => format!("{first} {last}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_portuguese_abbreviations() {
        assert_eq!(parse_locale_date("15 mar. 2020"), date(2020, 3, 15));
        assert_eq!(parse_locale_date("31 dez. 2021"), date(2021, 12, 31));
        assert_eq!(parse_locale_date("1 fev. 2019"), date(2019, 2, 1));
        assert_eq!(parse_locale_date("7 SET. 2018"), date(2018, 9, 7));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_locale_date("not a date"), None);
        assert_eq!(parse_locale_date(""), None);
    }

    #[test]
    fn test_every_occurrence_is_substituted() {
        assert_eq!(
            substitute_month_abbreviations("jan. a fev. / jan."),
            "Jan a Feb / Jan"
        );
    }

    #[test]
    fn test_first_last_tokens() {
        assert_eq!(
            parse_locale_date_with("mar. quinta-feira 2020", DateTokenMode::FirstLast),
            date(2020, 3, 1)
        );
        assert_eq!(
            parse_locale_date_with("2020-03-15", DateTokenMode::FirstLast),
            date(2020, 3, 15)
        );
    }

    #[test]
    fn test_non_text_cells_are_unparseable() {
        assert_eq!(parse_date_cell(&Cell::Number(43905.0), DateTokenMode::Full), None);
        assert_eq!(parse_date_cell(&Cell::Empty, DateTokenMode::Full), None);
        assert_eq!(
            parse_date_cell(&Cell::text("15/03/2020"), DateTokenMode::Full),
            date(2020, 3, 15)
        );
    }
}
