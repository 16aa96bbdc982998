//! Numbers written with `.` thousands separators and `,` decimals.

use pricenorm_model::Cell;

/// Dash artifacts left behind by mis-decoded exports.
pub const CORRUPTED_DASHES: [&str; 5] = ["â€“", "â€”", "\u{2013}", "\u{2014}", "\u{fffd}"];

/// Cleans a locale-formatted cell into a finite number.
///
/// Typed numbers pass through. Text has its `.` thousands separators
/// removed, `,` turned into the decimal point and dash artifacts stripped.
pub fn clean_numeric(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(value) => finite(*value),
        Cell::Text(value) => clean_numeric_str(value),
        Cell::Empty => None,
    }
}

/// Text variant of [`clean_numeric`].
pub fn clean_numeric_str(value: &str) -> Option<f64> {
    let mut cleaned = value.replace('.', "").replace(',', ".");
    for dash in CORRUPTED_DASHES {
        cleaned = cleaned.replace(dash, "");
    }
    parse_finite(&cleaned)
}

/// Lighter cleaner for sources already using `.` as the decimal point:
/// only `,` is turned into `.`, nothing is stripped.
pub fn clean_numeric_light(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(value) => finite(*value),
        Cell::Text(value) => clean_numeric_str_light(value),
        Cell::Empty => None,
    }
}

/// Text variant of [`clean_numeric_light`].
pub fn clean_numeric_str_light(value: &str) -> Option<f64> {
    parse_finite(&value.replace(',', "."))
}

fn parse_finite(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().and_then(finite)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_numbers() {
        assert_eq!(clean_numeric_str("1.234,56"), Some(1234.56));
        assert_eq!(clean_numeric_str("12,5"), Some(12.5));
        assert_eq!(clean_numeric_str("1.234.567"), Some(1234567.0));
        assert_eq!(clean_numeric_str(" 1 234,5 "), Some(1234.5));
        assert_eq!(clean_numeric_str("-3,25"), Some(-3.25));
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(clean_numeric_str(""), None);
        assert_eq!(clean_numeric_str("abc"), None);
        assert_eq!(clean_numeric_str("\u{2013}"), None);
        assert_eq!(clean_numeric_str("nan"), None);
        assert_eq!(clean_numeric_str("inf"), None);
    }

    #[test]
    fn test_corrupted_dash_is_stripped() {
        assert_eq!(clean_numeric_str("â€“12,5"), Some(12.5));
        assert_eq!(clean_numeric_str("1.000\u{fffd}"), Some(1000.0));
    }

    #[test]
    fn test_light_variant_keeps_periods() {
        assert_eq!(clean_numeric_str_light("1.5"), Some(1.5));
        assert_eq!(clean_numeric_str_light("12,5"), Some(12.5));
        assert_eq!(clean_numeric_str_light("1.234,56"), None);
        assert_eq!(clean_numeric_str_light(""), None);
    }

    #[test]
    fn test_cells() {
        assert_eq!(clean_numeric(&Cell::Number(1234.5)), Some(1234.5));
        assert_eq!(clean_numeric(&Cell::Number(f64::NAN)), None);
        assert_eq!(clean_numeric(&Cell::Empty), None);
        assert_eq!(clean_numeric(&Cell::text("1.234,56")), Some(1234.56));
        assert_eq!(clean_numeric_light(&Cell::text("1234.56")), Some(1234.56));
    }
}
