//! Cell-level parsing: locale dates, ISO weeks and locale numbers.
//!
//! Every function here returns `Option`: `None` marks an unresolvable cell,
//! which callers drop instead of failing the file.

mod date;
mod fuzzy;
mod numeric;
mod week;

pub use date::{
    PORTUGUESE_MONTHS, parse_date_cell, parse_locale_date, parse_locale_date_with,
    substitute_month_abbreviations,
};
pub use fuzzy::parse_fuzzy_date;
pub use numeric::{
    CORRUPTED_DASHES, clean_numeric, clean_numeric_light, clean_numeric_str,
    clean_numeric_str_light,
};
pub use week::{WEEK_MARKER, parse_iso_week};
