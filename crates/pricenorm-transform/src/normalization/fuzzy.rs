//! Day-first fuzzy date parsing.
//!
//! Accepts dates embedded in free text: `"15 Mar 2020"`, `"Sunday, 15 Mar 2020"`,
//! `"15/03/2020"`, `"2020-03-15"`, `"March 2020"`, `"20200315"`. Words that
//! are not English month names are ignored, as are clock times.
//!
//! Resolution rules:
//! - a 4-digit number (or any number above 31) is the year
//! - with a month name, the remaining numbers give the day, then the year
//! - without one, a leading year means `Y-M-D`, otherwise `D-M-Y`; day and
//!   month swap when only that order yields a valid month
//! - two-digit years map to 1969..=2068
//! - a missing day defaults to the 1st; a missing year is unresolvable

use chrono::NaiveDate;

const MONTH_NAMES: [(&str, u32); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number { value: u32, digits: usize },
    Month(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Alpha,
    Digit,
    Separator,
}

fn classify_char(ch: char) -> CharClass {
    if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Alpha
    } else {
        CharClass::Separator
    }
}

/// Parses a date out of free text, day before month. `None` if no complete
/// calendar date can be resolved.
pub fn parse_fuzzy_date(text: &str) -> Option<NaiveDate> {
    let tokens = tokenize(text);
    resolve(&tokens)
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let word = match strip_clock_time(word) {
            Some(date_part) => date_part,
            None => continue,
        };
        let mut run = String::new();
        let mut run_class = CharClass::Separator;
        for ch in word.chars() {
            let class = classify_char(ch);
            if class != run_class {
                push_token(&mut tokens, &run, run_class);
                run.clear();
                run_class = class;
            }
            if class != CharClass::Separator {
                run.push(ch);
            }
        }
        push_token(&mut tokens, &run, run_class);
    }
    tokens
}

/// Drops a clock time from a word. `2020-03-15T10:30` keeps its date part;
/// a bare `10:30` is dropped entirely.
fn strip_clock_time(word: &str) -> Option<&str> {
    if !word.contains(':') {
        return Some(word);
    }
    let (date_part, _) = word.split_once('T')?;
    (!date_part.is_empty()).then_some(date_part)
}

fn push_token(tokens: &mut Vec<Token>, run: &str, class: CharClass) {
    match class {
        CharClass::Digit => {
            if let Ok(value) = run.parse::<u32>() {
                tokens.push(Token::Number {
                    value,
                    digits: run.len(),
                });
            }
        }
        CharClass::Alpha => {
            if let Some(month) = month_from_name(run) {
                tokens.push(Token::Month(month));
            }
        }
        CharClass::Separator => {}
    }
}

/// English month from a 3-letter abbreviation, `sept`, or the full name.
fn month_from_name(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .find(|(name, _)| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
        .map(|&(_, month)| month)
        .or_else(|| (lower == "sept").then_some(9))
}

fn resolve(tokens: &[Token]) -> Option<NaiveDate> {
    let month_name = tokens.iter().find_map(|token| match token {
        Token::Month(month) => Some(*month),
        Token::Number { .. } => None,
    });
    let numbers: Vec<(u32, usize)> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Number { value, digits } => Some((*value, *digits)),
            Token::Month(_) => None,
        })
        .collect();

    match month_name {
        Some(month) => resolve_with_month_name(month, &numbers),
        None => resolve_numeric(&numbers),
    }
}

fn is_year_like((value, digits): (u32, usize)) -> bool {
    digits >= 3 || value > 31
}

fn resolve_with_month_name(month: u32, numbers: &[(u32, usize)]) -> Option<NaiveDate> {
    let mut day = None;
    let mut year = None;
    for &number in numbers {
        if year.is_none() && is_year_like(number) {
            year = Some(number);
        } else if day.is_none() {
            day = Some(number.0);
        } else if year.is_none() {
            year = Some(number);
        }
    }
    let year = expand_year(year?)?;
    NaiveDate::from_ymd_opt(year, month, day.unwrap_or(1))
}

fn resolve_numeric(numbers: &[(u32, usize)]) -> Option<NaiveDate> {
    match numbers {
        [(compact, 8)] => {
            let year = i32::try_from(compact / 10_000).ok()?;
            NaiveDate::from_ymd_opt(year, (compact / 100) % 100, compact % 100)
        }
        [first, second] => {
            // Month and year only, e.g. "03/2020" or "2020-03".
            let (month, year) = if is_year_like(*first) {
                (second.0, *first)
            } else {
                (first.0, *second)
            };
            NaiveDate::from_ymd_opt(expand_year(year)?, month, 1)
        }
        [first, second, third, ..] => {
            if is_year_like(*first) {
                return NaiveDate::from_ymd_opt(expand_year(*first)?, second.0, third.0);
            }
            let year = expand_year(*third)?;
            let (mut day, mut month) = (first.0, second.0);
            if month > 12 && day <= 12 {
                std::mem::swap(&mut day, &mut month);
            }
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => None,
    }
}

fn expand_year((value, digits): (u32, usize)) -> Option<i32> {
    let value = i32::try_from(value).ok()?;
    if digits <= 2 {
        Some(if value < 69 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_fuzzy_date("15 Mar 2020"), date(2020, 3, 15));
        assert_eq!(parse_fuzzy_date("March 15, 2020"), date(2020, 3, 15));
        assert_eq!(parse_fuzzy_date("Sunday, 15 March 2020"), date(2020, 3, 15));
        assert_eq!(parse_fuzzy_date("15th Sept 2020"), date(2020, 9, 15));
        assert_eq!(parse_fuzzy_date("Mar2020"), date(2020, 3, 1));
        assert_eq!(parse_fuzzy_date("15-Mar-20"), date(2020, 3, 15));
    }

    #[test]
    fn test_day_first_numeric() {
        assert_eq!(parse_fuzzy_date("05/03/2020"), date(2020, 3, 5));
        assert_eq!(parse_fuzzy_date("15.03.2020"), date(2020, 3, 15));
        // Only month-first is valid here.
        assert_eq!(parse_fuzzy_date("03/15/2020"), date(2020, 3, 15));
    }

    #[test]
    fn test_iso_and_compact() {
        assert_eq!(parse_fuzzy_date("2020-03-15"), date(2020, 3, 15));
        assert_eq!(parse_fuzzy_date("2020-03-15T10:30:00"), date(2020, 3, 15));
        assert_eq!(parse_fuzzy_date("20200315"), date(2020, 3, 15));
    }

    #[test]
    fn test_clock_times_are_ignored() {
        assert_eq!(parse_fuzzy_date("15/03/2020 10:45"), date(2020, 3, 15));
    }

    #[test]
    fn test_month_and_year_only() {
        assert_eq!(parse_fuzzy_date("03/2020"), date(2020, 3, 1));
        assert_eq!(parse_fuzzy_date("2020-03"), date(2020, 3, 1));
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(parse_fuzzy_date("01/02/68"), date(2068, 2, 1));
        assert_eq!(parse_fuzzy_date("01/02/69"), date(1969, 2, 1));
    }

    #[test]
    fn test_unresolvable() {
        assert_eq!(parse_fuzzy_date("not a date"), None);
        assert_eq!(parse_fuzzy_date("15 Mar"), None);
        assert_eq!(parse_fuzzy_date("31/02/2020"), None);
        assert_eq!(parse_fuzzy_date("42"), None);
        assert_eq!(parse_fuzzy_date(""), None);
    }
}
