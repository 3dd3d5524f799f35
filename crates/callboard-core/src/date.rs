//! Calendar-date parsing and validation.
//!
//! Dates arrive as `"Jan 2 26"` or `"1/2/2026"`. Month words are the
//! case-insensitive three-letter abbreviations; two-digit years are windowed
//! to the 2000s. Day-of-month is checked against the real calendar — Feb 29
//! parses only in leap years, and an impossible date is an error, never a
//! silently adjusted value.

use crate::error::{GrammarError, Result};
use chrono::NaiveDate;

/// Month number for a three-letter abbreviation (case-insensitive).
pub(crate) fn month_from_abbrev(word: &str) -> Option<u32> {
    let month = match word.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Two-digit years belong to the 2000s; everything else is taken literally.
pub(crate) fn window_year(year: u32) -> i32 {
    if year < 100 {
        (2000 + year) as i32
    } else {
        year as i32
    }
}

/// Validate a month/day/year triple against the real calendar.
pub(crate) fn calendar_date(month: u32, day: u32, year: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(GrammarError::semantic(format!(
            "Invalid date: month '{month}' must be between 1 and 12"
        )));
    }
    NaiveDate::from_ymd_opt(window_year(year), month, day).ok_or_else(|| {
        GrammarError::semantic("Invalid date: day is out of range for month".to_string())
    })
}

/// Parse a calendar date from a month (three-letter abbreviation or number),
/// day, and year.
///
/// # Errors
///
/// Returns [`GrammarError::Semantic`] for an unknown month word, a month
/// number outside `1..=12`, or a day that does not exist in that month and
/// year.
///
/// # Examples
///
/// ```
/// use callboard_core::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let d = parse_calendar_date("Jan", 2, 26).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
///
/// assert!(parse_calendar_date("Feb", 29, 2023).is_err());
/// ```
pub fn parse_calendar_date(month: &str, day: u32, year: u32) -> Result<NaiveDate> {
    let month_num = if month.chars().all(|c| c.is_ascii_digit()) {
        month.parse::<u32>().map_err(|_| {
            GrammarError::semantic(format!("Invalid date: unknown month '{month}'"))
        })?
    } else {
        month_from_abbrev(month).ok_or_else(|| {
            GrammarError::semantic(format!("Invalid date: unknown month '{month}'"))
        })?
    };
    calendar_date(month_num, day, year)
}
