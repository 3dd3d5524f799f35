//! Date, date-range, and time-on-date parsing.

use callboard_core::{parse_calendar_date, validate_token, Constraint, MilitaryTime};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mt(value: u16) -> MilitaryTime {
    MilitaryTime::new(value).unwrap()
}

#[test]
fn month_abbreviation_date() {
    let result = validate_token("Jan 2 26").unwrap();
    assert_eq!(result, vec![Constraint::Date { date: date(2026, 1, 2) }]);
}

#[test]
fn slash_date_two_digit_year() {
    let result = validate_token("1/2/26").unwrap();
    assert_eq!(result, vec![Constraint::Date { date: date(2026, 1, 2) }]);
}

#[test]
fn slash_date_four_digit_year() {
    let result = validate_token("1/2/2026").unwrap();
    assert_eq!(result, vec![Constraint::Date { date: date(2026, 1, 2) }]);
}

#[test]
fn date_range_mixed_year_forms() {
    let result = validate_token("Jan 2 26-Jan 5 2026").unwrap();
    assert_eq!(
        result,
        vec![Constraint::DateRange {
            start: date(2026, 1, 2),
            end: date(2026, 1, 5),
        }]
    );
}

#[test]
fn slash_date_range() {
    let result = validate_token("1/2/26-1/5/26").unwrap();
    assert_eq!(
        result,
        vec![Constraint::DateRange {
            start: date(2026, 1, 2),
            end: date(2026, 1, 5),
        }]
    );
}

#[test]
fn single_day_range_collapses_to_date() {
    let result = validate_token("Jan 2 26-Jan 2 26").unwrap();
    assert_eq!(result, vec![Constraint::Date { date: date(2026, 1, 2) }]);
}

#[test]
fn time_on_date_forms() {
    assert_eq!(
        validate_token("Feb 2 2026 after 5pm").unwrap(),
        vec![Constraint::TimeOnDate {
            date: date(2026, 2, 2),
            start: mt(1700),
            end: mt(2359),
        }]
    );
    assert_eq!(
        validate_token("Feb 2 2026 before 3pm").unwrap(),
        vec![Constraint::TimeOnDate {
            date: date(2026, 2, 2),
            start: mt(0),
            end: mt(1500),
        }]
    );
    assert_eq!(
        validate_token("Feb 2 2026 11am-3pm").unwrap(),
        vec![Constraint::TimeOnDate {
            date: date(2026, 2, 2),
            start: mt(1100),
            end: mt(1500),
        }]
    );
}

#[test]
fn leap_day_parses_in_leap_years_only() {
    assert_eq!(
        validate_token("Feb 29 2024").unwrap(),
        vec![Constraint::Date { date: date(2024, 2, 29) }]
    );
    assert!(validate_token("Feb 29 2023").is_err());
}

#[test]
fn dates_mixed_with_day_specs() {
    let result = validate_token("m, Jan 2 26, w 2-4").unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result[1], Constraint::Date { date: date(2026, 1, 2) });
}

#[test]
fn parse_calendar_date_accepts_abbrev_and_numeric_months() {
    assert_eq!(parse_calendar_date("Jan", 2, 26).unwrap(), date(2026, 1, 2));
    assert_eq!(parse_calendar_date("jan", 2, 26).unwrap(), date(2026, 1, 2));
    assert_eq!(parse_calendar_date("1", 2, 2026).unwrap(), date(2026, 1, 2));
    assert_eq!(parse_calendar_date("12", 25, 25).unwrap(), date(2025, 12, 25));
}

#[test]
fn parse_calendar_date_rejects_bad_months_and_days() {
    assert!(parse_calendar_date("XYZ", 15, 26).is_err());
    assert!(parse_calendar_date("13", 15, 26).is_err());
    assert!(parse_calendar_date("Feb", 30, 2024).is_err());
    assert!(parse_calendar_date("Apr", 31, 2026).is_err());
}

#[test]
fn two_digit_years_window_to_the_2000s() {
    assert_eq!(parse_calendar_date("Jan", 1, 0).unwrap(), date(2000, 1, 1));
    assert_eq!(parse_calendar_date("Jan", 1, 99).unwrap(), date(2099, 1, 1));
    assert_eq!(parse_calendar_date("Jan", 1, 1999).unwrap(), date(1999, 1, 1));
}
