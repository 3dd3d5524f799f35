//! Conflict evaluation — one rule per constraint variant.

use availability_engine::{check_conflict, constraint_to_intervals, RehearsalSlot, TimeInterval};
use callboard_core::{Constraint, MilitaryTime, Weekday};
use chrono::{NaiveDate, NaiveTime};

fn mt(value: u16) -> MilitaryTime {
    MilitaryTime::new(value).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Monday 2026-02-02, evening block.
fn monday_evening() -> RehearsalSlot {
    RehearsalSlot::new(date(2026, 2, 2), Weekday::Monday, mt(1800), mt(2100)).unwrap()
}

fn iv(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
    TimeInterval::new(
        NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap(),
        NaiveTime::from_hms_opt(end_h, end_m, 0).unwrap(),
    )
    .unwrap()
}

#[test]
fn slot_construction_enforces_ordering() {
    assert!(RehearsalSlot::new(date(2026, 2, 2), Weekday::Monday, mt(2100), mt(1800)).is_err());
    assert!(RehearsalSlot::new(date(2026, 2, 2), Weekday::Monday, mt(1800), mt(1800)).is_err());
}

#[test]
fn from_date_derives_the_weekday() {
    // 2026-02-02 is a Monday.
    let slot = RehearsalSlot::from_date(date(2026, 2, 2), mt(1800), mt(2100)).unwrap();
    assert_eq!(slot.weekday, Weekday::Monday);
}

#[test]
fn day_of_week_matches_on_weekday_only() {
    let slot = monday_evening();
    let monday = Constraint::DayOfWeek {
        day: Weekday::Monday,
    };
    let tuesday = Constraint::DayOfWeek {
        day: Weekday::Tuesday,
    };
    assert!(check_conflict(&monday, &slot));
    assert!(!check_conflict(&tuesday, &slot));
}

#[test]
fn time_on_day_needs_day_and_time_overlap() {
    let slot = monday_evening();
    let after_five = Constraint::TimeOnDay {
        day: Weekday::Monday,
        start: mt(1700),
        end: mt(2359),
    };
    assert!(check_conflict(&after_five, &slot));

    // Same constraint, morning slot: day matches, times do not.
    let morning = RehearsalSlot::new(date(2026, 2, 2), Weekday::Monday, mt(0), mt(1200)).unwrap();
    assert!(!check_conflict(&after_five, &morning));

    // Wrong day entirely.
    let tuesday_block = Constraint::TimeOnDay {
        day: Weekday::Tuesday,
        start: mt(1700),
        end: mt(2359),
    };
    assert!(!check_conflict(&tuesday_block, &slot));
}

#[test]
fn touching_time_ranges_do_not_conflict() {
    let slot = monday_evening();
    let until_six = Constraint::TimeOnDay {
        day: Weekday::Monday,
        start: mt(0),
        end: mt(1800),
    };
    assert!(
        !check_conflict(&until_six, &slot),
        "constraint ending exactly at slot start is not a conflict"
    );
}

#[test]
fn date_matches_exactly() {
    let slot = monday_evening();
    let same_day = Constraint::Date {
        date: date(2026, 2, 2),
    };
    let other_day = Constraint::Date {
        date: date(2026, 2, 3),
    };
    assert!(check_conflict(&same_day, &slot));
    assert!(!check_conflict(&other_day, &slot));
}

#[test]
fn date_range_is_inclusive_on_both_ends() {
    let slot = monday_evening();
    let surrounding = Constraint::DateRange {
        start: date(2026, 1, 30),
        end: date(2026, 2, 5),
    };
    let ends_on_slot = Constraint::DateRange {
        start: date(2026, 1, 30),
        end: date(2026, 2, 2),
    };
    let starts_on_slot = Constraint::DateRange {
        start: date(2026, 2, 2),
        end: date(2026, 2, 5),
    };
    let before = Constraint::DateRange {
        start: date(2026, 1, 20),
        end: date(2026, 2, 1),
    };
    assert!(check_conflict(&surrounding, &slot));
    assert!(check_conflict(&ends_on_slot, &slot));
    assert!(check_conflict(&starts_on_slot, &slot));
    assert!(!check_conflict(&before, &slot));
}

#[test]
fn time_on_date_needs_date_and_time_overlap() {
    let slot = monday_evening();
    let conflicting = Constraint::TimeOnDate {
        date: date(2026, 2, 2),
        start: mt(1700),
        end: mt(1900),
    };
    let wrong_date = Constraint::TimeOnDate {
        date: date(2026, 2, 9),
        start: mt(1700),
        end: mt(1900),
    };
    let wrong_time = Constraint::TimeOnDate {
        date: date(2026, 2, 2),
        start: mt(900),
        end: mt(1200),
    };
    assert!(check_conflict(&conflicting, &slot));
    assert!(!check_conflict(&wrong_date, &slot));
    assert!(!check_conflict(&wrong_time, &slot));
}

#[test]
fn whole_day_constraints_blank_the_full_slot() {
    let slot = monday_evening();
    let monday = Constraint::DayOfWeek {
        day: Weekday::Monday,
    };
    assert_eq!(
        constraint_to_intervals(&monday, &slot),
        vec![iv(18, 0, 21, 0)]
    );

    let range = Constraint::DateRange {
        start: date(2026, 1, 30),
        end: date(2026, 2, 5),
    };
    assert_eq!(constraint_to_intervals(&range, &slot), vec![iv(18, 0, 21, 0)]);
}

#[test]
fn time_bounded_constraints_are_clipped_to_the_slot() {
    let slot = monday_evening();
    // 5pm-7pm against a 6pm-9pm slot leaves only 6pm-7pm blocked.
    let early_evening = Constraint::TimeOnDay {
        day: Weekday::Monday,
        start: mt(1700),
        end: mt(1900),
    };
    assert_eq!(
        constraint_to_intervals(&early_evening, &slot),
        vec![iv(18, 0, 19, 0)]
    );
}

#[test]
fn non_conflicting_constraints_yield_no_intervals() {
    let slot = monday_evening();
    let tuesday = Constraint::DayOfWeek {
        day: Weekday::Tuesday,
    };
    let morning = Constraint::TimeOnDay {
        day: Weekday::Monday,
        start: mt(900),
        end: mt(1200),
    };
    assert!(constraint_to_intervals(&tuesday, &slot).is_empty());
    assert!(constraint_to_intervals(&morning, &slot).is_empty());
}
