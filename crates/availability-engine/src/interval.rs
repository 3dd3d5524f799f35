//! Time intervals, date spans, and the parsing used by slot loaders.
//!
//! [`TimeInterval`] is the unit everything else computes with: an immutable
//! wall-clock range within a single day, strictly positive duration enforced
//! at construction. There is deliberately no way to build an empty or
//! backwards interval — construction fails rather than swapping or clamping.

use crate::error::{EngineError, Result};
use callboard_core::MilitaryTime;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Minutes since midnight — the common unit for all interval arithmetic.
pub fn time_to_minutes(t: NaiveTime) -> u32 {
    use chrono::Timelike;
    t.hour() * 60 + t.minute()
}

/// Parse a wall-clock time string.
///
/// Accepted forms: `"9:00 AM"`, `"9 AM"`, `"17:00"`, `"09"` — an hour with
/// optional `:minutes`, with or without an AM/PM marker. With a marker the
/// hour must be 1-12; without, 0-23.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    let trimmed = text.trim();
    let lower = trimmed.to_ascii_lowercase();

    // Peel an optional trailing meridiem marker.
    let (body, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let (hour_str, minute_str) = match body.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (body, None),
    };

    let hour: u32 = hour_str
        .trim()
        .parse()
        .map_err(|_| EngineError::UnparsableTime(text.to_string()))?;
    let minute: u32 = match minute_str {
        Some(m) => m
            .trim()
            .parse()
            .map_err(|_| EngineError::UnparsableTime(text.to_string()))?,
        None => 0,
    };

    let hour = match meridiem {
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return Err(EngineError::UnparsableTime(text.to_string()));
            }
            match (pm, hour) {
                (false, 12) => 0,
                (false, h) => h,
                (true, 12) => 12,
                (true, h) => h + 12,
            }
        }
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| EngineError::UnparsableTime(text.to_string()))
}

/// Parse a slot date string: `MM/DD/YYYY` or `MM/DD/YY` (two-digit years
/// are windowed to the 2000s).
pub fn parse_slot_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    let mut parts = trimmed.split('/');
    let (Some(m), Some(d), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(EngineError::UnparsableDate(text.to_string()));
    };

    let month: u32 = m
        .parse()
        .map_err(|_| EngineError::UnparsableDate(text.to_string()))?;
    let day: u32 = d
        .parse()
        .map_err(|_| EngineError::UnparsableDate(text.to_string()))?;
    let year: u32 = y
        .parse()
        .map_err(|_| EngineError::UnparsableDate(text.to_string()))?;
    let year: i32 = if year < 100 {
        (2000 + year) as i32
    } else {
        year as i32
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| EngineError::UnparsableDate(text.to_string()))
}

/// A time range within a single day, `start < end` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeInterval {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeInterval {
    /// Build an interval, rejecting zero or negative duration. Never swaps
    /// or clamps the bounds.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(EngineError::EmptyInterval { start, end });
        }
        Ok(TimeInterval { start, end })
    }

    /// Build from military-time bounds.
    pub fn from_military(start: MilitaryTime, end: MilitaryTime) -> Result<Self> {
        TimeInterval::new(start.to_wall_clock(), end.to_wall_clock())
    }

    /// Build from minutes since midnight already known to satisfy
    /// `start < end < 1440`.
    pub(crate) fn from_minutes(start: u32, end: u32) -> Self {
        debug_assert!(start < end && end < 24 * 60);
        TimeInterval {
            start: NaiveTime::from_hms_opt(start / 60, start % 60, 0)
                .expect("minutes in range by construction"),
            end: NaiveTime::from_hms_opt(end / 60, end % 60, 0)
                .expect("minutes in range by construction"),
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub(crate) fn start_minutes(&self) -> u32 {
        time_to_minutes(self.start)
    }

    pub(crate) fn end_minutes(&self) -> u32 {
        time_to_minutes(self.end)
    }

    /// Duration in whole minutes, always positive.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes() - self.start_minutes()
    }

    /// Strict overlap — adjacent intervals sharing only a boundary do not
    /// overlap. (Merging treats adjacency differently; see [`crate::ops::union`].)
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_time_12h(self.start),
            format_time_12h(self.end)
        )
    }
}

/// Render a wall-clock time as lowercase 12-hour text, e.g. `"7:00 pm"`.
fn format_time_12h(t: NaiveTime) -> String {
    use chrono::Timelike;
    let hour = t.hour();
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let display_hour = match hour {
        0 => 12,
        13..=23 => hour - 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, t.minute(), meridiem)
}

/// An inclusive calendar-date span, `start <= end` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Build a span, rejecting `end < start`. A single-day span is allowed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(DateSpan { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive containment on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Duration in days, inclusive (a single-day span is 1).
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
