//! The constraint value type — five variants, closed set.
//!
//! Every parsed token lowers to one or more of these. Constraints are
//! immutable value objects with structural equality; they are created fresh
//! per parse, flow through a conflict check or window computation, and are
//! discarded — nothing caches or mutates them.

use crate::time::MilitaryTime;
use crate::weekday::Weekday;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed unavailability rule.
///
/// Time-bounded variants hold half-open `[start, end)` ranges with
/// `start < end`; open-ended source text (`"after 5pm"`) pins the missing
/// bound to the day-boundary sentinels 0 / 2359 rather than a null.
/// `DateRange` is inclusive on both ends with `start <= end`; a single date
/// is always a `Date`, never a degenerate range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// Unavailable the entire weekday, every week.
    DayOfWeek { day: Weekday },
    /// Unavailable during `[start, end)` on that weekday, every week.
    TimeOnDay {
        day: Weekday,
        start: MilitaryTime,
        end: MilitaryTime,
    },
    /// Unavailable the entire calendar date.
    Date { date: NaiveDate },
    /// Unavailable every day in `[start, end]`, inclusive.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// Unavailable during `[start, end)` on that specific date.
    TimeOnDate {
        date: NaiveDate,
        start: MilitaryTime,
        end: MilitaryTime,
    },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::DayOfWeek { day } => write!(f, "{day}"),
            Constraint::TimeOnDay { day, start, end } => {
                write!(f, "{day} {}-{}", start.to_display_12h(), end.to_display_12h())
            }
            Constraint::Date { date } => write!(f, "{date}"),
            Constraint::DateRange { start, end } => write!(f, "{start} through {end}"),
            Constraint::TimeOnDate { date, start, end } => {
                write!(f, "{date} {}-{}", start.to_display_12h(), end.to_display_12h())
            }
        }
    }
}
