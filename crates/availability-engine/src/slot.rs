//! The concrete rehearsal slot being checked against constraints.

use crate::error::{EngineError, Result};
use crate::interval::TimeInterval;
use callboard_core::{MilitaryTime, Weekday};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One schedulable block of rehearsal time.
///
/// Constructed by the data-loading layer from spreadsheet rows and consumed
/// read-only here. Construction enforces `start < end`; a slot that fails
/// this is a caller contract violation, and loaders are expected to catch
/// the error per row and continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RehearsalSlot {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub start: MilitaryTime,
    pub end: MilitaryTime,
}

impl RehearsalSlot {
    /// Build a slot from loader-supplied fields.
    pub fn new(
        date: NaiveDate,
        weekday: Weekday,
        start: MilitaryTime,
        end: MilitaryTime,
    ) -> Result<Self> {
        if start >= end {
            return Err(EngineError::EmptyInterval {
                start: start.to_wall_clock(),
                end: end.to_wall_clock(),
            });
        }
        Ok(RehearsalSlot {
            date,
            weekday,
            start,
            end,
        })
    }

    /// Build a slot deriving the weekday from the date.
    pub fn from_date(date: NaiveDate, start: MilitaryTime, end: MilitaryTime) -> Result<Self> {
        RehearsalSlot::new(date, Weekday::from(date.weekday()), start, end)
    }

    /// The slot's own time window.
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::from_minutes(self.start.to_minutes(), self.end.to_minutes())
    }

    /// Duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.to_minutes() - self.start.to_minutes()
    }
}
