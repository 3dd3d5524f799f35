//! Transform pass — the semantic phase.
//!
//! Lowers the syntax tree into [`Constraint`] values with an exhaustive
//! match per node kind. Everything the grammar cannot check structurally is
//! checked here: hour and minute ranges, start strictly before end, months
//! in `1..=12`, days that exist in their month and year. Each check fails
//! with a semantic error naming the rule and the offending value.

use crate::constraint::Constraint;
use crate::date::calendar_date;
use crate::error::{GrammarError, Result};
use crate::parser::{DateNode, MonthNode, SpecNode, TimeNode, TimeRangeNode};
use crate::time::{parse_military_time, MilitaryTime};
use chrono::NaiveDate;
use tracing::debug;

pub(crate) struct Transformer {
    trace: bool,
}

impl Transformer {
    pub fn new(trace: bool) -> Self {
        Transformer { trace }
    }

    /// Lower every spec node in source order. A comma group always yields
    /// at least one constraint or fails as a whole.
    pub fn transform(&self, specs: Vec<SpecNode>) -> Result<Vec<Constraint>> {
        specs.into_iter().map(|spec| self.lower_spec(spec)).collect()
    }

    fn lower_spec(&self, spec: SpecNode) -> Result<Constraint> {
        if self.trace {
            debug!(?spec, "lowering spec node");
        }
        match spec {
            SpecNode::Day(day) => Ok(Constraint::DayOfWeek { day }),
            SpecNode::TimeOnDay { day, range } => {
                let (start, end) = self.lower_range(range)?;
                Ok(Constraint::TimeOnDay { day, start, end })
            }
            SpecNode::Date(node) => Ok(Constraint::Date {
                date: self.lower_date(node)?,
            }),
            SpecNode::DateRange { start, end } => {
                let start = self.lower_date(start)?;
                let end = self.lower_date(end)?;
                if start > end {
                    return Err(GrammarError::semantic(format!(
                        "Invalid date range: Start date {start} must be on or before end date {end}."
                    )));
                }
                // A range of one day is just that day.
                if start == end {
                    return Ok(Constraint::Date { date: start });
                }
                Ok(Constraint::DateRange { start, end })
            }
            SpecNode::TimeOnDate { date, range } => {
                let date = self.lower_date(date)?;
                let (start, end) = self.lower_range(range)?;
                Ok(Constraint::TimeOnDate { date, start, end })
            }
        }
    }

    /// Resolve a time range to concrete military-time bounds. Open-ended
    /// forms are pinned to the day-boundary sentinels; all forms must end
    /// up with start strictly before end.
    fn lower_range(&self, range: TimeRangeNode) -> Result<(MilitaryTime, MilitaryTime)> {
        let (start, end) = match range {
            TimeRangeNode::Until(t) => (MilitaryTime::MIDNIGHT, self.lower_time(t)?),
            TimeRangeNode::After(t) => (self.lower_time(t)?, MilitaryTime::END_OF_DAY),
            TimeRangeNode::Between(a, b) => (self.lower_time(a)?, self.lower_time(b)?),
        };
        if start >= end {
            return Err(GrammarError::semantic(format!(
                "Invalid time range: Start time {start} must be before end time {end}."
            )));
        }
        Ok((start, end))
    }

    fn lower_time(&self, time: TimeNode) -> Result<MilitaryTime> {
        let military = parse_military_time(time.hour, time.minute.unwrap_or(0), time.meridiem)?;
        if self.trace {
            debug!(
                hour = time.hour,
                minute = time.minute.unwrap_or(0),
                meridiem = ?time.meridiem,
                %military,
                "normalized time"
            );
        }
        Ok(military)
    }

    fn lower_date(&self, node: DateNode) -> Result<NaiveDate> {
        let month = match node.month {
            MonthNode::Abbrev(m) => m,
            MonthNode::Number(m) => m,
        };
        let date = calendar_date(month, node.day, node.year)?;
        if self.trace {
            debug!(%date, "validated calendar date");
        }
        Ok(date)
    }
}
