//! Constraint/slot conflict evaluation.
//!
//! One rule per constraint variant, exhaustively matched — no fallthrough.
//! Time overlap is the strict test `max(starts) < min(ends)`; date ranges
//! are inclusive on both ends.

use crate::interval::{DateSpan, TimeInterval};
use crate::slot::RehearsalSlot;
use callboard_core::{Constraint, MilitaryTime};

/// Does this constraint conflict with this slot?
pub fn check_conflict(constraint: &Constraint, slot: &RehearsalSlot) -> bool {
    match constraint {
        Constraint::DayOfWeek { day } => *day == slot.weekday,
        Constraint::TimeOnDay { day, start, end } => {
            *day == slot.weekday && times_overlap(*start, *end, slot)
        }
        Constraint::Date { date } => *date == slot.date,
        Constraint::DateRange { start, end } => {
            // Constructed with start <= end, so the span cannot fail.
            DateSpan::new(*start, *end)
                .map(|span| span.contains(slot.date))
                .unwrap_or(false)
        }
        Constraint::TimeOnDate { date, start, end } => {
            *date == slot.date && times_overlap(*start, *end, slot)
        }
    }
}

/// The unavailable window a conflicting constraint removes from the slot,
/// clipped to the slot's own bounds.
///
/// Whole-day constraints blank the entire slot; time-bounded constraints
/// yield `[max(starts), min(ends))`. Non-conflicting constraints yield
/// nothing. The result feeds [`crate::ops::subtract`] to compute what
/// remains.
pub fn constraint_to_intervals(constraint: &Constraint, slot: &RehearsalSlot) -> Vec<TimeInterval> {
    match constraint {
        Constraint::DayOfWeek { .. } | Constraint::Date { .. } | Constraint::DateRange { .. } => {
            if check_conflict(constraint, slot) {
                vec![slot.interval()]
            } else {
                Vec::new()
            }
        }
        Constraint::TimeOnDay { day, start, end } => {
            if *day == slot.weekday {
                clipped(*start, *end, slot)
            } else {
                Vec::new()
            }
        }
        Constraint::TimeOnDate { date, start, end } => {
            if *date == slot.date {
                clipped(*start, *end, slot)
            } else {
                Vec::new()
            }
        }
    }
}

fn times_overlap(start: MilitaryTime, end: MilitaryTime, slot: &RehearsalSlot) -> bool {
    start.to_minutes().max(slot.start.to_minutes()) < end.to_minutes().min(slot.end.to_minutes())
}

fn clipped(start: MilitaryTime, end: MilitaryTime, slot: &RehearsalSlot) -> Vec<TimeInterval> {
    let clip_start = start.to_minutes().max(slot.start.to_minutes());
    let clip_end = end.to_minutes().min(slot.end.to_minutes());
    if clip_start < clip_end {
        vec![TimeInterval::from_minutes(clip_start, clip_end)]
    } else {
        Vec::new()
    }
}
