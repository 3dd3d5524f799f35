//! Error types for interval and slot construction.

use callboard_core::time::InvalidMilitaryTime;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Errors raised by the engine. Construction errors signal a contract
/// violation by the caller (a malformed slot or interval) and are raised at
/// construction time, never deferred — loaders are expected to catch them
/// per row and continue with the next record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A `TimeInterval` with zero or negative duration.
    #[error("empty interval: start {start} must be before end {end}")]
    EmptyInterval { start: NaiveTime, end: NaiveTime },

    /// A `DateSpan` whose end precedes its start.
    #[error("invalid date range: start {start} must be on or before end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A military-time value outside the `0..=2359` encoding.
    #[error(transparent)]
    InvalidTime(#[from] InvalidMilitaryTime),

    /// A wall-clock string none of the accepted formats matched.
    #[error("cannot parse time: {0}")]
    UnparsableTime(String),

    /// A date string none of the accepted formats matched.
    #[error("cannot parse date: {0}")]
    UnparsableDate(String),
}

/// Convenience alias used throughout availability-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
