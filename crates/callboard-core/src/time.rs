//! Military-time normalization — the semantic core of time handling.
//!
//! All constraint times are carried as [`MilitaryTime`], an integer encoding
//! `hour*100 + minute` in `0..=2359`. Free-text hours are normalized through
//! [`parse_military_time`], which owns the grammar's ambiguity policy:
//! a bare hour in `1..=7` is read as PM, because `"w 2-4"` almost certainly
//! means an afternoon rehearsal block, not two in the morning. This shift is
//! a fixed contract of the grammar, not a configurable option.

use crate::error::{GrammarError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An AM/PM marker attached to an hour in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        })
    }
}

/// A value outside the military-time encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid military time {0}: must be 0-2359 with minutes 00-59")]
pub struct InvalidMilitaryTime(pub u16);

/// Time of day encoded as `hour*100 + minute`, range `0..=2359`.
///
/// The low two digits are always minutes in `0..=59`; a raw hour-only value
/// like `14` is never a valid `MilitaryTime` — normalization multiplies it
/// out to `1400` first. The day boundaries `0` and `2359` double as the
/// sentinels pinning open-ended ranges (`"after 5pm"` ends at 2359, never
/// at a null).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct MilitaryTime(u16);

impl MilitaryTime {
    /// Start of day, 00:00.
    pub const MIDNIGHT: MilitaryTime = MilitaryTime(0);
    /// End-of-day sentinel, 23:59.
    pub const END_OF_DAY: MilitaryTime = MilitaryTime(2359);

    /// Build from the raw integer encoding, rejecting values outside
    /// `0..=2359` or with a minute part above 59. Never clamps.
    pub fn new(value: u16) -> std::result::Result<Self, InvalidMilitaryTime> {
        if value > 2359 || value % 100 > 59 {
            return Err(InvalidMilitaryTime(value));
        }
        Ok(MilitaryTime(value))
    }

    /// Build from an hour/minute pair already known to be in range.
    fn from_hm(hour: u16, minute: u16) -> Self {
        debug_assert!(hour <= 23 && minute <= 59);
        MilitaryTime(hour * 100 + minute)
    }

    pub fn hour(&self) -> u16 {
        self.0 / 100
    }

    pub fn minute(&self) -> u16 {
        self.0 % 100
    }

    /// Minutes since midnight — the common unit for interval arithmetic.
    pub fn to_minutes(&self) -> u32 {
        u32::from(self.hour()) * 60 + u32::from(self.minute())
    }

    /// The same instant as a wall-clock time.
    pub fn to_wall_clock(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .expect("hour and minute in range by construction")
    }

    /// 12-hour display form, e.g. `"2:00 pm"`, `"12:30 am"`.
    pub fn to_display_12h(&self) -> String {
        let hour = self.hour();
        let meridiem = if hour < 12 { "am" } else { "pm" };
        let display_hour = match hour {
            0 => 12,
            13..=23 => hour - 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute(), meridiem)
    }
}

impl fmt::Display for MilitaryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for MilitaryTime {
    type Error = InvalidMilitaryTime;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        MilitaryTime::new(value)
    }
}

impl From<MilitaryTime> for u16 {
    fn from(t: MilitaryTime) -> u16 {
        t.0
    }
}

/// Normalize an hour/minute pair from the source text to military time.
///
/// Rules, in order:
///
/// 1. Minutes must be in `0..=59`.
/// 2. With an AM/PM marker the hour must be in `1..=12`: 12pm is noon,
///    12am is midnight, any other PM hour gains 12.
/// 3. Without a marker, an hour above 24 is rejected. An hour in `1..=7`
///    is shifted to the afternoon (the PM heuristic). Hour 0 and hours in
///    `8..=23` pass through as given. `24:00` normalizes to the 2359
///    end-of-day sentinel; minutes past 24:00 are rejected.
///
/// # Errors
///
/// Returns [`GrammarError::Semantic`] naming the violated rule and the
/// offending value.
pub fn parse_military_time(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Result<MilitaryTime> {
    if minute > 59 {
        return Err(GrammarError::semantic(format!(
            "Invalid minutes: '{minute}' must be between 0 and 59."
        )));
    }
    let minute = minute as u16;

    let hour = match meridiem {
        Some(m) => {
            if !(1..=12).contains(&hour) {
                return Err(GrammarError::semantic(format!(
                    "Invalid 12-hour format: Hour '{hour}' must be between 1 and 12."
                )));
            }
            let hour = hour as u16;
            match (m, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            }
        }
        None => {
            if hour > 24 {
                return Err(GrammarError::semantic(format!(
                    "Invalid 24-hour format: Hour '{hour}' cannot be greater than 24."
                )));
            }
            if hour == 24 {
                if minute > 0 {
                    return Err(GrammarError::semantic(format!(
                        "Invalid 24-hour format: Minutes are not allowed past hour 24, got '24:{minute:02}'."
                    )));
                }
                return Ok(MilitaryTime::END_OF_DAY);
            }
            // Bare hours 1-7 almost certainly mean the afternoon: "2-4"
            // is a 2pm-4pm rehearsal block, not two in the morning.
            if (1..=7).contains(&hour) {
                (hour + 12) as u16
            } else {
                hour as u16
            }
        }
    };

    Ok(MilitaryTime::from_hm(hour, minute))
}
