//! The fixed weekday spelling table.
//!
//! Unavailability text abbreviates weekdays aggressively: `"m"`, `"tues"`,
//! `"th"`, `"su"`. Every accepted spelling is listed here explicitly —
//! ambiguous two-letter forms are resolved by the table, never inferred
//! (`"tu"` is Tuesday and `"th"` is Thursday by fiat).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Look up a weekday from one of its accepted spellings
    /// (case-insensitive). Returns `None` for anything not in the table.
    pub fn from_token(word: &str) -> Option<Weekday> {
        let word = word.to_ascii_lowercase();
        let day = match word.as_str() {
            "monday" | "mon" | "mo" | "m" => Weekday::Monday,
            "tuesday" | "tues" | "tu" => Weekday::Tuesday,
            "wednesday" | "wed" | "we" | "w" => Weekday::Wednesday,
            "thursday" | "thurs" | "th" => Weekday::Thursday,
            "friday" | "fri" | "fr" | "f" => Weekday::Friday,
            "saturday" | "sat" | "sa" => Weekday::Saturday,
            "sunday" | "sun" | "su" => Weekday::Sunday,
            _ => return None,
        };
        Some(day)
    }

    /// The full lowercase day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}
