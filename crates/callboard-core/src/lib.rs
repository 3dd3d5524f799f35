//! # callboard-core
//!
//! Constraint grammar for rehearsal unavailability text.
//!
//! Dance-production schedulers collect free-text unavailability cells like
//! `"m, w 2-4, f after 5pm"` or `"Jan 20 26"` from directors and dancers.
//! This crate turns each comma group of that micro-language into typed
//! [`Constraint`] values that the availability engine can check against
//! concrete rehearsal slots.
//!
//! Parsing happens in two phases:
//!
//! 1. A scanner + recursive-descent parser recognize the token *shape* and
//!    build an explicit syntax tree. Malformed input fails with a syntax
//!    error carrying the offending position and the token kinds that would
//!    have been accepted there.
//! 2. A transform pass lowers the syntax tree into [`Constraint`] values,
//!    applying the validation the grammar cannot express structurally:
//!    hour-range checks, start-before-end, real calendar dates.
//!
//! ## Quick start
//!
//! ```rust
//! use callboard_core::{validate_token, Constraint, Weekday};
//!
//! let parsed = validate_token("m, w 2-4").unwrap();
//! assert_eq!(parsed[0], Constraint::DayOfWeek { day: Weekday::Monday });
//!
//! let err = validate_token("Feb 29 2023").unwrap_err();
//! assert!(err.contains("Invalid date"));
//! ```
//!
//! ## Modules
//!
//! - [`grammar`] — the public parser and the `validate_token` facade
//! - [`constraint`] — the five-variant constraint value type
//! - [`time`] — military-time normalization (the 1–7 PM heuristic lives here)
//! - [`date`] — calendar-date parsing and validation
//! - [`weekday`] — the fixed weekday spelling table
//! - [`error`] — syntax/semantic error types

pub mod constraint;
pub mod date;
pub mod error;
pub mod grammar;
mod parser;
mod scanner;
mod transform;
pub mod time;
pub mod weekday;

pub use constraint::Constraint;
pub use date::parse_calendar_date;
pub use error::GrammarError;
pub use grammar::{validate_token, ConstraintParser, ParseOptions};
pub use time::{parse_military_time, Meridiem, MilitaryTime};
pub use weekday::Weekday;
