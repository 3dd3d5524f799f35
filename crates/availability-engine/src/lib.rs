//! # availability-engine
//!
//! Exact interval algebra and conflict evaluation for rehearsal scheduling.
//!
//! Given constraints parsed by `callboard-core` and concrete
//! [`RehearsalSlot`]s supplied by a data loader, this crate answers the two
//! questions every scheduling report needs: *does this constraint conflict
//! with this slot?* and *what time actually remains?* All interval math is
//! done in whole minutes since midnight, so repeated union/subtract/intersect
//! chains never drift.
//!
//! The crate is purely synchronous and has no I/O; every function is a
//! finite, deterministic computation over immutable inputs.
//!
//! ## Modules
//!
//! - [`interval`] — `TimeInterval` and the wall-clock/date parsing used by
//!   slot loaders
//! - [`ops`] — union, intersect, subtract over interval collections
//! - [`slot`] — the concrete rehearsal slot being checked
//! - [`conflict`] — per-variant constraint/slot dispatch
//! - [`availability`] — per-member and whole-group availability windows
//! - [`error`] — construction and parse errors

pub mod availability;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod ops;
pub mod slot;

pub use availability::{group_windows, member_windows, unavailable_intervals, MemberConstraints};
pub use conflict::{check_conflict, constraint_to_intervals};
pub use error::EngineError;
pub use interval::{parse_slot_date, parse_time, time_to_minutes, DateSpan, TimeInterval};
pub use ops::{intersect, subtract, union};
pub use slot::RehearsalSlot;
