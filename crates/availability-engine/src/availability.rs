//! Availability-window computation.
//!
//! Per member: union every conflicting interval, subtract from the slot's
//! own window. Per group: fold pairwise intersection across the members'
//! windows — the result is the time when *everyone* is free, and the fold
//! short-circuits to empty the moment any accumulator empties.

use crate::conflict::constraint_to_intervals;
use crate::interval::TimeInterval;
use crate::ops::{intersect, subtract, union};
use crate::slot::RehearsalSlot;
use callboard_core::Constraint;

/// One group member's parsed constraints.
#[derive(Debug, Clone)]
pub struct MemberConstraints {
    /// Opaque identifier for the member (e.g. a dancer or director ID).
    pub member_id: String,
    pub constraints: Vec<Constraint>,
}

/// The merged unavailable windows these constraints carve out of the slot.
pub fn unavailable_intervals(constraints: &[Constraint], slot: &RehearsalSlot) -> Vec<TimeInterval> {
    let blocked: Vec<TimeInterval> = constraints
        .iter()
        .flat_map(|c| constraint_to_intervals(c, slot))
        .collect();
    union(&blocked)
}

/// The windows within the slot where a member with these constraints is
/// still free. An unconstrained member gets the whole slot.
pub fn member_windows(constraints: &[Constraint], slot: &RehearsalSlot) -> Vec<TimeInterval> {
    let blocked = unavailable_intervals(constraints, slot);
    subtract(&slot.interval(), &blocked)
}

/// The windows within the slot where every member is free — the 100% group
/// availability. An empty member list yields the whole slot.
pub fn group_windows(members: &[MemberConstraints], slot: &RehearsalSlot) -> Vec<TimeInterval> {
    let mut acc = vec![slot.interval()];

    for member in members {
        let windows = member_windows(&member.constraints, slot);
        acc = intersect_windows(&acc, &windows);
        if acc.is_empty() {
            break;
        }
    }

    acc
}

/// Pairwise intersection of two window lists, normalized to sorted,
/// non-overlapping form.
fn intersect_windows(a: &[TimeInterval], b: &[TimeInterval]) -> Vec<TimeInterval> {
    let pieces: Vec<TimeInterval> = a
        .iter()
        .flat_map(|x| b.iter().filter_map(move |y| intersect(x, y)))
        .collect();
    union(&pieces)
}
