//! Set operations over interval collections.
//!
//! All comparisons run in minutes since midnight; wall-clock values are
//! rebuilt only at the boundary. Because a [`TimeInterval`] cannot be
//! constructed with zero or negative duration, the inputs here are already
//! free of degenerate intervals.

use crate::interval::TimeInterval;

/// Merge a collection into a sorted, non-overlapping list.
///
/// Intervals are sorted by start (then end, for stability) and merged where
/// `max(starts) <= min(ends)`. Adjacent intervals that merely touch ARE
/// merged: a rehearsal ending at 5 and another starting at 5 are one
/// continuous block. Idempotent — `union(union(x)) == union(x)`.
pub fn union(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut spans: Vec<(u32, u32)> = intervals
        .iter()
        .map(|iv| (iv.start_minutes(), iv.end_minutes()))
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (start, end) in spans {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or adjacent — extend the current block.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
        .into_iter()
        .map(|(start, end)| TimeInterval::from_minutes(start, end))
        .collect()
}

/// Intersection of two intervals: `[max(starts), min(ends))`, or `None`
/// when the overlap would be empty. Exactly zero or one result — touching
/// boundaries do not intersect.
pub fn intersect(a: &TimeInterval, b: &TimeInterval) -> Option<TimeInterval> {
    let start = a.start_minutes().max(b.start_minutes());
    let end = a.end_minutes().min(b.end_minutes());
    if start >= end {
        return None;
    }
    Some(TimeInterval::from_minutes(start, end))
}

/// Remove a set of intervals from a base interval.
///
/// Removals are unioned first so overlapping removals are not subtracted
/// twice. Each merged removal then punches out of every surviving fragment:
/// a fully covered fragment vanishes, an edge hit leaves one piece, a
/// strictly interior punch leaves two. Output fragments follow base
/// traversal order.
pub fn subtract(base: &TimeInterval, removals: &[TimeInterval]) -> Vec<TimeInterval> {
    if removals.is_empty() {
        return vec![*base];
    }

    let merged = union(removals);
    let mut remaining: Vec<(u32, u32)> = vec![(base.start_minutes(), base.end_minutes())];

    for removal in &merged {
        let (sub_start, sub_end) = (removal.start_minutes(), removal.end_minutes());
        let mut survivors = Vec::new();

        for &(start, end) in &remaining {
            // No overlap — fragment survives untouched.
            if sub_end <= start || sub_start >= end {
                survivors.push((start, end));
                continue;
            }
            // Left piece before the punch.
            if start < sub_start {
                survivors.push((start, sub_start));
            }
            // Right piece after the punch.
            if end > sub_end {
                survivors.push((sub_end, end));
            }
        }

        remaining = survivors;
        if remaining.is_empty() {
            break;
        }
    }

    remaining
        .into_iter()
        .map(|(start, end)| TimeInterval::from_minutes(start, end))
        .collect()
}
