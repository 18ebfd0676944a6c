//! Imminent-block monitor: lead-time warnings before the next exclusion.

use serde::Serialize;

use crate::block::MergedInterval;

/// Default lookahead horizon for imminent-block warnings, in minutes.
pub const DEFAULT_LOOKAHEAD_MINUTES: f64 = 10.0;

/// Warning that an exclusion interval is about to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImminentBlock {
    /// Start of the upcoming merged interval, minutes past midnight.
    pub start: i32,
    /// Whole minutes until that start, rounded up.
    pub minutes_until_start: i64,
}

/// Reports whether an exclusion interval starts within the lookahead.
///
/// `now_minutes` is fractional minutes past midnight and only meaningful
/// for the current calendar day; suppressing the check for other days is
/// the caller's job. Only the nearest upcoming interval is considered — the
/// merged list is ascending, so the scan stops at the first interval that
/// has not started yet.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn imminent_block(
    merged: &[MergedInterval],
    now_minutes: f64,
    lookahead_minutes: f64,
) -> Option<ImminentBlock> {
    for interval in merged {
        let minutes_until = f64::from(interval.start) - now_minutes;
        if minutes_until <= 0.0 {
            continue; // already started (or starting this instant)
        }
        return (minutes_until <= lookahead_minutes).then(|| ImminentBlock {
            start: interval.start,
            minutes_until_start: minutes_until.ceil() as i64,
        });
    }
    None
}
