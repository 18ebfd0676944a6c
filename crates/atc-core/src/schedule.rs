//! The full scheduling pipeline as one explicit pure transformation.

use serde::Serialize;

use crate::block::{IfrBlock, MergedInterval, build_blocks, merge_blocks};
use crate::flight::{Buffers, Flight};
use crate::window::{ActiveWindow, VfrClass, VfrThresholds, VfrWindow, classify_windows, free_windows};

/// Minute totals for the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleTotals {
    /// Total minutes covered by merged exclusion intervals.
    pub ifr_minutes: i32,
    /// Total minutes in recommended VFR windows.
    pub vfr_recommended_minutes: i32,
    /// Total minutes in possible VFR windows.
    pub vfr_possible_minutes: i32,
}

/// Everything derived from one consistent snapshot of the day's inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub blocks: Vec<IfrBlock>,
    pub merged: Vec<MergedInterval>,
    pub windows: Vec<VfrWindow>,
    pub totals: ScheduleTotals,
}

/// Recomputes the derived pipeline from source state.
///
/// Pure and deterministic: blocks, merged intervals, classified windows,
/// and totals are functions of `(flights, buffers, window, thresholds)`
/// alone. Callers re-invoke this on any input change rather than patching
/// derived data incrementally.
#[must_use]
pub fn compute_schedule(
    flights: &[Flight],
    buffers: &Buffers,
    window: ActiveWindow,
    thresholds: VfrThresholds,
) -> DaySchedule {
    let blocks = build_blocks(flights, buffers);
    let merged = merge_blocks(&blocks);
    let windows = classify_windows(&free_windows(&merged, window), thresholds);

    let ifr_minutes = merged.iter().map(MergedInterval::length).sum();
    let sum_class = |class: VfrClass| {
        windows
            .iter()
            .filter(|w| w.class == class)
            .map(|w| w.length)
            .sum()
    };
    let totals = ScheduleTotals {
        ifr_minutes,
        vfr_recommended_minutes: sum_class(VfrClass::Recommended),
        vfr_possible_minutes: sum_class(VfrClass::Possible),
    };

    DaySchedule {
        blocks,
        merged,
        windows,
        totals,
    }
}
