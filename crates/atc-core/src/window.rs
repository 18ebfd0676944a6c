//! Free windows between exclusion blocks and their VFR classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::MergedInterval;
use crate::time::MINUTES_PER_DAY;

/// The day's scheduling horizon: the full day, or sunrise to sunset when
/// the daylight restriction is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWindow {
    pub start: i32,
    pub end: i32,
}

impl ActiveWindow {
    /// The unrestricted window covering the whole civil day.
    #[must_use]
    pub const fn full_day() -> Self {
        Self {
            start: 0,
            end: MINUTES_PER_DAY,
        }
    }

    /// A daylight-restricted window, or `None` when the sunrise/sunset pair
    /// is invalid (callers fall back to [`ActiveWindow::full_day`]).
    #[must_use]
    pub fn daylight(sunrise: i32, sunset: i32) -> Option<Self> {
        (0 <= sunrise && sunrise < sunset && sunset <= MINUTES_PER_DAY).then_some(Self {
            start: sunrise,
            end: sunset,
        })
    }
}

impl Default for ActiveWindow {
    fn default() -> Self {
        Self::full_day()
    }
}

/// A gap in the active window not covered by any exclusion interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeWindow {
    pub start: i32,
    pub end: i32,
}

impl FreeWindow {
    /// Gap length in minutes.
    #[must_use]
    pub const fn length(&self) -> i32 {
        self.end - self.start
    }
}

/// Subtracts the merged exclusion intervals from the active window.
///
/// Input intervals must be ascending and non-overlapping, as produced by
/// [`crate::block::merge_blocks`]. Intervals entirely outside the window
/// are skipped; the rest are clipped to it. Windows are only emitted with
/// positive length.
#[must_use]
pub fn free_windows(merged: &[MergedInterval], window: ActiveWindow) -> Vec<FreeWindow> {
    let mut windows = Vec::new();
    let mut cursor = window.start;

    for interval in merged {
        let start = interval.start.clamp(window.start, window.end);
        let end = interval.end.clamp(window.start, window.end);
        if end <= window.start || start >= window.end {
            continue;
        }
        if start > cursor {
            windows.push(FreeWindow { start: cursor, end: start });
        }
        cursor = cursor.max(end);
    }
    if cursor < window.end {
        windows.push(FreeWindow {
            start: cursor,
            end: window.end,
        });
    }

    // Guard against malformed active windows; the logic above never emits
    // an empty gap for valid input.
    windows.retain(|w| w.end > w.start);
    windows
}

/// How usable a free window is for visual-flight traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VfrClass {
    Recommended,
    Possible,
    None,
}

impl fmt::Display for VfrClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Recommended => "recommended",
            Self::Possible => "possible",
            Self::None => "none",
        };
        write!(f, "{s}")
    }
}

/// Duration thresholds for VFR classification, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfrThresholds {
    /// At or above this length a window is recommended.
    pub recommended: i32,
    /// At or above this length (but below recommended) a window is possible.
    pub possible: i32,
}

impl Default for VfrThresholds {
    fn default() -> Self {
        Self {
            recommended: 30,
            possible: 20,
        }
    }
}

/// A classified free window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VfrWindow {
    pub start: i32,
    pub end: i32,
    pub length: i32,
    pub class: VfrClass,
}

/// Labels each gap by duration against the thresholds.
///
/// Windows below the possible threshold are classified `None`; display
/// layers suppress them but they stay in the result.
#[must_use]
pub fn classify_windows(windows: &[FreeWindow], thresholds: VfrThresholds) -> Vec<VfrWindow> {
    windows
        .iter()
        .map(|w| {
            let length = w.length();
            let class = if length >= thresholds.recommended {
                VfrClass::Recommended
            } else if length >= thresholds.possible {
                VfrClass::Possible
            } else {
                VfrClass::None
            };
            VfrWindow {
                start: w.start,
                end: w.end,
                length,
                class,
            }
        })
        .collect()
}
