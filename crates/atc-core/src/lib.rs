//! Interval-scheduling engine for a day's air-traffic plan.
//!
//! Turns raw arrival/departure entries into buffered IFR exclusion blocks,
//! merges overlaps, subtracts them from the active day window, and
//! classifies the remaining VFR gaps. Every function here is pure: derived
//! data is recomputed from `(flights, buffers, window)` and never mutated
//! independently.

mod alert;
mod block;
mod flight;
mod schedule;
pub mod time;
mod window;

pub use alert::{DEFAULT_LOOKAHEAD_MINUTES, ImminentBlock, imminent_block};
pub use block::{IfrBlock, MergedInterval, build_blocks, merge_blocks};
pub use flight::{Buffers, Flight, FlightId, FlightKind, ValidationError};
pub use schedule::{DaySchedule, ScheduleTotals, compute_schedule};
pub use time::{MINUTES_PER_DAY, format_minutes, normalize_time, parse_time};
pub use window::{
    ActiveWindow, FreeWindow, VfrClass, VfrThresholds, VfrWindow, classify_windows, free_windows,
};
