//! IFR exclusion blocks: expansion from flight events and sweep-merge.

use serde::Serialize;

use crate::flight::{Buffers, Flight, FlightId, FlightKind};
use crate::time::MINUTES_PER_DAY;

/// A buffered exclusion interval derived from one flight event.
///
/// `start`/`end` keep the pre-clamp endpoints (possibly negative or past
/// 1440) so clamping decisions stay explicit and testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfrBlock {
    /// Source flight id.
    pub id: FlightId,
    pub kind: FlightKind,
    /// The flight's own time in minutes past midnight.
    pub anchor: i32,
    pub start: i32,
    pub end: i32,
    pub clamped_start: i32,
    pub clamped_end: i32,
}

impl IfrBlock {
    fn from_flight(flight: &Flight, buffers: &Buffers) -> Option<Self> {
        let anchor = flight.minutes()?;
        let (before, after) = buffers.for_kind(flight.kind);
        let start = anchor - before;
        let end = anchor + after;
        let clamped_start = start.clamp(0, MINUTES_PER_DAY);
        let clamped_end = end.clamp(0, MINUTES_PER_DAY);
        // Degenerate after clamping: nothing left of the block inside the day.
        if clamped_end <= clamped_start {
            return None;
        }
        Some(Self {
            id: flight.id.clone(),
            kind: flight.kind,
            anchor,
            start,
            end,
            clamped_start,
            clamped_end,
        })
    }
}

/// Expands each parseable flight into a buffered exclusion block.
///
/// Flights whose time fails to parse are skipped entirely; flagging them is
/// the input layer's concern. Surviving blocks are sorted ascending by
/// clamped start (stable, so same-start blocks keep entry order).
#[must_use]
pub fn build_blocks(flights: &[Flight], buffers: &Buffers) -> Vec<IfrBlock> {
    let mut blocks: Vec<IfrBlock> = flights
        .iter()
        .filter_map(|flight| IfrBlock::from_flight(flight, buffers))
        .collect();
    blocks.sort_by_key(|b| b.clamped_start);
    blocks
}

/// A fused exclusion interval.
///
/// Invariant: in any list produced by [`merge_blocks`], `merged[i].end <
/// merged[i + 1].start` — no two merged intervals overlap or touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergedInterval {
    pub start: i32,
    pub end: i32,
}

impl MergedInterval {
    /// Interval length in minutes.
    #[must_use]
    pub const fn length(&self) -> i32 {
        self.end - self.start
    }
}

/// Sweeps the sorted clamped blocks into the minimal covering set.
///
/// Touching counts as overlap: a block starting exactly where the
/// accumulator ends extends it rather than opening a gap.
#[must_use]
pub fn merge_blocks(blocks: &[IfrBlock]) -> Vec<MergedInterval> {
    let mut merged: Vec<MergedInterval> = Vec::new();
    for block in blocks {
        match merged.last_mut() {
            Some(last) if block.clamped_start <= last.end => {
                last.end = last.end.max(block.clamped_end);
            }
            _ => merged.push(MergedInterval {
                start: block.clamped_start,
                end: block.clamped_end,
            }),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: &str, kind: FlightKind, time: &str) -> Flight {
        Flight::new(FlightId::new(id).unwrap(), kind, time)
    }

    fn block(start: i32, end: i32) -> IfrBlock {
        IfrBlock {
            id: FlightId::new("b").unwrap(),
            kind: FlightKind::Arr,
            anchor: start,
            start,
            end,
            clamped_start: start,
            clamped_end: end,
        }
    }

    #[test]
    fn expands_with_kind_specific_buffers() {
        let flights = vec![
            flight("a", FlightKind::Arr, "10:00"),
            flight("d", FlightKind::Dep, "10:40"),
        ];
        let blocks = build_blocks(&flights, &Buffers::default());

        assert_eq!(blocks.len(), 2);
        assert_eq!((blocks[0].clamped_start, blocks[0].clamped_end), (585, 605));
        assert_eq!((blocks[1].clamped_start, blocks[1].clamped_end), (630, 645));
        assert_eq!(blocks[0].anchor, 600);
    }

    #[test]
    fn clamps_early_morning_block_to_day_start() {
        // ARR at 00:05 with a 15-minute lead runs past midnight.
        let flights = vec![flight("a", FlightKind::Arr, "00:05")];
        let blocks = build_blocks(&flights, &Buffers::default());

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start, -10);
        assert_eq!(blocks[0].clamped_start, 0);
        assert_eq!(blocks[0].clamped_end, 10);
    }

    #[test]
    fn discards_block_degenerate_after_clamping() {
        // DEP at 00:00 with no trailing buffer collapses to [0, 0].
        let buffers = Buffers {
            dep_before: 10,
            dep_after: 0,
            ..Buffers::default()
        };
        let flights = vec![flight("d", FlightKind::Dep, "00:00")];
        assert!(build_blocks(&flights, &buffers).is_empty());
    }

    #[test]
    fn skips_unparsable_flights() {
        let flights = vec![
            flight("bad", FlightKind::Arr, "garbage"),
            flight("ok", FlightKind::Dep, "12:00"),
        ];
        let blocks = build_blocks(&flights, &Buffers::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id.as_str(), "ok");
    }

    #[test]
    fn sorts_by_clamped_start_regardless_of_entry_order() {
        let flights = vec![
            flight("late", FlightKind::Arr, "18:00"),
            flight("early", FlightKind::Arr, "06:00"),
        ];
        let blocks = build_blocks(&flights, &Buffers::default());
        assert!(blocks[0].clamped_start < blocks[1].clamped_start);
        assert_eq!(blocks[0].id.as_str(), "early");
    }

    #[test]
    fn merge_fuses_overlapping_blocks() {
        let merged = merge_blocks(&[block(100, 150), block(140, 200), block(300, 320)]);
        assert_eq!(
            merged,
            vec![
                MergedInterval {
                    start: 100,
                    end: 200
                },
                MergedInterval {
                    start: 300,
                    end: 320
                },
            ]
        );
    }

    #[test]
    fn merge_fuses_touching_blocks() {
        let merged = merge_blocks(&[block(100, 150), block(150, 200)]);
        assert_eq!(merged, vec![MergedInterval {
            start: 100,
            end: 200
        }]);
    }

    #[test]
    fn merge_keeps_contained_block_extent() {
        let merged = merge_blocks(&[block(100, 300), block(150, 200)]);
        assert_eq!(merged, vec![MergedInterval {
            start: 100,
            end: 300
        }]);
    }

    #[test]
    fn merge_of_empty_and_single_inputs() {
        assert!(merge_blocks(&[]).is_empty());
        assert_eq!(merge_blocks(&[block(5, 10)]), vec![MergedInterval {
            start: 5,
            end: 10
        }]);
    }

    #[test]
    fn merge_is_idempotent() {
        let flights = vec![
            flight("a", FlightKind::Arr, "10:00"),
            flight("b", FlightKind::Dep, "10:05"),
            flight("c", FlightKind::Arr, "11:00"),
        ];
        let merged = merge_blocks(&build_blocks(&flights, &Buffers::default()));

        // Feed the merged intervals back through as if they were blocks.
        let as_blocks: Vec<IfrBlock> = merged.iter().map(|m| block(m.start, m.end)).collect();
        assert_eq!(merge_blocks(&as_blocks), merged);
    }

    #[test]
    fn merge_is_independent_of_creation_order() {
        let mut forward = vec![
            flight("a", FlightKind::Arr, "10:00"),
            flight("b", FlightKind::Dep, "10:10"),
            flight("c", FlightKind::Arr, "14:00"),
        ];
        let merged_forward = merge_blocks(&build_blocks(&forward, &Buffers::default()));
        forward.reverse();
        let merged_reverse = merge_blocks(&build_blocks(&forward, &Buffers::default()));
        assert_eq!(merged_forward, merged_reverse);
    }
}
