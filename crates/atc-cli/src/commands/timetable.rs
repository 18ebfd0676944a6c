//! Timetable rendering: the day's blocks, windows, totals, and warnings.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use atc_core::{
    ActiveWindow, DaySchedule, ImminentBlock, VfrClass, format_minutes, imminent_block,
};
use atc_plan::PlanStore;

use crate::Config;

/// Minutes represented by one cell of the text strip.
const STRIP_SLOT_MINUTES: i32 = 15;

/// Machine-readable timetable output.
#[derive(Debug, Serialize)]
struct TimetableReport<'a> {
    date: NaiveDate,
    window: ActiveWindow,
    schedule: &'a DaySchedule,
    imminent: Option<ImminentBlock>,
}

/// Renders the day's timetable.
///
/// `now_minutes` must be `Some` only when the plan date is the real current
/// day; passing it for any other day would produce stale warnings.
pub fn run<W: Write>(
    writer: &mut W,
    store: &PlanStore,
    config: &Config,
    date: NaiveDate,
    now_minutes: Option<f64>,
    json: bool,
) -> Result<()> {
    let plan = store.load_or_default(date)?;
    let window = plan.daylight.active_window();
    let schedule = atc_core::compute_schedule(
        &plan.flights,
        &plan.buffers,
        window,
        config.vfr_thresholds(),
    );
    let imminent =
        now_minutes.and_then(|now| imminent_block(&schedule.merged, now, config.lookahead_minutes));

    if json {
        let report = TimetableReport {
            date,
            window,
            schedule: &schedule,
            imminent,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        return Ok(());
    }

    let mode = if plan.daylight.enabled {
        format!(
            "daylight {} - {}",
            format_minutes(window.start),
            format_minutes(window.end)
        )
    } else {
        "24h".to_string()
    };
    writeln!(writer, "Timetable for {date} ({mode})")?;

    if let Some(warning) = imminent {
        writeln!(
            writer,
            "!! IFR in {} min (next block starts {})",
            warning.minutes_until_start,
            format_minutes(warning.start)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "{}", strip(&schedule, window))?;
    writeln!(
        writer,
        "one cell = {STRIP_SLOT_MINUTES} min | # IFR  = VFR recommended  - VFR possible  . short gap  · outside window"
    )?;

    writeln!(writer)?;
    writeln!(writer, "IFR blocks:")?;
    if schedule.blocks.is_empty() {
        writeln!(writer, "  (none)")?;
    }
    for block in &schedule.blocks {
        writeln!(
            writer,
            "  {} - {}  {} {}",
            format_minutes(block.clamped_start),
            format_minutes(block.clamped_end),
            block.kind,
            format_minutes(block.anchor)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "VFR windows:")?;
    let mut shown = 0;
    for vfr in &schedule.windows {
        if vfr.class == VfrClass::None {
            continue; // too short to use; kept only in JSON output
        }
        shown += 1;
        writeln!(
            writer,
            "  {} - {}  {:>4} min  {}",
            format_minutes(vfr.start),
            format_minutes(vfr.end),
            vfr.length,
            vfr.class
        )?;
    }
    if shown == 0 {
        writeln!(writer, "  (none)")?;
    }

    writeln!(writer)?;
    let totals = schedule.totals;
    writeln!(writer, "IFR blocked:     {:>4} min", totals.ifr_minutes)?;
    writeln!(
        writer,
        "VFR recommended: {:>4} min",
        totals.vfr_recommended_minutes
    )?;
    writeln!(
        writer,
        "VFR possible:    {:>4} min",
        totals.vfr_possible_minutes
    )?;
    Ok(())
}

/// One character per 15-minute slot across the whole day.
fn strip(schedule: &DaySchedule, window: ActiveWindow) -> String {
    let mut out = String::new();
    let mut slot_start = 0;
    while slot_start < atc_core::MINUTES_PER_DAY {
        // Classify the slot by its midpoint.
        let t = slot_start + STRIP_SLOT_MINUTES / 2;
        out.push(slot_char(schedule, window, t));
        slot_start += STRIP_SLOT_MINUTES;
    }
    out
}

fn slot_char(schedule: &DaySchedule, window: ActiveWindow, t: i32) -> char {
    if t < window.start || t >= window.end {
        return '·';
    }
    if schedule.merged.iter().any(|m| m.start <= t && t < m.end) {
        return '#';
    }
    match schedule
        .windows
        .iter()
        .find(|w| w.start <= t && t < w.end)
        .map(|w| w.class)
    {
        Some(VfrClass::Recommended) => '=',
        Some(VfrClass::Possible) => '-',
        _ => '.',
    }
}
