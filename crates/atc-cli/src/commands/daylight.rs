//! Daylight restriction command.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;

use atc_core::{ActiveWindow, format_minutes, parse_time};
use atc_plan::PlanStore;

use crate::cli::DaylightAction;

pub fn run<W: Write>(
    writer: &mut W,
    store: &PlanStore,
    date: NaiveDate,
    action: &DaylightAction,
) -> Result<()> {
    let mut plan = store.load_or_default(date)?;

    match action {
        DaylightAction::On => plan.daylight.enabled = true,
        DaylightAction::Off => plan.daylight.enabled = false,
        DaylightAction::Set { sunrise, sunset } => {
            let Some(sunrise) = parse_time(sunrise) else {
                bail!("sunrise \"{sunrise}\" does not parse (use HH:MM, HH.MM, or HHMM)");
            };
            let Some(sunset) = parse_time(sunset) else {
                bail!("sunset \"{sunset}\" does not parse (use HH:MM, HH.MM, or HHMM)");
            };
            plan.daylight.sunrise = sunrise;
            plan.daylight.sunset = sunset;
            if ActiveWindow::daylight(sunrise, sunset).is_none() {
                writeln!(
                    writer,
                    "Warning: sunset is not after sunrise; the timetable will use the full day"
                )?;
            }
        }
    }
    store.save(&mut plan)?;

    let d = plan.daylight;
    let state = if d.enabled { "on" } else { "off" };
    writeln!(
        writer,
        "Daylight restriction {state} ({} - {})",
        format_minutes(d.sunrise),
        format_minutes(d.sunset)
    )?;
    Ok(())
}
