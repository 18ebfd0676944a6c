//! Bulk-paste import: one `ARR 10:15` / `DEP,11:05` entry per line.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use atc_core::{Flight, FlightId, FlightKind, parse_time};
use atc_plan::PlanStore;

/// Extracts `(kind, time)` entries from pasted text.
///
/// Tabs count as separators; fields split on commas, semicolons, and
/// spaces. Lines without a recognizable kind or a parseable time are
/// skipped silently, so a sloppy paste imports what it can.
#[must_use]
pub fn parse_paste(text: &str) -> Vec<(FlightKind, String)> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let cleaned = line.trim().replace('\t', ",");
        let mut parts = cleaned
            .split(|c| matches!(c, ',' | ';' | ' '))
            .filter(|part| !part.is_empty());

        let (Some(kind), Some(time)) = (parts.next(), parts.next()) else {
            continue;
        };
        let Ok(kind) = kind.parse::<FlightKind>() else {
            continue;
        };
        if parse_time(time).is_none() {
            continue;
        }
        entries.push((kind, time.to_string()));
    }
    entries
}

/// Imports pasted entries into the day's plan.
pub fn run<W: Write>(writer: &mut W, store: &PlanStore, date: NaiveDate, text: &str) -> Result<()> {
    let entries = parse_paste(text);
    if entries.is_empty() {
        writeln!(writer, "No importable lines found")?;
        return Ok(());
    }

    let mut plan = store.load_or_default(date)?;
    let imported = entries.len();
    for (kind, time) in entries {
        let id =
            FlightId::new(Uuid::new_v4().to_string()).context("generated flight ID was empty")?;
        plan.flights.push(Flight::new(id, kind, &time));
    }
    store.save(&mut plan)?;

    writeln!(writer, "Imported {imported} flights into {date}")?;
    Ok(())
}
