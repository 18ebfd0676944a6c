//! Flight entry commands: add, list, remove, clear.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use uuid::Uuid;

use atc_core::{Flight, FlightId, FlightKind, parse_time};
use atc_plan::PlanStore;

/// Adds one flight to the day's plan.
///
/// An unparsable time is stored and flagged rather than rejected; the
/// engine will skip it until the controller fixes the entry.
pub fn add<W: Write>(
    writer: &mut W,
    store: &PlanStore,
    date: NaiveDate,
    kind: FlightKind,
    time: &str,
) -> Result<()> {
    let mut plan = store.load_or_default(date)?;

    let id = FlightId::new(Uuid::new_v4().to_string()).context("generated flight ID was empty")?;
    let flight = Flight::new(id, kind, time);
    let parsed = flight.minutes().is_some();
    let display_time = flight.time.clone();
    plan.flights.push(flight);
    store.save(&mut plan)?;

    if parsed {
        writeln!(writer, "Added {kind} {display_time} ({} flights)", plan.flights.len())?;
    } else {
        writeln!(
            writer,
            "Added {kind} \"{display_time}\" - time does not parse (use HH:MM, HH.MM, or HHMM); \
             it will be ignored by the timetable until fixed"
        )?;
    }
    Ok(())
}

/// Lists the day's flights with their parse status.
pub fn list<W: Write>(writer: &mut W, store: &PlanStore, date: NaiveDate) -> Result<()> {
    let plan = store.load_or_default(date)?;

    writeln!(writer, "Flights for {date}:")?;
    if plan.flights.is_empty() {
        writeln!(writer, "(none)")?;
        return Ok(());
    }
    for (row, flight) in plan.flights.iter().enumerate() {
        let marker = if parse_time(&flight.time).is_some() {
            ""
        } else {
            "  [invalid time]"
        };
        writeln!(writer, "{:>3}. {} {}{marker}", row + 1, flight.kind, flight.time)?;
    }
    Ok(())
}

/// Removes one flight by its 1-based list row.
pub fn remove<W: Write>(writer: &mut W, store: &PlanStore, date: NaiveDate, row: usize) -> Result<()> {
    let mut plan = store.load_or_default(date)?;

    if row == 0 || row > plan.flights.len() {
        bail!(
            "no flight at row {row}; the plan for {date} has {} flights",
            plan.flights.len()
        );
    }
    let flight = plan.flights.remove(row - 1);
    store.save(&mut plan)?;

    writeln!(writer, "Removed {} {}", flight.kind, flight.time)?;
    Ok(())
}

/// Drops the entire stored plan for the date.
pub fn clear<W: Write>(writer: &mut W, store: &PlanStore, date: NaiveDate) -> Result<()> {
    store.delete(date)?;
    writeln!(writer, "Cleared plan for {date}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (tempfile::TempDir, PlanStore, NaiveDate) {
        let temp = tempfile::tempdir().unwrap();
        let store = PlanStore::open(temp.path().join("plans")).unwrap();
        (temp, store, "2025-03-14".parse().unwrap())
    }

    #[test]
    fn add_normalizes_and_persists() {
        let (_temp, store, date) = setup();
        let mut out = Vec::new();
        add(&mut out, &store, date, FlightKind::Arr, "0735").unwrap();

        let plan = store.load(date).unwrap().unwrap();
        assert_eq!(plan.flights.len(), 1);
        assert_eq!(plan.flights[0].time, "07:35");
        assert!(String::from_utf8(out).unwrap().contains("Added ARR 07:35"));
    }

    #[test]
    fn add_keeps_unparsable_time_with_warning() {
        let (_temp, store, date) = setup();
        let mut out = Vec::new();
        add(&mut out, &store, date, FlightKind::Dep, "25:99").unwrap();

        let plan = store.load(date).unwrap().unwrap();
        assert_eq!(plan.flights.len(), 1);
        assert!(String::from_utf8(out).unwrap().contains("does not parse"));
    }

    #[test]
    fn list_marks_invalid_times() {
        let (_temp, store, date) = setup();
        add(&mut Vec::new(), &store, date, FlightKind::Arr, "10:00").unwrap();
        add(&mut Vec::new(), &store, date, FlightKind::Dep, "bogus").unwrap();

        let mut out = Vec::new();
        list(&mut out, &store, date).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("1. ARR 10:00"));
        assert!(out.contains("2. DEP bogus  [invalid time]"));
    }

    #[test]
    fn remove_by_row() {
        let (_temp, store, date) = setup();
        add(&mut Vec::new(), &store, date, FlightKind::Arr, "10:00").unwrap();
        add(&mut Vec::new(), &store, date, FlightKind::Dep, "10:40").unwrap();

        let mut out = Vec::new();
        remove(&mut out, &store, date, 1).unwrap();

        let plan = store.load(date).unwrap().unwrap();
        assert_eq!(plan.flights.len(), 1);
        assert_eq!(plan.flights[0].kind, FlightKind::Dep);
    }

    #[test]
    fn remove_out_of_range_fails() {
        let (_temp, store, date) = setup();
        assert!(remove(&mut Vec::new(), &store, date, 1).is_err());
        assert!(remove(&mut Vec::new(), &store, date, 0).is_err());
    }

    #[test]
    fn clear_drops_the_stored_plan() {
        let (_temp, store, date) = setup();
        add(&mut Vec::new(), &store, date, FlightKind::Arr, "10:00").unwrap();

        clear(&mut Vec::new(), &store, date).unwrap();
        assert!(store.load(date).unwrap().is_none());
    }
}
