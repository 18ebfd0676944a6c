//! Buffer configuration command.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use atc_plan::PlanStore;

/// Requested buffer updates; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferUpdate {
    pub arr_before: Option<u16>,
    pub arr_after: Option<u16>,
    pub dep_before: Option<u16>,
    pub dep_after: Option<u16>,
}

impl BufferUpdate {
    fn is_empty(&self) -> bool {
        self.arr_before.is_none()
            && self.arr_after.is_none()
            && self.dep_before.is_none()
            && self.dep_after.is_none()
    }
}

/// Shows the day's buffers, applying any requested changes first.
pub fn run<W: Write>(
    writer: &mut W,
    store: &PlanStore,
    date: NaiveDate,
    update: BufferUpdate,
) -> Result<()> {
    let mut plan = store.load_or_default(date)?;

    if !update.is_empty() {
        if let Some(v) = update.arr_before {
            plan.buffers.arr_before = v;
        }
        if let Some(v) = update.arr_after {
            plan.buffers.arr_after = v;
        }
        if let Some(v) = update.dep_before {
            plan.buffers.dep_before = v;
        }
        if let Some(v) = update.dep_after {
            plan.buffers.dep_after = v;
        }
        store.save(&mut plan)?;
    }

    let b = plan.buffers;
    writeln!(writer, "Buffers for {date}:")?;
    writeln!(writer, "  ARR: -{} / +{} min", b.arr_before, b.arr_after)?;
    writeln!(writer, "  DEP: -{} / +{} min", b.dep_before, b.dep_after)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atc_core::Buffers;

    fn setup() -> (tempfile::TempDir, PlanStore, NaiveDate) {
        let temp = tempfile::tempdir().unwrap();
        let store = PlanStore::open(temp.path().join("plans")).unwrap();
        (temp, store, "2025-03-14".parse().unwrap())
    }

    #[test]
    fn show_without_update_reports_defaults() {
        let (_temp, store, date) = setup();
        let mut out = Vec::new();
        run(&mut out, &store, date, BufferUpdate::default()).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("ARR: -15 / +5 min"));
        assert!(out.contains("DEP: -10 / +5 min"));
        // A pure show must not create a plan file.
        assert!(store.load(date).unwrap().is_none());
    }

    #[test]
    fn partial_update_persists() {
        let (_temp, store, date) = setup();
        let update = BufferUpdate {
            arr_before: Some(20),
            ..BufferUpdate::default()
        };
        run(&mut Vec::new(), &store, date, update).unwrap();

        let plan = store.load(date).unwrap().unwrap();
        assert_eq!(plan.buffers, Buffers {
            arr_before: 20,
            ..Buffers::default()
        });
    }
}
