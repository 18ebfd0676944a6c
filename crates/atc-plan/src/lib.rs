//! Day-plan model and storage for the ATC day timeline.
//!
//! A plan is everything the controller entered for one calendar date:
//! flights, buffer configuration, daylight settings, and display toggles.
//! Plans persist as one JSON document per date under a data directory.
//!
//! Loading is deliberately lenient: a missing, corrupt, or mismatched file
//! yields "no plan" rather than an error, so a damaged store never blocks
//! the day's planning. Saving reports real I/O failures.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use atc_core::{ActiveWindow, Buffers, Flight};

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An error from the filesystem.
    #[error("plan store I/O error: {0}")]
    Io(#[from] io::Error),
    /// A plan failed to serialize.
    #[error("failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Daylight restriction settings for one day.
///
/// `sunrise`/`sunset` are minutes past midnight, supplied by an external
/// astronomical service or entered manually. They are kept even while the
/// restriction is disabled so toggling it back preserves the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaylightSetting {
    pub enabled: bool,
    pub sunrise: i32,
    pub sunset: i32,
}

impl Default for DaylightSetting {
    fn default() -> Self {
        Self {
            enabled: true,
            sunrise: 8 * 60,
            sunset: 16 * 60 + 30,
        }
    }
}

impl DaylightSetting {
    /// The active window this setting implies.
    ///
    /// An enabled restriction with an invalid sunrise/sunset pair falls
    /// back to the unrestricted day, as the engine contract requires of
    /// its callers.
    #[must_use]
    pub fn active_window(&self) -> ActiveWindow {
        if self.enabled {
            ActiveWindow::daylight(self.sunrise, self.sunset).unwrap_or_default()
        } else {
            ActiveWindow::full_day()
        }
    }
}

/// One calendar day's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub buffers: Buffers,
    #[serde(default)]
    pub daylight: DaylightSetting,
    /// Whether the presentation layer shows the current-time marker.
    #[serde(default = "default_show_now")]
    pub show_now: bool,
    #[serde(default = "Utc::now")]
    pub saved_at: DateTime<Utc>,
}

fn default_show_now() -> bool {
    true
}

impl DayPlan {
    /// An empty plan for the given date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            flights: Vec::new(),
            buffers: Buffers::default(),
            daylight: DaylightSetting::default(),
            show_now: true,
            saved_at: Utc::now(),
        }
    }
}

/// File-backed plan store, one JSON document per calendar date.
pub struct PlanStore {
    dir: PathBuf,
}

impl PlanStore {
    /// Opens a store rooted at `dir`, creating the directory if necessary.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the plan file for a date (`<dir>/2025-03-14.json`).
    #[must_use]
    pub fn plan_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{date}.json"))
    }

    /// Loads the plan for a date, if a readable one exists.
    ///
    /// Corrupt files and files whose recorded date does not match the
    /// requested date are treated as absent.
    pub fn load(&self, date: NaiveDate) -> Result<Option<DayPlan>, StoreError> {
        let path = self.plan_path(date);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<DayPlan>(&raw) {
            Ok(plan) if plan.date == date => Ok(Some(plan)),
            Ok(plan) => {
                tracing::warn!(
                    path = %path.display(),
                    recorded = %plan.date,
                    requested = %date,
                    "plan file date mismatch, ignoring"
                );
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "corrupt plan file, ignoring");
                Ok(None)
            }
        }
    }

    /// Loads the plan for a date, or returns a fresh empty one.
    pub fn load_or_default(&self, date: NaiveDate) -> Result<DayPlan, StoreError> {
        Ok(self.load(date)?.unwrap_or_else(|| DayPlan::new(date)))
    }

    /// Saves a plan under its date, stamping `saved_at`.
    pub fn save(&self, plan: &mut DayPlan) -> Result<(), StoreError> {
        plan.saved_at = Utc::now();
        let json = serde_json::to_string_pretty(plan)?;
        std::fs::write(self.plan_path(plan.date), json)?;
        tracing::debug!(date = %plan.date, "plan saved");
        Ok(())
    }

    /// Removes the stored plan for a date. Missing files are fine.
    pub fn delete(&self, date: NaiveDate) -> Result<(), StoreError> {
        match std::fs::remove_file(self.plan_path(date)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// The directory plans are stored in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
