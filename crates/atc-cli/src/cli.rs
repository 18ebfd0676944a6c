//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use atc_core::FlightKind;

/// Day timeline planner for tower controllers.
///
/// Enter the day's ARR/DEP times and get the IFR exclusion blocks, the VFR
/// windows between them, and a heads-up when the next block is close.
#[derive(Debug, Parser)]
#[command(name = "atc", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Plan date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a flight to the day's plan.
    Add {
        /// ARR or DEP.
        kind: FlightKind,

        /// Local time (HH:MM, HH.MM, or HHMM).
        time: String,
    },

    /// List the day's flights.
    List,

    /// Remove one flight by its list row number.
    Remove {
        /// Row number as shown by `atc list` (1-based).
        row: usize,
    },

    /// Drop the day's plan entirely (flights, buffers, daylight settings).
    Clear,

    /// Bulk-import flights from stdin, one `ARR 10:15` / `DEP,11:05` per line.
    Paste,

    /// Show or update the exclusion buffers.
    Buffers {
        /// Minutes blocked before an arrival.
        #[arg(long)]
        arr_before: Option<u16>,

        /// Minutes blocked after an arrival.
        #[arg(long)]
        arr_after: Option<u16>,

        /// Minutes blocked before a departure.
        #[arg(long)]
        dep_before: Option<u16>,

        /// Minutes blocked after a departure.
        #[arg(long)]
        dep_after: Option<u16>,
    },

    /// Control the daylight restriction.
    Daylight {
        #[command(subcommand)]
        action: DaylightAction,
    },

    /// Render the day's timetable.
    Timetable {
        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Daylight restriction subcommands.
#[derive(Debug, Subcommand)]
pub enum DaylightAction {
    /// Restrict the timetable to sunrise-sunset.
    On,

    /// Use the full 24h day.
    Off,

    /// Set sunrise and sunset manually.
    Set {
        /// Sunrise time (HH:MM, HH.MM, or HHMM).
        sunrise: String,

        /// Sunset time (HH:MM, HH.MM, or HHMM).
        sunset: String,
    },
}
