use std::io::Read;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Timelike};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use atc_cli::commands::{buffers, daylight, flights, paste, timetable};
use atc_cli::{Cli, Commands, Config};
use atc_plan::PlanStore;

/// Load config and open the plan store.
fn open_store(config_path: Option<&std::path::Path>) -> Result<(PlanStore, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let store = PlanStore::open(&config.plans_dir).with_context(|| {
        format!("failed to open plan store at {}", config.plans_dir.display())
    })?;
    Ok((store, config))
}

/// Fractional minutes past local midnight, seconds included.
fn now_minutes_local() -> f64 {
    let now = Local::now();
    f64::from(now.hour() * 60 + now.minute()) + f64::from(now.second()) / 60.0
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let today = Local::now().date_naive();
    let date: NaiveDate = cli.date.unwrap_or(today);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Add { kind, time }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            flights::add(&mut out, &store, date, *kind, time)?;
        }
        Some(Commands::List) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            flights::list(&mut out, &store, date)?;
        }
        Some(Commands::Remove { row }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            flights::remove(&mut out, &store, date, *row)?;
        }
        Some(Commands::Clear) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            flights::clear(&mut out, &store, date)?;
        }
        Some(Commands::Paste) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read pasted input from stdin")?;
            paste::run(&mut out, &store, date, &text)?;
        }
        Some(Commands::Buffers {
            arr_before,
            arr_after,
            dep_before,
            dep_after,
        }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            let update = buffers::BufferUpdate {
                arr_before: *arr_before,
                arr_after: *arr_after,
                dep_before: *dep_before,
                dep_after: *dep_after,
            };
            buffers::run(&mut out, &store, date, update)?;
        }
        Some(Commands::Daylight { action }) => {
            let (store, _config) = open_store(cli.config.as_deref())?;
            daylight::run(&mut out, &store, date, action)?;
        }
        Some(Commands::Timetable { json }) => {
            let (store, config) = open_store(cli.config.as_deref())?;
            // Imminent warnings only make sense for the real current day.
            let now = (date == today).then(now_minutes_local);
            timetable::run(&mut out, &store, &config, date, now, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
