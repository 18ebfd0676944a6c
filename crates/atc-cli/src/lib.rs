//! ATC day timeline CLI library.
//!
//! This crate provides the CLI interface for the day timeline planner.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, DaylightAction};
pub use config::Config;
