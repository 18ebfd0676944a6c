//! CLI subcommand implementations.

pub mod buffers;
pub mod daylight;
pub mod flights;
pub mod paste;
pub mod timetable;
