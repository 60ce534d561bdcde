use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Lunar phase calendar.
#[derive(Parser)]
#[command(
    name = "lunacal",
    version,
    about = "Next full moon, monthly moon calendars, and the eight lunar phases"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Find the next full moon and the days remaining until it.
    NextFullMoon(NextFullMoonArgs),
    /// Show a month grid with daily illumination and phase.
    Calendar(CalendarArgs),
    /// List the eight lunar phases in cycle order.
    Phases(PhasesArgs),
}

/// Arguments for the `next-full-moon` subcommand.
#[derive(clap::Args)]
pub struct NextFullMoonArgs {
    /// Search from this instant (RFC 3339) instead of the system clock.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Override the number of days to scan.
    #[arg(long = "horizon-days")]
    pub horizon_days: Option<u32>,

    /// Override the phase-age tolerance around full.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Year to show (defaults to the current year).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month to show, 1 = January (defaults to the current month).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Move this many months forward (or backward when negative).
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub shift: i32,

    /// Override the first weekday column (e.g. "sunday", "mon").
    #[arg(long = "week-start")]
    pub week_start: Option<String>,

    /// Override the local UTC offset in minutes.
    #[arg(long = "utc-offset", allow_negative_numbers = true)]
    pub utc_offset_minutes: Option<i32>,

    /// Treat this instant (RFC 3339) as now when picking the default month.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Print the grid as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `phases` subcommand.
#[derive(clap::Args)]
pub struct PhasesArgs {
    /// Mark the phase at this instant (RFC 3339) instead of the system clock.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,

    /// Print the phases as JSON.
    #[arg(long)]
    pub json: bool,
}
