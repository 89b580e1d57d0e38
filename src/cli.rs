use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac calendar date-grid engine.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Calendar month grids with month navigation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the grid of one month.
    Month(MonthArgs),
    /// Print every month of an interval.
    Calendar(CalendarArgs),
    /// Replay navigation events against a month view.
    Navigate(NavigateArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct ViewArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the first weekday from config (e.g. `sunday`, `mon`).
    #[arg(long = "first-weekday")]
    pub first_weekday: Option<String>,

    /// Hide the month title header.
    #[arg(long = "no-header")]
    pub no_header: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Month to show as `YYYY-MM`; overrides the configured initial month.
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// First month as `YYYY-MM`; overrides the configured initial month.
    #[arg(short, long)]
    pub from: Option<String>,

    /// Number of months to show; overrides config.
    #[arg(short = 'n', long)]
    pub months: Option<u32>,
}

/// Arguments for the `navigate` subcommand.
#[derive(clap::Args)]
pub struct NavigateArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Starting month as `YYYY-MM`; overrides the configured initial month.
    #[arg(short, long)]
    pub month: Option<String>,

    /// Comma-separated events: `prev`, `next`, `today`, `move:<dx>`, `drag:<dx>`.
    #[arg(short, long)]
    pub events: String,
}
