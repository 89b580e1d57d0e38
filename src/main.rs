mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod month_cmd;
mod navigate_cmd;
mod text;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => month_cmd::run(args),
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Navigate(args) => navigate_cmd::run(args),
    }
}
