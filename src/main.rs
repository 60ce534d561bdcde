mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod full_moon_cmd;
mod logging;
mod phases_cmd;
mod render;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LunacalConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LunacalConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::NextFullMoon(args) => full_moon_cmd::run(args, &config),
        Command::Calendar(args) => calendar_cmd::run(args, &config),
        Command::Phases(args) => phases_cmd::run(args),
    }
}
