use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use besober::cli::args::{Cli, Commands};
use besober::cli::commands;
use besober::config::{Config, Paths};
use besober::error::BeSoberError;
use besober::logging::{self, LogTarget};
use besober::tracker::Tracker;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        let code = e
            .downcast_ref::<BeSoberError>()
            .map_or(1, BeSoberError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load(&paths)?;
    config.general.color.apply();

    let target = if matches!(cli.command, Commands::Tui) {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(&config.logging, &paths, target)?;

    if let Commands::Completions { shell } = cli.command {
        println!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let tracker = Tracker::open(&paths, config)?;
    tracker.bootstrap()?;

    if matches!(cli.command, Commands::Tui) {
        besober::tui::run(&tracker)?;
        return Ok(());
    }

    let output = commands::dispatch(&tracker, cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
