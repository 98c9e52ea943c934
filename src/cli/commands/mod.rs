//! Command implementations for besober.
//!
//! Every command receives a bootstrapped [`Tracker`], so the daily rollover
//! has already run before anything is read.

mod completions;
mod counter;
mod streak;

pub use completions::completions;
pub use counter::counter;
pub use streak::{calendar, reset, status};

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::error::BeSoberError;
use crate::tracker::Tracker;

/// Execute a parsed command line against `tracker`.
///
/// Returns the text to print. The dashboard is handled by the binary since
/// it takes over the terminal.
///
/// # Errors
///
/// Returns the command's error.
pub fn dispatch(tracker: &Tracker, cli: Cli) -> Result<String, BeSoberError> {
    let format = output_format(&cli, tracker.config().general.default_output);

    match cli.command {
        Commands::Status => status(tracker, format),
        Commands::Reset { force } => reset(tracker, force, format),
        Commands::Calendar { month } => calendar(tracker, month.as_deref(), format),
        Commands::Counter(args) => counter(tracker, args.command, format),
        Commands::Completions { shell } => completions(shell),
        Commands::Tui => Err(BeSoberError::InvalidInput(
            "The dashboard must be started from the besober binary".to_string(),
        )),
    }
}

/// Resolve the output format for `cli` given the configured default.
#[must_use]
pub fn output_format(cli: &Cli, default: OutputFormat) -> OutputFormat {
    cli.output.unwrap_or(default)
}
