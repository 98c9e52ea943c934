use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "besober")]
#[command(about = "Track sobriety streaks and daily habit counters from the terminal")]
#[command(long_about = "besober - sobriety and habit streak tracker

Keeps a permanent sobriety streak with your longest streak on record,
plus any number of personal day counters. Counters advance by one day
each calendar day the first time besober runs.

QUICK START:
  besober status                 Show your current streak
  besober counter add \"No Sugar\" Start a new counter
  besober counter list           List counters
  besober calendar               Show this month with streak days marked
  besober tui                    Open the dashboard

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

Data lives in ~/.besober (override with BESOBER_HOME).")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current sobriety streak
    ///
    /// Displays days since the streak started, the longest streak on
    /// record, and progress toward the configured goal.
    ///
    /// # Examples
    ///
    ///   besober status
    ///   besober s -o json
    #[command(alias = "s")]
    Status,

    /// Reset the sobriety streak
    ///
    /// Starts the streak over from now. If the streak being ended is the
    /// longest so far, it becomes the new longest streak.
    ///
    /// # Examples
    ///
    ///   besober reset --force
    Reset {
        /// Confirm the reset
        #[arg(short, long)]
        force: bool,
    },

    /// Show a month calendar with streak days marked
    ///
    /// # Examples
    ///
    ///   besober calendar
    ///   besober calendar --month 2024-03
    #[command(alias = "cal")]
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Manage personal day counters
    #[command(alias = "c")]
    Counter(CounterArgs),

    /// Open the interactive dashboard
    Tui,

    /// Print a shell completion script
    ///
    /// # Examples
    ///
    ///   besober completions zsh > ~/.zsh/completions/_besober
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the counter command.
#[derive(Args)]
pub struct CounterArgs {
    #[command(subcommand)]
    pub command: CounterCommands,
}

/// Counter subcommands.
#[derive(Subcommand)]
pub enum CounterCommands {
    /// Start a new counter from today
    Add {
        /// Counter name
        name: String,
    },

    /// List all counters
    #[command(alias = "ls")]
    List,

    /// Restart a counter from today
    Reset {
        /// Counter id
        id: i64,
    },

    /// Rename a counter
    Rename {
        /// Counter id
        id: i64,
        /// New name
        name: String,
    },

    /// Delete a counter
    #[command(alias = "rm")]
    Delete {
        /// Counter id
        id: i64,
        /// Confirm the deletion
        #[arg(short, long)]
        force: bool,
    },

    /// Insert the example counters
    Seed,
}
