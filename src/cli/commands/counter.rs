//! Counter command implementation.
//!
//! Handles creating, listing and editing personal day counters.

use colored::Colorize;

use crate::cli::args::{CounterCommands, OutputFormat};
use crate::error::BeSoberError;
use crate::output::{format_counter, format_counters, to_json};
use crate::tracker::Tracker;

/// Execute counter subcommands.
///
/// # Errors
///
/// Returns an error if a storage operation fails, the input is invalid, or
/// the referenced counter does not exist.
pub fn counter(
    tracker: &Tracker,
    cmd: CounterCommands,
    format: OutputFormat,
) -> Result<String, BeSoberError> {
    match cmd {
        CounterCommands::Add { name } => add_counter(tracker, &name, format),
        CounterCommands::List => list_counters(tracker, format),
        CounterCommands::Reset { id } => reset_counter(tracker, id, format),
        CounterCommands::Rename { id, name } => rename_counter(tracker, id, &name, format),
        CounterCommands::Delete { id, force } => delete_counter(tracker, id, force, format),
        CounterCommands::Seed => seed_counters(tracker, format),
    }
}

fn add_counter(tracker: &Tracker, name: &str, format: OutputFormat) -> Result<String, BeSoberError> {
    let counter = tracker.counters().create(name)?;

    match format {
        OutputFormat::Json => to_json(&counter),
        OutputFormat::Pretty => Ok(format!(
            "{} {} (#{})",
            "Added counter".green(),
            counter.name.bold(),
            counter.id
        )),
    }
}

fn list_counters(tracker: &Tracker, format: OutputFormat) -> Result<String, BeSoberError> {
    let counters = tracker.counters().list()?;
    format_counters(&counters, format)
}

fn reset_counter(tracker: &Tracker, id: i64, format: OutputFormat) -> Result<String, BeSoberError> {
    let store = tracker.counters();
    if !store.reset(id)? {
        return Err(not_found(id));
    }

    let counter = store.get(id)?.ok_or_else(|| not_found(id))?;
    match format {
        OutputFormat::Json => to_json(&counter),
        OutputFormat::Pretty => Ok(format!(
            "{} {} starts again today",
            "Reset:".yellow(),
            counter.name.bold()
        )),
    }
}

fn rename_counter(
    tracker: &Tracker,
    id: i64,
    name: &str,
    format: OutputFormat,
) -> Result<String, BeSoberError> {
    let store = tracker.counters();
    if !store.rename(id, name)? {
        return Err(not_found(id));
    }

    let counter = store.get(id)?.ok_or_else(|| not_found(id))?;
    format_counter(&counter, format)
}

fn delete_counter(
    tracker: &Tracker,
    id: i64,
    force: bool,
    format: OutputFormat,
) -> Result<String, BeSoberError> {
    let store = tracker.counters();
    let counter = store.get(id)?.ok_or_else(|| not_found(id))?;

    if !force {
        return Err(BeSoberError::InvalidInput(format!(
            "Deleting '{}' cannot be undone. Re-run with --force to confirm.",
            counter.name
        )));
    }

    store.delete(id)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "deleted": counter })),
        OutputFormat::Pretty => Ok(format!("{} {}", "Deleted:".red(), counter.name)),
    }
}

fn seed_counters(tracker: &Tracker, format: OutputFormat) -> Result<String, BeSoberError> {
    let seeded = tracker.counters().seed_demo()?;
    match format {
        OutputFormat::Json => format_counters(&seeded, format),
        OutputFormat::Pretty => Ok(format!(
            "{} {} example counters",
            "Added".green(),
            seeded.len()
        )),
    }
}

fn not_found(id: i64) -> BeSoberError {
    BeSoberError::NotFound(format!("No counter with id {id}"))
}
