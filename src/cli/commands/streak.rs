//! Default streak commands: status, reset and calendar.

use crate::cli::args::OutputFormat;
use crate::core::parse_month;
use crate::error::BeSoberError;
use crate::features::sobriety::MonthGrid;
use crate::output::{format_calendar, format_reset_pretty, format_status, to_json};
use crate::tracker::Tracker;

fn not_initialized() -> BeSoberError {
    BeSoberError::NotFound("Sobriety counter has not been initialized".to_string())
}

/// Execute the status command.
///
/// # Errors
///
/// Returns an error if the default counter cannot be read.
pub fn status(tracker: &Tracker, format: OutputFormat) -> Result<String, BeSoberError> {
    let goal = tracker.config().streak.progress_goal_days;
    let status = tracker
        .sobriety()
        .status(goal)?
        .ok_or_else(not_initialized)?;
    format_status(&status, format)
}

/// Execute the reset command.
///
/// # Errors
///
/// Returns `InvalidInput` without `force`, or a storage error.
pub fn reset(tracker: &Tracker, force: bool, format: OutputFormat) -> Result<String, BeSoberError> {
    if !force {
        return Err(BeSoberError::InvalidInput(
            "Resetting ends your current streak. Re-run with --force to confirm.".to_string(),
        ));
    }

    let counter = tracker.sobriety().reset()?.ok_or_else(not_initialized)?;

    match format {
        OutputFormat::Json => to_json(&counter),
        OutputFormat::Pretty => Ok(format_reset_pretty(&counter)),
    }
}

/// Execute the calendar command.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed month, or a storage error.
pub fn calendar(
    tracker: &Tracker,
    month: Option<&str>,
    format: OutputFormat,
) -> Result<String, BeSoberError> {
    let today = tracker.clock().today();
    let shown = month.map(parse_month).transpose()?.unwrap_or(today);
    let streak = tracker.sobriety().streak_range()?;

    let grid = MonthGrid::build(shown, streak, today);
    format_calendar(&grid, today, format)
}
