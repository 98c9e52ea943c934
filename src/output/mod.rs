//! Output formatting for besober.
//!
//! This module provides formatters for displaying counters and streaks in
//! various formats.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::BeSoberError;
use crate::features::counters::Counter;
use crate::features::sobriety::{MonthGrid, SobrietyStatus};

pub use json::*;
pub use pretty::*;

/// Format counters based on output format
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn format_counters(counters: &[Counter], format: OutputFormat) -> Result<String, BeSoberError> {
    match format {
        OutputFormat::Pretty => Ok(format_counters_pretty(counters)),
        OutputFormat::Json => format_counters_json(counters),
    }
}

/// Format a single counter based on output format
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn format_counter(counter: &Counter, format: OutputFormat) -> Result<String, BeSoberError> {
    match format {
        OutputFormat::Pretty => Ok(format_counter_pretty(counter)),
        OutputFormat::Json => to_json(counter),
    }
}

/// Format the default counter status based on output format
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn format_status(status: &SobrietyStatus, format: OutputFormat) -> Result<String, BeSoberError> {
    match format {
        OutputFormat::Pretty => Ok(format_status_pretty(status)),
        OutputFormat::Json => to_json(status),
    }
}

/// Format a month calendar based on output format
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn format_calendar(
    grid: &MonthGrid,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, BeSoberError> {
    match format {
        OutputFormat::Pretty => Ok(format_calendar_pretty(grid, today)),
        OutputFormat::Json => format_calendar_json(grid),
    }
}
