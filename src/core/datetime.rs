//! Date and instant helpers shared by the stores.
//!
//! Calendar dates are persisted as `YYYY-MM-DD` so that SQL string
//! comparison orders them chronologically. Instants are persisted as
//! RFC 3339 in UTC.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::BeSoberError;

/// Storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date for storage.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored calendar date.
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if the text is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, BeSoberError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| BeSoberError::Parse(format!("Invalid date '{s}': {e}")))
}

/// Format an instant for storage.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored instant.
///
/// Accepts RFC 3339 as well as a bare `YYYY-MM-DD`, which is read as
/// midnight UTC.
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if the text is neither form.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, BeSoberError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    parse_date(s)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| BeSoberError::Parse(format!("Invalid timestamp '{s}'")))
}

/// Parse a `YYYY-MM` month argument into its first day.
///
/// # Errors
///
/// Returns `BeSoberError::InvalidInput` if the text is not a valid month.
pub fn parse_month(s: &str) -> Result<NaiveDate, BeSoberError> {
    let (year, month) = s
        .trim()
        .split_once('-')
        .ok_or_else(|| BeSoberError::InvalidInput(format!("Expected YYYY-MM, got '{s}'")))?;

    let year: i32 = year
        .parse()
        .map_err(|_| BeSoberError::InvalidInput(format!("Invalid year in '{s}'")))?;
    let month: u32 = month
        .parse()
        .map_err(|_| BeSoberError::InvalidInput(format!("Invalid month in '{s}'")))?;

    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| BeSoberError::InvalidInput(format!("Invalid month '{s}'")))
}
