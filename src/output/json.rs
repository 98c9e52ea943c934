//! JSON output formatting for besober.

use serde::Serialize;
use serde_json::json;

use crate::error::BeSoberError;
use crate::features::counters::Counter;
use crate::features::sobriety::MonthGrid;

/// Format counters as JSON
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn format_counters_json(counters: &[Counter]) -> Result<String, BeSoberError> {
    let output = json!({
        "count": counters.len(),
        "items": counters
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a month calendar as JSON, listing only the marked dates
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn format_calendar_json(grid: &MonthGrid) -> Result<String, BeSoberError> {
    let marked: Vec<String> = grid
        .weeks
        .iter()
        .flatten()
        .flatten()
        .filter(|d| d.marked)
        .map(|d| d.date.to_string())
        .collect();

    let output = json!({
        "year": grid.year,
        "month": grid.month,
        "marked_count": marked.len(),
        "marked": marked
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `BeSoberError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, BeSoberError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sobriety::StreakRange;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_counters_json() {
        let counters = vec![Counter {
            id: 1,
            name: "No Sugar".to_string(),
            start_date: day(2024, 5, 1),
            last_updated: day(2024, 5, 2),
            counter: 1,
        }];

        let json = format_counters_json(&counters).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["items"][0]["name"], "No Sugar");
        assert_eq!(parsed["items"][0]["last_updated"], "2024-05-02");
    }

    #[test]
    fn test_format_counters_json_empty() {
        let json = format_counters_json(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["count"], 0);
        assert!(parsed["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_calendar_json() {
        let grid = MonthGrid::build(
            day(2024, 3, 1),
            Some(StreakRange::new(day(2024, 2, 28), 2)),
            day(2024, 3, 1),
        );

        let json = format_calendar_json(&grid).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["month"], 3);
        assert_eq!(parsed["marked_count"], 1);
        assert_eq!(parsed["marked"][0], "2024-03-01");
    }
}
