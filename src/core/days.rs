//! Day arithmetic for streaks.

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Clock;

const SECONDS_PER_DAY: i64 = 86_400;

/// How the number of streak days between a start instant and now is counted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DayCounting {
    /// Count local calendar-date boundaries crossed. DST changes do not
    /// shift the result.
    #[default]
    Calendar,
    /// Count whole 24-hour periods elapsed.
    Elapsed,
}

impl DayCounting {
    /// Streak days from `start` to the clock's current instant.
    ///
    /// Never negative: a start in the future counts as zero days.
    #[must_use]
    pub fn days_since(self, start: DateTime<Utc>, clock: &dyn Clock) -> i64 {
        let now = clock.now();
        match self {
            Self::Calendar => calendar_days(clock.local_date(start), clock.local_date(now)),
            Self::Elapsed => elapsed_days(start, now),
        }
    }
}

/// Whole 24-hour periods between two instants, floored, clamped at zero.
#[must_use]
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((now - start).num_seconds() / SECONDS_PER_DAY).max(0)
}

/// Calendar days from `start` to `end`, clamped at zero.
#[must_use]
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_elapsed_days_floors() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 22, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 21, 59, 59).unwrap();
        assert_eq!(elapsed_days(start, now), 1);

        let now = Utc.with_ymd_and_hms(2024, 1, 3, 22, 0, 0).unwrap();
        assert_eq!(elapsed_days(start, now), 2);
    }

    #[test]
    fn test_future_start_clamps_to_zero() {
        let start = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(elapsed_days(start, now), 0);
        assert_eq!(
            calendar_days(start.date_naive(), now.date_naive()),
            0
        );
    }

    #[test]
    fn test_calendar_vs_elapsed() {
        // Started late evening, checked next morning: one calendar day,
        // zero full days.
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 23, 0, 0).unwrap();
        let clock = FixedClock::utc(Utc.with_ymd_and_hms(2024, 4, 2, 7, 0, 0).unwrap());

        assert_eq!(DayCounting::Calendar.days_since(start, &clock), 1);
        assert_eq!(DayCounting::Elapsed.days_since(start, &clock), 0);
    }

    #[test]
    fn test_calendar_uses_clock_offset() {
        // 21:00 UTC is 00:00 the next day at UTC+3
        let start = Utc.with_ymd_and_hms(2024, 4, 1, 20, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 21, 0, 0).unwrap();
        let clock = FixedClock::new(now, FixedOffset::east_opt(3 * 3600).unwrap());

        assert_eq!(DayCounting::Calendar.days_since(start, &clock), 1);
        assert_eq!(DayCounting::Elapsed.days_since(start, &clock), 0);
    }
}
