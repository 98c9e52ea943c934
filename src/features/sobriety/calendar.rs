//! Calendar data for the current streak.
//!
//! Computes which dates belong to the streak and lays a month out as
//! Monday-first weeks for rendering.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Inclusive range of dates covered by a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakRange {
    /// First streak day.
    pub start: NaiveDate,
    /// Last streak day.
    pub end: NaiveDate,
}

impl StreakRange {
    /// The range starting on `start` and spanning `days` further days.
    #[must_use]
    pub fn new(start: NaiveDate, days: i64) -> Self {
        let end = start + Duration::days(days.max(0));
        Self { start, end }
    }

    /// Whether `date` is a streak day.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every streak day in order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|d| *d <= self.end).collect()
    }
}

/// Fraction of `goal_days` reached by a streak of `days`, capped at 1.
#[must_use]
pub fn progress(days: i64, goal_days: u32) -> f64 {
    if goal_days == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = days.max(0) as f64 / f64::from(goal_days);
    ratio.min(1.0)
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The date shown.
    pub date: NaiveDate,
    /// Part of the current streak.
    pub marked: bool,
    /// Is today.
    pub today: bool,
}

/// A month laid out as Monday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Year shown.
    pub year: i32,
    /// Month shown (1-12).
    pub month: u32,
    /// Weeks; `None` pads days outside the month.
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthGrid {
    /// Lay out the month containing `any_day`.
    #[must_use]
    pub fn build(any_day: NaiveDate, streak: Option<StreakRange>, today: NaiveDate) -> Self {
        let first = any_day.with_day(1).unwrap_or(any_day);
        let mut weeks = Vec::new();
        let mut week: [Option<CalendarDay>; 7] = [None; 7];

        for date in first.iter_days().take_while(|d| d.month() == first.month()) {
            let column = date.weekday().num_days_from_monday() as usize;
            week[column] = Some(CalendarDay {
                date,
                marked: streak.is_some_and(|s| s.contains(date)),
                today: date == today,
            });

            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }

        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }

        Self {
            year: first.year(),
            month: first.month(),
            weeks,
        }
    }

    /// Number of marked days in this month.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|d| d.marked)
            .count()
    }

    /// Month title such as "March 2024".
    #[must_use]
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map_or_else(String::new, |d| d.format("%B %Y").to_string())
    }
}
