//! Default counter types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Name given to the default counter when it is first created.
pub const DEFAULT_COUNTER_NAME: &str = "Sobriety Default";

/// The permanent streak counter. Exactly one exists once initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCounter {
    /// Row id.
    pub id: i64,
    /// Fixed label.
    pub name: String,
    /// When the current streak started.
    pub start_date: DateTime<Utc>,
    /// When the row was last reset or created.
    pub last_updated: DateTime<Utc>,
    /// Best streak recorded at any reset. Never decreases.
    pub longest_streak: u32,
}

/// Snapshot of the default counter as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SobrietyStatus {
    /// Counter label.
    pub name: String,
    /// When the current streak started.
    pub start_date: DateTime<Utc>,
    /// Local calendar date the streak started on.
    pub start_day: NaiveDate,
    /// Days in the current streak.
    pub current_days: i64,
    /// Best streak recorded at a reset.
    pub longest_streak: u32,
    /// Goal used for the progress gauge.
    pub goal_days: u32,
    /// Fraction of the goal reached, in `0.0..=1.0`.
    pub progress: f64,
}

impl SobrietyStatus {
    /// Whether the running streak already beats the recorded best.
    #[must_use]
    pub fn is_personal_best(&self) -> bool {
        self.current_days > i64::from(self.longest_streak)
    }
}
