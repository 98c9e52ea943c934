//! Counter record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-created streak counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Row id assigned by storage.
    pub id: i64,
    /// User-editable label. Not unique.
    pub name: String,
    /// First day of the current streak.
    pub start_date: NaiveDate,
    /// Day of the last rollover increment.
    pub last_updated: NaiveDate,
    /// Days credited by rollover since the last reset.
    pub counter: u32,
}
