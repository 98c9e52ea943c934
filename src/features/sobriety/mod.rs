//! The permanent sobriety streak.
//!
//! Provides the single default counter with:
//! - Idempotent first-run creation
//! - Resets that remember the longest streak
//! - Progress and calendar data for the current streak

pub mod calendar;
pub mod store;
pub mod types;

pub use calendar::{progress, CalendarDay, MonthGrid, StreakRange};
pub use store::DefaultCounterStore;
pub use types::{DefaultCounter, SobrietyStatus, DEFAULT_COUNTER_NAME};
