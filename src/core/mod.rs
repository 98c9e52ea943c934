//! Core abstractions for besober.
//!
//! Time sources, date storage formats and streak day arithmetic shared by
//! the feature stores.

mod clock;
mod datetime;
mod days;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{
    format_date, format_instant, parse_date, parse_instant, parse_month, DATE_FORMAT,
};
pub use days::{calendar_days, elapsed_days, DayCounting};
