//! Time source abstraction.
//!
//! Every date-dependent operation asks a [`Clock`] for "now" and for the
//! local calendar date, so tests can pin both.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

/// Source of the current instant and of local calendar dates.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The local calendar date of `instant`.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate;

    /// Today's local calendar date.
    fn today(&self) -> NaiveDate {
        self.local_date(self.now())
    }
}

/// Wall clock in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

/// A clock pinned to one instant in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Pin the clock to `now`, interpreting dates in `offset`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// Pin the clock to `now`, interpreting dates in UTC.
    #[must_use]
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::new(now, Utc.fix())
    }

    /// Pin the clock to noon UTC on `date`.
    #[must_use]
    pub fn at_noon(date: NaiveDate) -> Self {
        let now = date
            .and_hms_opt(12, 0, 0)
            .map_or_else(Utc::now, |dt| dt.and_utc());
        Self::utc(now)
    }

    /// A copy of this clock moved by `delta`.
    #[must_use]
    pub fn advanced(&self, delta: chrono::Duration) -> Self {
        Self::new(self.now + delta, self.offset)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}
