//! Default counter storage.
//!
//! Persists the single permanent streak and its best-streak memory.

use rusqlite::{params, types::Type, OptionalExtension, Row};

use super::calendar::{progress, StreakRange};
use super::types::{DefaultCounter, SobrietyStatus, DEFAULT_COUNTER_NAME};
use crate::core::{format_instant, parse_instant, Clock, DayCounting};
use crate::error::BeSoberError;
use crate::storage::Database;

/// Storage for the default counter.
pub struct DefaultCounterStore<'a> {
    db: &'a Database,
    clock: &'a dyn Clock,
    counting: DayCounting,
}

impl<'a> DefaultCounterStore<'a> {
    /// Create a store over a shared database and clock.
    #[must_use]
    pub fn new(db: &'a Database, clock: &'a dyn Clock, counting: DayCounting) -> Self {
        Self {
            db,
            clock,
            counting,
        }
    }

    /// Create the default counter if it does not exist yet.
    ///
    /// Returns whether a row was inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn init(&self) -> Result<bool, BeSoberError> {
        let now = format_instant(self.clock.now());

        let inserted = self
            .db
            .connection()
            .execute(
                "INSERT INTO default_counter (name, start_date, last_updated, longest_streak)
                 SELECT ?1, ?2, ?2, 0
                 WHERE NOT EXISTS (SELECT 1 FROM default_counter LIMIT 1)",
                params![DEFAULT_COUNTER_NAME, now],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to init default counter: {e}")))?;

        if inserted > 0 {
            tracing::info!(start = %now, "default counter created");
        }
        Ok(inserted > 0)
    }

    /// The default counter, if initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self) -> Result<Option<DefaultCounter>, BeSoberError> {
        self.db
            .connection()
            .query_row(
                "SELECT id, name, start_date, last_updated, longest_streak
                 FROM default_counter ORDER BY id LIMIT 1",
                [],
                row_to_default_counter,
            )
            .optional()
            .map_err(|e| BeSoberError::Database(format!("Failed to fetch default counter: {e}")))
    }

    /// Days in the current streak of `counter`.
    #[must_use]
    pub fn streak_days(&self, counter: &DefaultCounter) -> i64 {
        self.counting.days_since(counter.start_date, self.clock)
    }

    /// Restart the streak now, remembering it if it was the longest.
    ///
    /// Returns the updated counter, or `None` if it was never initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or update fails.
    pub fn reset(&self) -> Result<Option<DefaultCounter>, BeSoberError> {
        let Some(existing) = self.get()? else {
            return Ok(None);
        };

        let now = self.clock.now();
        let streak = u32::try_from(self.streak_days(&existing)).unwrap_or(u32::MAX);
        let longest_streak = existing.longest_streak.max(streak);

        self.db
            .connection()
            .execute(
                "UPDATE default_counter
                 SET start_date = ?1, last_updated = ?1, longest_streak = ?2
                 WHERE id = ?3",
                params![format_instant(now), longest_streak, existing.id],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to reset default counter: {e}")))?;

        tracing::info!(streak, longest_streak, "default counter reset");

        Ok(Some(DefaultCounter {
            start_date: now,
            last_updated: now,
            longest_streak,
            ..existing
        }))
    }

    /// Current streak summary for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn status(&self, goal_days: u32) -> Result<Option<SobrietyStatus>, BeSoberError> {
        Ok(self.get()?.map(|counter| {
            let current_days = self.streak_days(&counter);
            SobrietyStatus {
                start_day: self.clock.local_date(counter.start_date),
                current_days,
                longest_streak: counter.longest_streak,
                goal_days,
                progress: progress(current_days, goal_days),
                name: counter.name,
                start_date: counter.start_date,
            }
        }))
    }

    /// Dates covered by the current streak, if initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn streak_range(&self) -> Result<Option<StreakRange>, BeSoberError> {
        Ok(self.get()?.map(|counter| {
            StreakRange::new(
                self.clock.local_date(counter.start_date),
                self.streak_days(&counter),
            )
        }))
    }

    /// Overwrite the streak start.
    #[cfg(test)]
    pub fn set_start(&self, start: chrono::DateTime<chrono::Utc>) -> Result<(), BeSoberError> {
        self.db.connection().execute(
            "UPDATE default_counter SET start_date = ?1",
            [format_instant(start)],
        )?;
        Ok(())
    }
}

/// Convert a database row to a `DefaultCounter`.
fn row_to_default_counter(row: &Row<'_>) -> Result<DefaultCounter, rusqlite::Error> {
    Ok(DefaultCounter {
        id: row.get(0)?,
        name: row.get(1)?,
        start_date: instant_column(row, 2)?,
        last_updated: instant_column(row, 3)?,
        longest_streak: row.get(4)?,
    })
}

fn instant_column(
    row: &Row<'_>,
    idx: usize,
) -> Result<chrono::DateTime<chrono::Utc>, rusqlite::Error> {
    let text: String = row.get(idx)?;
    parse_instant(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedClock, MockClock};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::utc(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn test_get_before_init() {
        let db = Database::open_in_memory().unwrap();
        let clock = clock();
        let store = DefaultCounterStore::new(&db, &clock, DayCounting::Calendar);

        assert!(store.get().unwrap().is_none());
        assert!(store.reset().unwrap().is_none());
        assert!(store.status(100).unwrap().is_none());
    }

    #[test]
    fn test_init_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let first = clock();
        let store = DefaultCounterStore::new(&db, &first, DayCounting::Calendar);
        assert!(store.init().unwrap());

        let later = first.advanced(Duration::days(2));
        let store = DefaultCounterStore::new(&db, &later, DayCounting::Calendar);
        assert!(!store.init().unwrap());

        let rows: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM default_counter", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);

        let counter = store.get().unwrap().unwrap();
        assert_eq!(counter.name, DEFAULT_COUNTER_NAME);
        assert_eq!(counter.start_date, first.now());
        assert_eq!(counter.longest_streak, 0);
    }

    #[test]
    fn test_reset_records_longest_streak() {
        let db = Database::open_in_memory().unwrap();
        let start = clock();
        DefaultCounterStore::new(&db, &start, DayCounting::Elapsed)
            .init()
            .unwrap();

        let ten_days = start.advanced(Duration::days(10) + Duration::hours(3));
        let store = DefaultCounterStore::new(&db, &ten_days, DayCounting::Elapsed);
        let reset = store.reset().unwrap().unwrap();

        assert_eq!(reset.longest_streak, 10);
        assert_eq!(reset.start_date, ten_days.now());
        assert_eq!(reset.last_updated, ten_days.now());
        assert_eq!(store.get().unwrap().unwrap(), reset);
        assert_eq!(store.streak_days(&reset), 0);
    }

    #[test]
    fn test_longest_streak_never_decreases() {
        let db = Database::open_in_memory().unwrap();
        let start = clock();
        DefaultCounterStore::new(&db, &start, DayCounting::Calendar)
            .init()
            .unwrap();

        let first_reset = start.advanced(Duration::days(30));
        let store = DefaultCounterStore::new(&db, &first_reset, DayCounting::Calendar);
        assert_eq!(store.reset().unwrap().unwrap().longest_streak, 30);

        let second_reset = first_reset.advanced(Duration::days(4));
        let store = DefaultCounterStore::new(&db, &second_reset, DayCounting::Calendar);
        assert_eq!(store.reset().unwrap().unwrap().longest_streak, 30);

        // Reset twice in the same instant
        assert_eq!(store.reset().unwrap().unwrap().longest_streak, 30);
    }

    #[test]
    fn test_status() {
        let db = Database::open_in_memory().unwrap();
        let start = clock();
        DefaultCounterStore::new(&db, &start, DayCounting::Calendar)
            .init()
            .unwrap();

        let later = start.advanced(Duration::days(25));
        let store = DefaultCounterStore::new(&db, &later, DayCounting::Calendar);
        let status = store.status(100).unwrap().unwrap();

        assert_eq!(status.current_days, 25);
        assert_eq!(status.start_day, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!((status.progress - 0.25).abs() < f64::EPSILON);
        assert!(status.is_personal_best());
    }

    #[test]
    fn test_streak_range() {
        let db = Database::open_in_memory().unwrap();
        let start = clock();
        DefaultCounterStore::new(&db, &start, DayCounting::Calendar)
            .init()
            .unwrap();

        let later = start.advanced(Duration::days(2));
        let store = DefaultCounterStore::new(&db, &later, DayCounting::Calendar);
        let range = store.streak_range().unwrap().unwrap();

        assert_eq!(range.dates().len(), 3);
        assert_eq!(range.end, later.today());
    }

    #[test]
    fn test_reads_date_only_start() {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute(
                "INSERT INTO default_counter (name, start_date, last_updated, longest_streak)
                 VALUES ('Sobriety Default', '2024-05-01', '2024-05-01', 3)",
                [],
            )
            .unwrap();

        let clock = clock();
        let store = DefaultCounterStore::new(&db, &clock, DayCounting::Calendar);
        let counter = store.get().unwrap().unwrap();
        assert_eq!(counter.longest_streak, 3);
        assert_eq!(store.streak_days(&counter), 31);
    }

    #[test]
    fn test_reset_with_mock_clock() {
        let db = Database::open_in_memory().unwrap();
        let start = clock();
        let init = DefaultCounterStore::new(&db, &start, DayCounting::Elapsed);
        init.init().unwrap();
        init.set_start(start.now() - Duration::days(7)).unwrap();

        let now = start.now();
        let mut mock = MockClock::new();
        mock.expect_now().return_const(now);
        mock.expect_local_date().returning(|instant| instant.date_naive());

        let store = DefaultCounterStore::new(&db, &mock, DayCounting::Elapsed);
        let reset = store.reset().unwrap().unwrap();
        assert_eq!(reset.longest_streak, 7);
        assert_eq!(reset.start_date, now);
    }
}
