//! Counter storage.
//!
//! CRUD and daily rollover over the `counters` table.

use chrono::{Duration, NaiveDate};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use super::types::Counter;
use crate::core::{format_date, parse_date, Clock};
use crate::error::BeSoberError;
use crate::storage::Database;

/// Metadata key recording that the first-run seed decision was made.
const DEMO_SEEDED_KEY: &str = "demo_seeded";

/// Example counters inserted on first run: (name, days ago).
pub const DEMO_COUNTERS: [(&str, i64); 3] = [
    ("No Smoking", 5),
    ("No Alcohol", 12),
    ("No Sugar", 20),
];

const SELECT_COUNTER: &str =
    "SELECT id, name, start_date, last_updated, counter FROM counters";

/// Storage for user-created counters.
pub struct CounterStore<'a> {
    db: &'a Database,
    clock: &'a dyn Clock,
}

impl<'a> CounterStore<'a> {
    /// Create a store over a shared database and clock.
    #[must_use]
    pub fn new(db: &'a Database, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Insert a new counter starting today.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or a database error.
    pub fn create(&self, name: &str) -> Result<Counter, BeSoberError> {
        let name = validate_name(name)?;
        let today = self.clock.today();
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO counters (name, start_date, last_updated, counter)
             VALUES (?1, ?2, ?2, 0)",
            params![name, format_date(today)],
        )
        .map_err(|e| BeSoberError::Database(format!("Failed to add counter: {e}")))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, name, "counter created");

        Ok(Counter {
            id,
            name: name.to_string(),
            start_date: today,
            last_updated: today,
            counter: 0,
        })
    }

    /// All counters in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self) -> Result<Vec<Counter>, BeSoberError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!("{SELECT_COUNTER} ORDER BY id"))
            .map_err(|e| BeSoberError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_counter)
            .map_err(|e| BeSoberError::Database(format!("Failed to fetch counters: {e}")))?;

        let mut counters = Vec::new();
        for row in rows {
            counters.push(row.map_err(|e| BeSoberError::Database(e.to_string()))?);
        }

        Ok(counters)
    }

    /// A single counter by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Counter>, BeSoberError> {
        self.db
            .connection()
            .query_row(&format!("{SELECT_COUNTER} WHERE id = ?1"), [id], row_to_counter)
            .optional()
            .map_err(|e| BeSoberError::Database(format!("Failed to fetch counter {id}: {e}")))
    }

    /// Number of counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count(&self) -> Result<i64, BeSoberError> {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM counters", [], |row| row.get(0))
            .map_err(|e| BeSoberError::Database(format!("Failed to count counters: {e}")))
    }

    /// Credit one day to every counter not yet updated today.
    ///
    /// Running it again on the same day changes nothing. Returns the number
    /// of counters credited.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn rollover(&self) -> Result<usize, BeSoberError> {
        let today = format_date(self.clock.today());

        let updated = self
            .db
            .connection()
            .execute(
                "UPDATE counters
                 SET counter = counter + 1, last_updated = ?1
                 WHERE last_updated < ?1",
                [&today],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to update counters: {e}")))?;

        if updated > 0 {
            tracing::info!(updated, %today, "daily rollover applied");
        }
        Ok(updated)
    }

    /// Delete a counter. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, BeSoberError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM counters WHERE id = ?1", [id])
            .map_err(|e| BeSoberError::Database(format!("Failed to delete counter: {e}")))?;

        tracing::debug!(id, removed = rows > 0, "counter delete");
        Ok(rows > 0)
    }

    /// Restart a counter from today. Returns whether the counter exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn reset(&self, id: i64) -> Result<bool, BeSoberError> {
        let today = format_date(self.clock.today());

        let rows = self
            .db
            .connection()
            .execute(
                "UPDATE counters
                 SET counter = 0, start_date = ?1, last_updated = ?1
                 WHERE id = ?2",
                params![today, id],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to reset counter: {e}")))?;

        tracing::debug!(id, matched = rows > 0, "counter reset");
        Ok(rows > 0)
    }

    /// Change a counter's label. Returns whether the counter exists.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name, or a database error.
    pub fn rename(&self, id: i64, new_name: &str) -> Result<bool, BeSoberError> {
        let name = validate_name(new_name)?;

        let rows = self
            .db
            .connection()
            .execute(
                "UPDATE counters SET name = ?1 WHERE id = ?2",
                params![name, id],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to update label: {e}")))?;

        Ok(rows > 0)
    }

    /// Insert the example counters with back-dated start dates.
    ///
    /// Each example is already credited for today. Returns the inserted rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is inserted in that case.
    pub fn seed_demo(&self) -> Result<Vec<Counter>, BeSoberError> {
        let today = self.clock.today();
        let conn = self.db.connection();

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| BeSoberError::Database(format!("Failed to begin seed: {e}")))?;

        let mut seeded = Vec::with_capacity(DEMO_COUNTERS.len());
        for (name, days_ago) in DEMO_COUNTERS {
            let start_date = today - Duration::days(days_ago);
            let counter = u32::try_from(days_ago + 1).unwrap_or(0);

            tx.execute(
                "INSERT INTO counters (name, start_date, last_updated, counter)
                 VALUES (?1, ?2, ?3, ?4)",
                params![name, format_date(start_date), format_date(today), counter],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to seed mock data: {e}")))?;

            seeded.push(Counter {
                id: tx.last_insert_rowid(),
                name: name.to_string(),
                start_date,
                last_updated: today,
                counter,
            });
        }

        tx.commit()
            .map_err(|e| BeSoberError::Database(format!("Failed to commit seed: {e}")))?;

        tracing::info!(count = seeded.len(), "demo counters seeded");
        Ok(seeded)
    }

    /// Seed the example counters once per database, only if it starts empty.
    ///
    /// Returns whether seeding happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the check or the seed fails.
    pub fn seed_if_first_run(&self) -> Result<bool, BeSoberError> {
        if self.db.meta(DEMO_SEEDED_KEY)?.is_some() {
            return Ok(false);
        }

        let seeded = if self.count()? == 0 {
            self.seed_demo()?;
            true
        } else {
            false
        };

        self.db.set_meta(DEMO_SEEDED_KEY, if seeded { "1" } else { "0" })?;
        Ok(seeded)
    }

    /// Overwrite a counter's last rollover day.
    #[cfg(test)]
    pub fn set_last_updated(&self, id: i64, day: NaiveDate) -> Result<(), BeSoberError> {
        self.db.connection().execute(
            "UPDATE counters SET last_updated = ?1 WHERE id = ?2",
            params![format_date(day), id],
        )?;
        Ok(())
    }
}

/// Trim a counter name and reject blank ones.
fn validate_name(name: &str) -> Result<&str, BeSoberError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BeSoberError::InvalidInput(
            "Counter name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Convert a database row to a Counter.
fn row_to_counter(row: &Row<'_>) -> Result<Counter, rusqlite::Error> {
    Ok(Counter {
        id: row.get(0)?,
        name: row.get(1)?,
        start_date: date_column(row, 2)?,
        last_updated: date_column(row, 3)?,
        counter: row.get(4)?,
    })
}

fn date_column(row: &Row<'_>, idx: usize) -> Result<NaiveDate, rusqlite::Error> {
    let text: String = row.get(idx)?;
    parse_date(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
