//! `SQLite` database connection and operations.
//!
//! The database is stored at `~/.besober/besober.db` and contains tables for:
//! - User-created counters
//! - The default (permanent) streak counter
//! - Application metadata flags

use rusqlite::{Connection, OptionalExtension};

use crate::config::Paths;
use crate::error::BeSoberError;

use super::migrations;

/// Database connection wrapper.
///
/// One instance is opened per process and shared by every store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at the location described by `paths`.
    ///
    /// Creates the data directory and database file and runs migrations if
    /// necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open(paths: &Paths) -> Result<Self, BeSoberError> {
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &std::path::Path) -> Result<Self, BeSoberError> {
        tracing::debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path).map_err(|e| {
            BeSoberError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, BeSoberError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            BeSoberError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    /// Create any missing tables. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails.
    pub fn init_schema(&self) -> Result<(), BeSoberError> {
        migrations::run(&self.conn)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, BeSoberError> {
        migrations::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    ///
    /// This is primarily for use by feature stores that need direct access.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Read a metadata flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn meta(&self, key: &str) -> Result<Option<String>, BeSoberError> {
        self.conn
            .query_row("SELECT value FROM app_meta WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| BeSoberError::Database(format!("Failed to read meta {key}: {e}")))
    }

    /// Write a metadata flag, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn set_meta(&self, key: &str, value: &str) -> Result<(), BeSoberError> {
        self.conn
            .execute(
                "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [key, value],
            )
            .map_err(|e| BeSoberError::Database(format!("Failed to write meta {key}: {e}")))?;
        Ok(())
    }
}
