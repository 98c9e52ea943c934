//! Database migrations for besober.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::BeSoberError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, BeSoberError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| BeSoberError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), BeSoberError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| BeSoberError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), BeSoberError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "applying schema migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), BeSoberError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(BeSoberError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `counters`: user-created streak counters
/// - `default_counter`: the permanent streak with best-streak memory
/// - `app_meta`: one-off flags such as the first-run seed decision
fn migrate_v1(conn: &Connection) -> Result<(), BeSoberError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS counters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            last_updated TEXT NOT NULL,
            counter INTEGER NOT NULL DEFAULT 0 CHECK (counter >= 0)
        );

        CREATE TABLE IF NOT EXISTS default_counter (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            last_updated TEXT NOT NULL,
            longest_streak INTEGER NOT NULL DEFAULT 0 CHECK (longest_streak >= 0)
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| BeSoberError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO counters (name, start_date, last_updated, counter)
             VALUES ('No Sugar', '2024-01-01', '2024-01-01', 0)",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO default_counter (name, start_date, last_updated)
             VALUES ('Sobriety Default', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES ('demo_seeded', '1')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_negative_counter_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO counters (name, start_date, last_updated, counter)
             VALUES ('Bad', '2024-01-01', '2024-01-01', -1)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
