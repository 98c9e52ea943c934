//! Storage layer for besober.
//!
//! This module provides SQLite-based persistence for:
//! - User-created counters
//! - The default streak counter
//! - First-run metadata

mod database;
mod migrations;

pub use database::Database;
