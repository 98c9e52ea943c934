//! Application entry point into storage.
//!
//! A [`Tracker`] owns the one database handle, the clock and the loaded
//! configuration for the life of the process, and hands out stores that
//! borrow them.

use serde::Serialize;

use crate::config::{Config, Paths};
use crate::core::{Clock, SystemClock};
use crate::error::BeSoberError;
use crate::features::counters::CounterStore;
use crate::features::sobriety::DefaultCounterStore;
use crate::storage::Database;

/// What [`Tracker::bootstrap`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    /// The default counter was created.
    pub default_created: bool,
    /// Example counters were inserted.
    pub seeded: bool,
    /// Counters credited by rollover.
    pub rolled_over: usize,
}

/// Owner of the storage handle, clock and configuration.
pub struct Tracker {
    db: Database,
    clock: Box<dyn Clock>,
    config: Config,
}

impl Tracker {
    /// Open the database described by `paths` with the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(paths: &Paths, config: Config) -> Result<Self, BeSoberError> {
        let db = Database::open(paths)?;
        Ok(Self::with_clock(db, Box::new(SystemClock), config))
    }

    /// Use an in-memory database with the system clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_in_memory(config: Config) -> Result<Self, BeSoberError> {
        let db = Database::open_in_memory()?;
        Ok(Self::with_clock(db, Box::new(SystemClock), config))
    }

    /// Assemble a tracker from explicit parts.
    #[must_use]
    pub fn with_clock(db: Database, clock: Box<dyn Clock>, config: Config) -> Self {
        Self { db, clock, config }
    }

    /// Run the start-up sequence.
    ///
    /// Creates the default counter if needed, seeds example counters on the
    /// first run of an empty database (when enabled), then applies the daily
    /// rollover so every later read is current.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn bootstrap(&self) -> Result<BootstrapReport, BeSoberError> {
        self.db.init_schema()?;
        let default_created = self.sobriety().init()?;

        let counters = self.counters();
        let seeded = if self.config.general.seed_demo_data {
            counters.seed_if_first_run()?
        } else {
            false
        };
        let rolled_over = counters.rollover()?;

        let report = BootstrapReport {
            default_created,
            seeded,
            rolled_over,
        };
        tracing::debug!(?report, "bootstrap complete");
        Ok(report)
    }

    /// Store for user-created counters.
    #[must_use]
    pub fn counters(&self) -> CounterStore<'_> {
        CounterStore::new(&self.db, self.clock.as_ref())
    }

    /// Store for the default counter.
    #[must_use]
    pub fn sobriety(&self) -> DefaultCounterStore<'_> {
        DefaultCounterStore::new(
            &self.db,
            self.clock.as_ref(),
            self.config.streak.day_counting,
        )
    }

    /// The clock in use.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
