//! User-created streak counters.
//!
//! Each counter credits one day per calendar day through the daily
//! rollover, and can be reset, renamed or deleted.

pub mod store;
pub mod types;

pub use store::{CounterStore, DEMO_COUNTERS};
pub use types::Counter;
