//! Feature implementations for besober.
//!
//! - Personal day counters with daily rollover
//! - The default sobriety counter, its streak and calendar

pub mod counters;
pub mod sobriety;
