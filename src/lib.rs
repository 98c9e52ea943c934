//! besober - track sobriety streaks from the terminal
//!
//! This crate keeps a default sobriety counter and any number of personal
//! day counters in a local `SQLite` database, with a CLI and a terminal
//! dashboard on top.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tracker;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BeSoberError;
pub use tracker::Tracker;
