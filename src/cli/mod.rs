//! Command-line interface for besober.

pub mod args;
pub mod commands;
