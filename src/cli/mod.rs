//! Command-line interface module.
//!
//! Provides argument parsing, flag validation and report output.

pub mod args;
pub mod report;
pub mod resolve;
