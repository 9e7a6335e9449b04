//! Command-line interface module.
//!
//! Provides argument parsing and the non-interactive commands.

pub mod args;
pub mod menu;
