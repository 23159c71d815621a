//! Command-line interface for flowtime.

pub mod args;
pub mod commands;
