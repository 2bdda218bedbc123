//! # Concord CLI
//!
//! Configuration, wiring and subcommands for the `concord` binary.

pub mod commands;
pub mod config;
pub mod output;
