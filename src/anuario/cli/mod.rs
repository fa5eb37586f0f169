//! # CLI Layer
//!
//! This module is **one possible UI client** for anuario, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the logging subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions (`Cli`, `Commands`)
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: output formatting for `CmdResult`s

mod commands;
mod print;
mod setup;

pub use commands::run;
