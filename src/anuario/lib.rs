//! # Anuario Architecture
//!
//! Anuario is a **UI-agnostic record library** for the Hogwarts yearbook: a flat file
//! of character records that can be listed, filtered, viewed, created, updated,
//! deleted and exported. The command-line client in `cli/` is one UI among possible
//! others; nothing below the API layer knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, installs logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store results into structured CmdResults           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Line Codec (codec.rs)             │
//! │  - DataStore trait, RecordStore over a StorageBackend       │
//! │  - Full read-modify-rewrite of one record file per call     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The record store and its backends
//! - [`codec`]: Record <-> text line mapping
//! - [`model`]: `Record` and `Field`
//! - [`filter`]: Filter predicate and pagination
//! - [`labels`]: Field labels per locale
//! - [`sheet`]: Detail view rows and report parameters
//! - [`config`]: Configuration and app folder resolution
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod labels;
pub mod model;
pub mod sheet;
pub mod store;
