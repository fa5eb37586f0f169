//! # Storage Layer
//!
//! This module defines the storage abstraction for anuario. The [`DataStore`] trait
//! is the record store every command talks to.
//!
//! ## Read-Modify-Rewrite
//!
//! The store keeps no state between calls. Every operation re-reads the whole
//! collection from the backend; mutating operations change the list in memory and
//! then rewrite the whole collection. There is no incremental write, no lock and no
//! version check: two writers racing on the same file end with "last rewrite wins".
//! Callers that share a store across threads must serialize access themselves.
//!
//! ## Failure Contract
//!
//! Store operations never return errors. Failures collapse into the return value:
//!
//! - A read failure yields an empty list (and is logged).
//! - A mutation returns `false` when the slug is blank, when nothing matches, or when
//!   the rewrite fails. A `false` means "assume nothing changed on disk".
//!
//! The reason behind a `false` is only visible in the log.
//!
//! ## Duplicate Slugs
//!
//! Slug uniqueness is not enforced here. With duplicates present, delete removes
//! every case-insensitive match while update replaces only the first one.
//!
//! ## Implementations
//!
//! - [`record_store::RecordStore`]: the store logic, generic over a
//!   [`backend::StorageBackend`].
//! - [`fs::FileStore`]: production store over [`csv_backend::CsvBackend`].
//! - [`memory::InMemoryStore`]: store over [`mem_backend::MemBackend`], for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/Reto3_Hogwarts_Anuario/
//! ├── todosPersonajes.csv     # header line + one record per line
//! └── config.json             # AnuarioConfig
//! ```
//!
//! Rewrites go to a hidden temporary sibling first and are renamed over the data
//! file, so a crash mid-write leaves the previous file in place.

use crate::model::Record;
use std::path::PathBuf;

pub mod backend;
pub mod csv_backend;
pub mod fs;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// The record store: list, find, update and delete over a single record file.
pub trait DataStore {
    /// All records in storage order. Empty when the file does not exist or cannot be read.
    fn list_all(&self) -> Vec<Record>;

    /// First record whose slug matches, ignoring case.
    fn find_by_slug(&self, slug: &str) -> Option<Record>;

    /// Remove every record whose slug matches, ignoring case, then rewrite.
    fn delete_by_slug(&mut self, slug: &str) -> bool;

    /// Replace the first record whose slug matches `record.slug` with `record`,
    /// then rewrite. Never inserts. The replacement is whole-record, not a merge:
    /// callers must pass a fully populated record.
    fn update(&mut self, record: &Record) -> bool;

    /// Replace the stored collection with `records`, in order.
    fn rewrite_all(&mut self, records: &[Record]) -> bool;

    /// Add a record at the end, then rewrite. Slug uniqueness is not checked.
    fn append(&mut self, record: &Record) -> bool;

    /// The backing location.
    fn path(&self) -> PathBuf;
}
