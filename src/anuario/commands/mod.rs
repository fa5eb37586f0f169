//! # Command Layer
//!
//! This module contains the **core business logic** of anuario. Each command lives in
//! its own submodule and implements pure Rust functions over the record store.
//!
//! ## Role and Responsibilities
//!
//! Commands turn the store's terse contract (records, `Option`s and booleans) into
//! structured results a UI can render:
//! - Resolve slugs to records and report the ones that do not exist
//! - Decide what a `false` from the store means for the user
//! - Return [`CmdResult`] with listed/affected records and leveled messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr, colors or exit codes
//! - **Argument parsing**: that's the CLI layer's job
//! - **Confirmation prompts**: the UI asks before calling
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore`, which still runs every record through the line
//! codec, so they cover the same path as production without touching the disk.
//!
//! ## Command Modules
//!
//! - [`list`]: filtered, paginated listing and house discovery
//! - [`view`]: records by slug
//! - [`create`]: add a record
//! - [`update`]: field edits applied as a whole-record update
//! - [`delete`]: delete by slug
//! - [`export`]: archive of character sheets
//! - [`report`]: report generator parameters
//! - [`config`]: manage configuration

use crate::config::AnuarioConfig;
use crate::error::{AnuarioError, Result};
use crate::filter::Page;
use crate::model::{has_line_break, Field, Record};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod report;
pub mod update;
pub mod view;

/// Filesystem locations the commands may need besides the store itself.
#[derive(Debug, Clone)]
pub struct AnuarioPaths {
    /// Folder holding `config.json` (and, by default, the record file).
    pub app_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Paging details of a listing, without the items themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total: page.total,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub houses: Vec<String>,
    pub report: Option<BTreeMap<String, String>>,
    pub paths: Vec<PathBuf>,
    pub config: Option<AnuarioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: AnuarioConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}

/// One `field=value` assignment, as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: Field,
    pub value: String,
}

impl FieldEdit {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn apply(&self, record: &mut Record) {
        record.set(self.field, self.value.trim());
    }
}

impl FromStr for FieldEdit {
    type Err = AnuarioError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            AnuarioError::InvalidArgument(format!("Expected field=value, got: {}", s))
        })?;
        let field: Field = key.parse()?;
        if has_line_break(value) {
            return Err(line_break_error(field));
        }
        Ok(Self {
            field,
            value: value.to_string(),
        })
    }
}

/// Records are stored one per line, so no cell may contain a line break.
pub(crate) fn ensure_single_line(record: &Record) -> Result<()> {
    match record.field_with_line_break() {
        Some(field) => Err(line_break_error(field)),
        None => Ok(()),
    }
}

fn line_break_error(field: Field) -> AnuarioError {
    AnuarioError::InvalidArgument(format!("{} cannot contain line breaks", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_edit_parses_assignment() {
        let edit: FieldEdit = "eye-color=green".parse().unwrap();
        assert_eq!(edit, FieldEdit::new(Field::EyeColor, "green"));

        let edit: FieldEdit = "born=31 July, 1980".parse().unwrap();
        assert_eq!(edit.value, "31 July, 1980");

        let edit: FieldEdit = "died=".parse().unwrap();
        assert_eq!(edit.value, "");
    }

    #[test]
    fn field_edit_rejects_bad_input() {
        assert!("house".parse::<FieldEdit>().is_err());
        assert!("wand=holly".parse::<FieldEdit>().is_err());
    }

    #[test]
    fn field_edit_rejects_line_breaks() {
        let err = "patronus=Stag\n9,character,ghost-row"
            .parse::<FieldEdit>()
            .unwrap_err();
        assert!(matches!(err, AnuarioError::InvalidArgument(_)));
        assert!("name=Luna\r\nLovegood".parse::<FieldEdit>().is_err());
    }

    #[test]
    fn single_line_check_names_the_field() {
        let mut record = Record::new("luna-lovegood");
        assert!(ensure_single_line(&record).is_ok());

        record.born = "13 February\n1981".into();
        match ensure_single_line(&record) {
            Err(AnuarioError::InvalidArgument(msg)) => assert!(msg.contains("born")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn field_edit_applies_lists() {
        let mut record = Record::new("x");
        FieldEdit::new(Field::Jobs, " Auror;Head of the DMLE ").apply(&mut record);
        assert_eq!(record.jobs, vec!["Auror", "Head of the DMLE"]);
    }

    #[test]
    fn has_errors_looks_at_levels() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("careful"));
        assert!(!result.has_errors());
        result.add_message(CmdMessage::error("boom"));
        assert!(result.has_errors());
    }
}
