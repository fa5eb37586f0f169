//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for UI clients: the CLI today, anything else tomorrow.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (parses `field=value` edits, builds filters)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! ## Generic Over DataStore
//!
//! `AnuarioApi<S: DataStore>` works with any store:
//! - Production: `AnuarioApi<FileStore>`
//! - Testing: `AnuarioApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::filter::RecordFilter;
use crate::labels::Locale;
use crate::model::Record;
use crate::store::DataStore;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{AnuarioPaths, CmdMessage, CmdResult, FieldEdit, MessageLevel};

/// The main API facade for anuario operations.
pub struct AnuarioApi<S: DataStore> {
    store: S,
    paths: AnuarioPaths,
}

impl<S: DataStore> AnuarioApi<S> {
    pub fn new(store: S, paths: AnuarioPaths) -> Self {
        Self { store, paths }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_records(
        &self,
        filter: &RecordFilter,
        page: usize,
        per_page: usize,
    ) -> Result<CmdResult> {
        commands::list::run(&self.store, filter, page, per_page)
    }

    pub fn houses(&self) -> Result<CmdResult> {
        commands::list::houses(&self.store)
    }

    pub fn view_records<I: AsRef<str>>(&self, slugs: &[I]) -> Result<CmdResult> {
        commands::view::run(&self.store, slugs)
    }

    pub fn create_record(&mut self, record: Record) -> Result<CmdResult> {
        commands::create::run(&mut self.store, record)
    }

    /// Parses `field=value` assignments and applies them to the record with `slug`.
    pub fn update_record<I: AsRef<str>>(&mut self, slug: &str, assignments: &[I]) -> Result<CmdResult> {
        let edits = parse_edits(assignments)?;
        commands::update::run(&mut self.store, slug, &edits)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, slugs: &[I]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, slugs)
    }

    pub fn export_records<I: AsRef<str>>(
        &self,
        slugs: &[I],
        out_dir: &Path,
        locale: Locale,
    ) -> Result<CmdResult> {
        commands::export::run(&self.store, slugs, out_dir, locale)
    }

    pub fn report(&self, slug: &str) -> Result<CmdResult> {
        commands::report::run(&self.store, slug)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &AnuarioPaths {
        &self.paths
    }

    pub fn data_path(&self) -> std::path::PathBuf {
        self.store.path()
    }
}

/// Parse `field=value` strings into edits, failing on the first bad one.
pub fn parse_edits<I: AsRef<str>>(assignments: &[I]) -> Result<Vec<FieldEdit>> {
    assignments.iter().map(|a| a.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnuarioError;
    use crate::model::Field;
    use crate::store::memory::fixtures::StoreFixture;
    use std::path::PathBuf;

    fn api() -> AnuarioApi<crate::store::memory::InMemoryStore> {
        AnuarioApi::new(
            StoreFixture::new().with_students().build(),
            AnuarioPaths {
                app_dir: PathBuf::from("/nonexistent"),
            },
        )
    }

    #[test]
    fn parse_edits_collects_all() {
        let edits = parse_edits(&["house=Gryffindor", "jobs=Auror;Teacher"]).unwrap();
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].field, Field::House);
    }

    #[test]
    fn parse_edits_fails_on_first_bad_assignment() {
        assert!(matches!(
            parse_edits(&["house=Gryffindor", "broken"]),
            Err(AnuarioError::InvalidArgument(_))
        ));
    }

    #[test]
    fn update_dispatches_parsed_edits() {
        let mut api = api();
        api.update_record("luna-lovegood", &["patronus=Hare"]).unwrap();
        let stored = api.store().find_by_slug("luna-lovegood").unwrap();
        assert_eq!(stored.patronus, "Hare");
    }

    #[test]
    fn list_and_delete_dispatch() {
        let mut api = api();
        let listed = api.list_records(&RecordFilter::default(), 1, 2).unwrap();
        assert_eq!(listed.listed_records.len(), 2);

        api.delete_records(&["harry-potter"]).unwrap();
        assert!(api.store().find_by_slug("harry-potter").is_none());
    }

    #[test]
    fn data_path_comes_from_store() {
        assert_eq!(
            api().data_path(),
            PathBuf::from("memory://todosPersonajes.csv")
        );
    }
}
