use super::backend::StorageBackend;
use super::DataStore;
use crate::model::Record;
use std::path::PathBuf;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the collection back, logging instead of propagating a failure.
    fn rewrite(&self, records: &[Record]) -> bool {
        match self.backend.save(records) {
            Ok(()) => {
                tracing::info!(
                    path = %self.backend.location().display(),
                    records = records.len(),
                    "record file rewritten"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "failed to rewrite record file"
                );
                false
            }
        }
    }

    /// Load for a mutation. A failed read aborts the mutation, so an unreadable
    /// file is never replaced by a rewrite of nothing.
    fn load_for_update(&self) -> Option<Vec<Record>> {
        match self.backend.load() {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::error!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "failed to read record file"
                );
                None
            }
        }
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn list_all(&self) -> Vec<Record> {
        match self.backend.load() {
            Ok(records) => {
                tracing::debug!(records = records.len(), "records loaded");
                records
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.backend.location().display(),
                    error = %e,
                    "failed to read record file, treating as empty"
                );
                Vec::new()
            }
        }
    }

    fn find_by_slug(&self, slug: &str) -> Option<Record> {
        self.list_all().into_iter().find(|r| r.slug_matches(slug))
    }

    fn delete_by_slug(&mut self, slug: &str) -> bool {
        if slug.trim().is_empty() {
            tracing::warn!("delete requested without a slug");
            return false;
        }
        let Some(mut records) = self.load_for_update() else {
            return false;
        };

        let before = records.len();
        records.retain(|r| !r.slug_matches(slug));
        let removed = before - records.len();

        if removed == 0 {
            tracing::warn!(slug, "slug not found, nothing deleted");
            return false;
        }
        tracing::info!(slug, removed, "records marked for deletion");
        self.rewrite(&records)
    }

    fn update(&mut self, record: &Record) -> bool {
        if record.slug.trim().is_empty() {
            tracing::warn!("update requested for a record without a slug");
            return false;
        }
        let Some(mut records) = self.load_for_update() else {
            return false;
        };

        let Some(pos) = records.iter().position(|r| r.slug_matches(&record.slug)) else {
            tracing::warn!(slug = %record.slug, "slug not found, nothing updated");
            return false;
        };
        records[pos] = record.clone();
        self.rewrite(&records)
    }

    fn rewrite_all(&mut self, records: &[Record]) -> bool {
        self.rewrite(records)
    }

    fn append(&mut self, record: &Record) -> bool {
        if record.slug.trim().is_empty() {
            tracing::warn!("append requested for a record without a slug");
            return false;
        }
        let Some(mut records) = self.load_for_update() else {
            return false;
        };
        records.push(record.clone());
        self.rewrite(&records)
    }

    fn path(&self) -> PathBuf {
        self.backend.location()
    }
}
