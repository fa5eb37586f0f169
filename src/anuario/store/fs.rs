use super::csv_backend::CsvBackend;
use super::record_store::RecordStore;
use std::path::PathBuf;

pub type FileStore = RecordStore<CsvBackend>;

impl FileStore {
    /// A store over the record file at `path`. Nothing is read or created until
    /// the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore::with_backend(CsvBackend::new(path))
    }
}
