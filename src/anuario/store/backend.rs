use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (file vs memory),
/// while RecordStore handles the "what" (slug matching, rewrite rules).
pub trait StorageBackend {
    /// Load every record, in storage order.
    /// Returns an empty list if nothing has been stored yet (missing file).
    /// Returns Err only on actual I/O errors (permissions, disk failure, bad encoding).
    /// Files must be UTF-8; any other encoding is a read error, not a lossy decode.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored collection with `records`, in the given order.
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Where the records live. For CsvBackend, the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
