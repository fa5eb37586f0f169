use super::backend::StorageBackend;
use crate::codec;
use crate::error::{AnuarioError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Keeps the encoded file text rather than the records, so everything that goes
/// through it also goes through the line codec, exactly like the file backend.
/// Uses `RefCell` for interior mutability since anuario is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    text: RefCell<Option<String>>,
    saves: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with raw file text, as if an external program had written it.
    pub fn with_text(text: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.text.borrow_mut() = Some(text.into());
        backend
    }

    /// The raw text currently "on disk", if anything was ever stored.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Record>> {
        if self.simulate_read_error.get() {
            return Err(AnuarioError::Store("Simulated read error".to_string()));
        }
        Ok(self
            .text
            .borrow()
            .as_deref()
            .map(codec::decode_file)
            .unwrap_or_default())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(AnuarioError::Store("Simulated write error".to_string()));
        }
        *self.text.borrow_mut() = Some(codec::encode_file(records));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://todosPersonajes.csv")
    }
}
