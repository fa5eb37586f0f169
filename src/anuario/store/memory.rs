use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_character(mut self, slug: &str, name: &str, house: &str) -> Self {
            let mut record = Record::new(slug);
            record.kind = "character".to_string();
            record.name = name.to_string();
            record.house = house.to_string();
            assert!(self.store.append(&record));
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            assert!(self.store.append(&record));
            self
        }

        /// A handful of well-known students across the four houses.
        pub fn with_students(self) -> Self {
            self.with_character("harry-potter", "Harry James Potter", "Gryffindor")
                .with_character("hermione-granger", "Hermione Jean Granger", "Gryffindor")
                .with_character("draco-malfoy", "Draco Lucius Malfoy", "Slytherin")
                .with_character("luna-lovegood", "Luna Lovegood", "Ravenclaw")
                .with_character("cedric-diggory", "Cedric Diggory", "Hufflepuff")
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
