use crate::commands::{ensure_single_line, CmdMessage, CmdResult};
use crate::error::{AnuarioError, Result};
use crate::model::Record;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, mut record: Record) -> Result<CmdResult> {
    record.slug = record.slug.trim().to_string();
    if record.slug.is_empty() {
        return Err(AnuarioError::InvalidArgument(
            "A record needs a slug".to_string(),
        ));
    }
    ensure_single_line(&record)?;
    if store.find_by_slug(&record.slug).is_some() {
        return Err(AnuarioError::Api(format!(
            "A record with slug '{}' already exists",
            record.slug
        )));
    }
    if !store.append(&record) {
        return Err(AnuarioError::Store(format!(
            "Could not write {}",
            store.path().display()
        )));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created: {} ({})",
        record.display_name(),
        record.slug
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_record_at_the_end() {
        let mut store = StoreFixture::new().with_students().build();
        let mut record = Record::new("  neville-longbottom ");
        record.name = "Neville Longbottom".into();

        let result = run(&mut store, record).unwrap();
        assert_eq!(result.affected_records[0].slug, "neville-longbottom");
        assert!(result.messages[0].content.contains("Neville Longbottom"));

        let all = store.list_all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[5].slug, "neville-longbottom");
    }

    #[test]
    fn refuses_blank_slug() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, Record::new(" ")).unwrap_err();
        assert!(matches!(err, AnuarioError::InvalidArgument(_)));
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn refuses_duplicate_slug_ignoring_case() {
        let mut store = StoreFixture::new().with_students().build();
        let err = run(&mut store, Record::new("Harry-Potter")).unwrap_err();
        assert!(matches!(err, AnuarioError::Api(_)));
        assert_eq!(store.list_all().len(), 5);
    }

    #[test]
    fn refuses_line_breaks_in_any_field() {
        let mut store = StoreFixture::new().with_students().build();
        let saves = store.backend().saves();
        let mut record = Record::new("neville-longbottom");
        record.name = "Neville\nLongbottom".into();

        let err = run(&mut store, record).unwrap_err();
        assert!(matches!(err, AnuarioError::InvalidArgument(_)));
        assert_eq!(store.backend().saves(), saves);
        assert_eq!(store.list_all().len(), 5);
        assert!(store.list_all().iter().all(|r| !r.slug.is_empty()));
    }

    #[test]
    fn failed_write_is_an_error() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let err = run(&mut store, Record::new("x")).unwrap_err();
        assert!(matches!(err, AnuarioError::Store(_)));
    }
}
