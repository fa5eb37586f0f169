use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Records by slug, in the order asked for. Unknown slugs become error messages.
pub fn run<S: DataStore, I: AsRef<str>>(store: &S, slugs: &[I]) -> Result<CmdResult> {
    let all = store.list_all();
    let mut result = CmdResult::default();

    for slug in slugs {
        let slug = slug.as_ref();
        match all.iter().find(|r| r.slug_matches(slug)) {
            Some(record) => result.listed_records.push(record.clone()),
            None => result.add_message(CmdMessage::error(format!("Record not found: {}", slug))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_records_in_requested_order() {
        let store = StoreFixture::new().with_students().build();
        let result = run(&store, &["luna-lovegood", "HARRY-POTTER"]).unwrap();
        let slugs: Vec<&str> = result
            .listed_records
            .iter()
            .map(|r| r.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["luna-lovegood", "harry-potter"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn unknown_slug_is_reported_not_fatal() {
        let store = StoreFixture::new().with_students().build();
        let result = run(&store, &["harry-potter", "tom-riddle"]).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("tom-riddle"));
    }
}
