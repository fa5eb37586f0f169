use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Delete each slug in turn. Every slug gets its own success or error message.
///
/// The store does not say why a delete failed; a slug that was present before the
/// attempt and still fails means the rewrite did not go through.
pub fn run<S: DataStore, I: AsRef<str>>(store: &mut S, slugs: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for slug in slugs {
        let slug = slug.as_ref();
        let existing = store.find_by_slug(slug);

        if store.delete_by_slug(slug) {
            let label = existing
                .as_ref()
                .map(|r| r.display_name().to_string())
                .unwrap_or_else(|| slug.to_string());
            result.add_message(CmdMessage::success(format!(
                "Record deleted ({}): {}",
                slug, label
            )));
            if let Some(record) = existing {
                result.affected_records.push(record);
            }
        } else if existing.is_none() {
            result.add_message(CmdMessage::error(format!("Record not found: {}", slug)));
        } else {
            result.add_message(CmdMessage::error(format!(
                "Could not delete {}: writing {} failed",
                slug,
                store.path().display()
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_by_slug_ignoring_case() {
        let mut store = StoreFixture::new()
            .with_character("harry-potter", "Harry Potter", "Gryffindor")
            .with_character("ron-weasley", "Ron Weasley", "Gryffindor")
            .build();

        let result = run(&mut store, &["HARRY-POTTER"]).unwrap();
        assert!(!result.has_errors());
        assert_eq!(result.affected_records[0].slug, "harry-potter");

        let all = store.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].slug, "ron-weasley");
    }

    #[test]
    fn unknown_slug_reports_not_found() {
        let mut store = StoreFixture::new().with_students().build();
        let saves = store.backend().saves();
        let result = run(&mut store, &["tom-riddle"]).unwrap();
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("not found"));
        assert_eq!(store.backend().saves(), saves);
    }

    #[test]
    fn mixed_batch_reports_each_slug() {
        let mut store = StoreFixture::new().with_students().build();
        let result = run(&mut store, &["luna-lovegood", "nobody", "cedric-diggory"]).unwrap();
        assert_eq!(result.messages.len(), 3);
        assert_eq!(result.affected_records.len(), 2);
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn failed_rewrite_is_reported_separately() {
        let mut store = StoreFixture::new().with_students().build();
        store.backend().set_simulate_write_error(true);
        let result = run(&mut store, &["luna-lovegood"]).unwrap();
        assert!(result.messages[0].content.contains("writing"));
        assert!(result.affected_records.is_empty());
    }
}
