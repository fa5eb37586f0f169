use crate::commands::{ensure_single_line, CmdMessage, CmdResult, FieldEdit};
use crate::error::{AnuarioError, Result};
use crate::model::Field;
use crate::store::DataStore;

/// Apply `edits` to the record with `slug`.
///
/// The store replaces records wholesale, so the current record is read first, the
/// edits are applied to that full copy, and the full copy is written back.
pub fn run<S: DataStore>(store: &mut S, slug: &str, edits: &[FieldEdit]) -> Result<CmdResult> {
    if edits.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }
    if edits.iter().any(|e| e.field == Field::Slug) {
        return Err(AnuarioError::InvalidArgument(
            "The slug identifies the record and cannot be edited".to_string(),
        ));
    }

    let mut record = store
        .find_by_slug(slug)
        .ok_or_else(|| AnuarioError::NotFound(slug.to_string()))?;
    for edit in edits {
        edit.apply(&mut record);
    }
    ensure_single_line(&record)?;

    let mut result = CmdResult::default();
    if store.update(&record) {
        let changed: Vec<&str> = edits.iter().map(|e| e.field.name()).collect();
        result.add_message(CmdMessage::success(format!(
            "Record updated ({}): {}",
            record.slug,
            changed.join(", ")
        )));
        result.affected_records.push(record);
    } else {
        result.add_message(CmdMessage::error(format!(
            "Could not update {}",
            record.slug
        )));
    }
    Ok(result)
}
