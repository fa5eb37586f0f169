use crate::commands::CmdResult;
use crate::error::{AnuarioError, Result};
use crate::sheet;
use crate::store::DataStore;

/// Parameters for the external report generator, for the record with `slug`.
pub fn run<S: DataStore>(store: &S, slug: &str) -> Result<CmdResult> {
    let record = store
        .find_by_slug(slug)
        .ok_or_else(|| AnuarioError::NotFound(slug.to_string()))?;

    let mut result = CmdResult {
        report: Some(sheet::report_params(&record)),
        ..Default::default()
    };
    result.listed_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn builds_params_for_existing_record() {
        let store = StoreFixture::new().with_students().build();
        let result = run(&store, "Cedric-Diggory").unwrap();
        let params = result.report.unwrap();
        assert_eq!(params["Nombre"], "Cedric Diggory");
        assert_eq!(params["Casa"], "Hufflepuff");
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let store = StoreFixture::new().with_students().build();
        assert!(matches!(
            run(&store, "nobody"),
            Err(AnuarioError::NotFound(_))
        ));
    }
}
