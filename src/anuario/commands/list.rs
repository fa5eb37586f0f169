use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::error::Result;
use crate::filter::{self, RecordFilter};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &S,
    record_filter: &RecordFilter,
    page: usize,
    per_page: usize,
) -> Result<CmdResult> {
    let matching = record_filter.apply(store.list_all());
    let paged = filter::paginate(matching, page, per_page);

    let mut result = CmdResult {
        page: Some(PageInfo::from(&paged)),
        ..Default::default()
    };
    if paged.total == 0 {
        result.add_message(CmdMessage::info(if record_filter.is_empty() {
            "No records found."
        } else {
            "No records match the filter."
        }));
    }
    Ok(result.with_listed_records(paged.items))
}

/// Distinct houses present in the store.
pub fn houses<S: DataStore>(store: &S) -> Result<CmdResult> {
    let houses = filter::houses(&store.list_all());
    let mut result = CmdResult::default();
    if houses.is_empty() {
        result.add_message(CmdMessage::info("No houses found."));
    }
    result.houses = houses;
    Ok(result)
}
