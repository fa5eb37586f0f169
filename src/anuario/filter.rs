//! Record filtering and pagination.
//!
//! A [`RecordFilter`] is a plain value: whoever collects the user's inputs (search
//! box, house checkboxes) rebuilds it on every change and re-applies it to the full
//! record list. Nothing is filtered incrementally.

use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Records shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 24;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Case-insensitive substring of the record's name.
    pub search: Option<String>,
    /// Houses to keep. Empty keeps every house.
    pub houses: Vec<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_house(mut self, house: impl Into<String>) -> Self {
        self.houses.push(house.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.houses.is_empty()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, record: &Record) -> bool {
        let name_ok = match self.search_term() {
            Some(term) => record.name.to_lowercase().contains(&term),
            None => true,
        };
        let house_ok = self.houses.is_empty()
            || self
                .houses
                .iter()
                .any(|h| fold(h) == fold(&record.house));
        name_ok && house_ok
    }

    /// Keep the matching records, preserving their order.
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// One page of a longer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually returned.
    pub page: usize,
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total: usize,
}

/// Cut `items` into pages of `per_page` and return page `page` (1-based).
///
/// Page 0 is treated as page 1 and pages past the end as the last page, so the
/// result always describes a page that exists. An empty list is page 1 of 1.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * per_page;

    let items = items.into_iter().skip(start).take(per_page).collect();
    Page {
        items,
        page,
        total_pages,
        total,
    }
}

/// Case folding shared by house matching and house de-duplication.
fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Distinct houses in first-seen order, ignoring blanks and case duplicates.
pub fn houses(records: &[Record]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for record in records {
        let house = record.house.trim();
        if house.is_empty() {
            continue;
        }
        if !seen.iter().any(|h| fold(h) == fold(house)) {
            seen.push(house.to_string());
        }
    }
    seen
}
