//! Category enumeration and the search/category filter.

use std::collections::HashSet;

use super::pagination::Page;
use super::state::{ALL_CATEGORIES, QueryState};
use crate::catalog::ToolRecord;

/// A category and how many records belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn is_all(&self) -> bool {
        self.name == ALL_CATEGORIES
    }
}

/// "All" followed by each distinct non-empty category in first-occurrence order.
///
/// The "All" count is the catalog size; other counts are exact-match counts.
pub fn categories(records: &[ToolRecord]) -> Vec<CategoryCount> {
    let mut seen = HashSet::new();
    let mut out = vec![CategoryCount {
        name: ALL_CATEGORIES.to_string(),
        count: records.len(),
    }];

    for category in records.iter().filter_map(ToolRecord::category) {
        if seen.insert(category) {
            out.push(CategoryCount {
                name: category.to_string(),
                count: 0,
            });
        }
    }

    for entry in out.iter_mut().skip(1) {
        entry.count = records
            .iter()
            .filter(|r| r.category.as_deref() == Some(entry.name.as_str()))
            .count();
    }

    out
}

/// Whether a record passes both the category and the search filter.
pub fn matches(record: &ToolRecord, state: &QueryState) -> bool {
    matches_category(record, state.category()) && matches_search(record, state.search())
}

fn matches_category(record: &ToolRecord, category: &str) -> bool {
    category == ALL_CATEGORIES || record.category.as_deref() == Some(category)
}

fn matches_search(record: &ToolRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    [Some(record.name.as_str()), record.description.as_deref(), record.tagline.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing the filter, in catalog order.
pub fn filter<'a>(records: &'a [ToolRecord], state: &QueryState) -> Vec<&'a ToolRecord> {
    records.iter().filter(|r| matches(r, state)).collect()
}

/// Everything the list view renders for one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub categories: Vec<CategoryCount>,
    pub page: Page<'a>,
    /// Search text is non-empty
    pub searching: bool,
    /// Search or category narrows the catalog
    pub filtered: bool,
}

impl Listing<'_> {
    /// Message shown when no record passes the filter
    pub fn empty_message(&self) -> &'static str {
        if self.filtered {
            "We couldn't find any tools matching your criteria. Try adjusting your filters or search terms."
        } else {
            "No tools are currently available in the directory."
        }
    }

    /// "Found N results" line, shown only for a search with hits
    pub fn result_summary(&self) -> Option<String> {
        if self.searching && !self.page.is_empty() {
            let n = self.page.total_items;
            Some(format!("Found {} result{}", n, plural(n)))
        } else {
            None
        }
    }

    /// "Showing a-b of n tools" footer
    pub fn footer(&self) -> Option<String> {
        self.page.showing().map(|(start, end)| {
            let n = self.page.total_items;
            format!("Showing {}-{} of {} tool{}", start, end, n, plural(n))
        })
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Compute the categories and the current page for a state.
pub fn listing<'a>(records: &'a [ToolRecord], state: &QueryState, page_size: usize) -> Listing<'a> {
    let filtered = filter(records, state);
    Listing {
        categories: categories(records),
        page: Page::new(&filtered, state.page(), page_size),
        searching: state.is_searching(),
        filtered: state.is_filtered(),
    }
}
