//! Transient browsing state owned by a single list view.

/// Category name that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Search text, selected category and current page of a list view.
///
/// Changing the search text or the category moves back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search: String,
    category: String,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
        }
    }
}

impl QueryState {
    /// Create a new default state: no search, all categories, page 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(category);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.set_page(page);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current page, 1-indexed
    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether a non-empty search is active
    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Whether any filter narrows the catalog
    pub fn is_filtered(&self) -> bool {
        self.is_searching() || self.category != ALL_CATEGORIES
    }

    /// Replace the search text. Resets to page 1 when the text changes.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    /// Append a character to the search text
    pub fn push_search_char(&mut self, c: char) {
        let mut search = self.search.clone();
        search.push(c);
        self.set_search(search);
    }

    /// Remove the last character of the search text
    pub fn pop_search_char(&mut self) {
        let mut search = self.search.clone();
        if search.pop().is_some() {
            self.set_search(search);
        }
    }

    /// Select a category. Resets to page 1 when the category changes.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != self.category {
            self.category = category;
            self.page = 1;
        }
    }

    /// Jump to a page; pages below 1 are treated as 1
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advance one page unless already on the last one
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Go back one page unless already on the first one
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Clear search and category, back to page 1
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }
}
