//! Fixed-size pagination over a filtered list.

use std::ops::Range;

use crate::catalog::ToolRecord;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Index range of page `page` (1-indexed), clamped to `len`.
pub fn page_bounds(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Records visible on this page
    pub items: Vec<&'a ToolRecord>,
    /// Page number, 1-indexed
    pub number: usize,
    pub page_size: usize,
    /// Length of the whole filtered list
    pub total_items: usize,
    pub total_pages: usize,
}

impl<'a> Page<'a> {
    /// Slice page `number` out of a filtered list
    pub fn new(filtered: &[&'a ToolRecord], number: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let bounds = page_bounds(filtered.len(), number, page_size);
        Self {
            items: filtered[bounds].to_vec(),
            number: number.max(1),
            page_size,
            total_items: filtered.len(),
            total_pages: total_pages(filtered.len(), page_size),
        }
    }

    /// No record passed the filter; show the empty state instead of pages
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Whether a page selector should be shown
    pub fn has_navigation(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// 1-indexed inclusive range of the visible items, for "Showing a-b of n"
    pub fn showing(&self) -> Option<(usize, usize)> {
        let bounds = page_bounds(self.total_items, self.number, self.page_size);
        if bounds.is_empty() {
            None
        } else {
            Some((bounds.start + 1, bounds.end))
        }
    }

    /// Page selector entries for this page
    pub fn window(&self) -> Vec<PageMarker> {
        page_window(self.number, self.total_pages)
    }
}

/// An entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Gap,
}

/// Page selector entries: first, last, current ±1, and a gap marker for the
/// pages exactly two away from the current one.
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    (1..=total)
        .filter_map(|page| {
            if page == 1 || page == total || (page + 1 >= current && page <= current + 1) {
                Some(PageMarker::Page(page))
            } else if page + 2 == current || page == current + 2 {
                Some(PageMarker::Gap)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Gap, Page as P};

    fn records(n: usize) -> Vec<ToolRecord> {
        (0..n).map(|i| ToolRecord::new(i as i64, format!("Tool {}", i))).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(25, 1, 10), 0..10);
        assert_eq!(page_bounds(25, 3, 10), 20..25);
        assert_eq!(page_bounds(25, 4, 10), 25..25);
        assert_eq!(page_bounds(0, 1, 10), 0..0);
    }

    #[test]
    fn test_page_slices_last_page() {
        let all = records(23);
        let filtered: Vec<&ToolRecord> = all.iter().collect();
        let page = Page::new(&filtered, 3, 10);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].name, "Tool 20");
        assert_eq!(page.total_pages, 3);
        assert!(page.has_prev());
        assert!(!page.has_next());
        assert_eq!(page.showing(), Some((21, 23)));
    }

    #[test]
    fn test_page_beyond_end_is_empty_slice() {
        let all = records(5);
        let filtered: Vec<&ToolRecord> = all.iter().collect();
        let page = Page::new(&filtered, 9, 10);
        assert!(page.items.is_empty());
        assert!(!page.is_empty());
        assert_eq!(page.showing(), None);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::new(&[], 1, 10);
        assert!(page.is_empty());
        assert!(!page.has_navigation());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.showing(), None);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let all = records(10);
        let filtered: Vec<&ToolRecord> = all.iter().collect();
        let page = Page::new(&filtered, 1, 10);
        assert!(!page.has_navigation());
        assert_eq!(page.showing(), Some((1, 10)));
    }

    #[test]
    fn test_page_window_small() {
        assert_eq!(page_window(1, 1), vec![P(1)]);
        assert_eq!(page_window(1, 3), vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn test_page_window_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![P(1), Gap, P(4), P(5), P(6), Gap, P(10)]
        );
    }

    #[test]
    fn test_page_window_edges() {
        assert_eq!(page_window(1, 10), vec![P(1), P(2), Gap, P(10)]);
        assert_eq!(page_window(10, 10), vec![P(1), Gap, P(9), P(10)]);
        // Gap on a page that is also first/last shows the page itself
        assert_eq!(page_window(3, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
    }
}
