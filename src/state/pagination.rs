//! Pagination - Page cursor over the filtered rows
//!
//! Pages are 1-based. Every method takes the current filtered length so the
//! cursor never caches a row count that a later delete or filter could stale.

use std::ops::Range;

use crate::error::{Error, Result};

/// Page cursor plus the raw "go to page" text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    input: String,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            input: "1".to_string(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Last text typed into the "go to page" box
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Update the "go to page" text without navigating
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Number of pages for `len` rows, never less than one
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Row positions (within the filtered rows) shown on the current page
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.page < self.page_count(len)
    }

    /// Jump to `page`, clamped into `[1, page_count]`
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.page_count(len));
        self.input = self.page.to_string();
    }

    pub fn first(&mut self, len: usize) {
        self.set_page(1, len);
    }

    pub fn last(&mut self, len: usize) {
        self.set_page(self.page_count(len), len);
    }

    /// Returns false on the last page
    pub fn next(&mut self, len: usize) -> bool {
        if !self.can_next(len) {
            return false;
        }
        self.set_page(self.page + 1, len);
        true
    }

    /// Returns false on the first page
    pub fn previous(&mut self, len: usize) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.set_page(self.page - 1, len);
        true
    }

    /// Pull the cursor back into range after the row count shrank
    pub fn clamp(&mut self, len: usize) {
        let clamped = self.page.clamp(1, self.page_count(len));
        if clamped != self.page {
            self.set_page(clamped, len);
        }
    }

    /// Free-form "go to page" entry.
    ///
    /// The text is kept for display whatever happens; only a number within
    /// `[1, page_count]` moves the cursor.
    pub fn go_to(&mut self, input: &str, len: usize) -> Result<usize> {
        self.input = input.to_string();
        let page_count = self.page_count(len);
        match input.trim().parse::<usize>() {
            Ok(page) if (1..=page_count).contains(&page) => {
                self.page = page;
                Ok(page)
            }
            _ => Err(Error::InvalidPageInput {
                input: input.to_string(),
                page_count,
            }),
        }
    }
}

/// Up to `width` consecutive page numbers around `page`, for the numbered
/// buttons of the pagination bar
pub fn page_window(page: usize, page_count: usize, width: usize) -> Range<usize> {
    let width = width.max(1).min(page_count);
    let start = page
        .saturating_sub(width / 2)
        .clamp(1, page_count + 1 - width);
    start..start + width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3, 5), 1..4);
        assert_eq!(page_window(1, 10, 5), 1..6);
        assert_eq!(page_window(6, 10, 5), 4..9);
        assert_eq!(page_window(10, 10, 5), 6..11);
        assert_eq!(page_window(1, 1, 5), 1..2);
    }

    #[test]
    fn test_page_count_never_zero() {
        let pager = Pager::new(10);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.page_count(10), 1);
        assert_eq!(pager.page_count(11), 2);
        assert_eq!(pager.page_count(23), 3);
    }

    #[test]
    fn test_range_is_bounded_by_len() {
        let mut pager = Pager::new(10);
        pager.set_page(3, 23);
        assert_eq!(pager.range(23), 20..23);
        assert_eq!(Pager::new(10).range(0), 0..0);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut pager = Pager::new(10);
        pager.set_page(99, 23);
        assert_eq!(pager.page(), 3);
        pager.set_page(0, 23);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_next_and_previous_stop_at_edges() {
        let mut pager = Pager::new(10);
        assert!(!pager.previous(23));
        assert_eq!(pager.page(), 1);

        pager.last(23);
        assert_eq!(pager.page(), 3);
        assert!(!pager.next(23));
        assert_eq!(pager.page(), 3);

        assert!(pager.previous(23));
        assert_eq!(pager.page(), 2);
        pager.first(23);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pager = Pager::new(10);
        pager.set_page(3, 23);
        pager.clamp(12);
        assert_eq!(pager.page(), 2);
        pager.clamp(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_go_to_accepts_in_range_number() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.go_to("2", 23).expect("in range"), 2);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.input(), "2");
    }

    #[test]
    fn test_go_to_rejects_bad_input_but_keeps_text() {
        let mut pager = Pager::new(10);
        pager.set_page(2, 23);

        for input in ["", "abc", "0", "4", "-1", "2.5"] {
            let err = pager.go_to(input, 23).expect_err("rejected");
            assert!(matches!(err, Error::InvalidPageInput { page_count: 3, .. }));
            assert_eq!(pager.page(), 2);
            assert_eq!(pager.input(), input);
        }
    }
}
