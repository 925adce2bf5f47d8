//! Pagination stage and page navigation.
//!
//! Page numbers are 1-based. The page count shown by the navigation controls
//! comes from the size of the whole dataset, not from the filtered result, so
//! a filtered view can show pages that are empty.

use std::ops::Range;

use crate::core::errors::{DashError, Result};

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` rows.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range of `page` within a sequence of `len` rows.
///
/// Pages past the end yield an empty range; page 0 is treated as page 1.
pub fn page_range(page: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}

/// Slice of `items` shown on `page`.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    &items[page_range(page, items.len())]
}

/// Navigation state of the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total_pages: usize,
}

impl Pager {
    pub fn new(total_pages: usize) -> Self {
        Self {
            current: 1,
            total_pages,
        }
    }

    /// Pager for a dataset of `dataset_len` records.
    pub fn for_dataset(dataset_len: usize) -> Self {
        Self::new(total_pages(dataset_len))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// First/previous controls are enabled.
    pub fn can_go_back(&self) -> bool {
        self.current > 1
    }

    /// Next/last controls are enabled.
    pub fn can_go_forward(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn first(&mut self) {
        self.current = 1;
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    pub fn next(&mut self) {
        if self.can_go_forward() {
            self.current += 1;
        }
    }

    pub fn last(&mut self) {
        self.current = self.total_pages.max(1);
    }

    /// Jump to `page`, which must be one of the listed pages.
    pub fn select(&mut self, page: usize) -> Result<()> {
        if page == 0 || page > self.total_pages {
            return Err(DashError::InvalidPage {
                page,
                total: self.total_pages,
            });
        }
        self.current = page;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}
