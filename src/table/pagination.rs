//! Fixed-size page windows.
//!
//! Pages are 1-based. All helpers are pure and tolerate a zero page size by
//! treating it as one row per page.

use std::ops::Range;

/// Number of pages needed for `total` rows: `ceil(total / page_size)`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size).max(1))
}

/// Row range `[(page-1)*size, page*size)` of a clamped page, capped at `total`.
pub fn page_range(page: usize, total: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    let page = clamp_page(page, total, size);
    let start = ((page - 1) * size).min(total);
    let end = (page * size).min(total);
    start..end
}

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set page with bounds checking against the current row count.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = clamp_page(page, total, self.page_size);
    }

    pub fn next_page(&mut self, total: usize) {
        self.set_page(self.page.saturating_add(1), total);
    }

    pub fn prev_page(&mut self, total: usize) {
        self.set_page(self.page.saturating_sub(1), total);
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Page actually shown for `total` rows.
    pub fn effective_page(&self, total: usize) -> usize {
        clamp_page(self.page, total, self.page_size)
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        page_range(self.page, total, self.page_size)
    }
}
