//! Search, sort and page state for a dynamic table.

use serde::Serialize;

use super::filter::filter_indices;
use super::pagination::{page_count, Pagination};
use super::sort::{sort_indices, toggle_sort, SortState};
use super::value::{DynamicTable, Row};

/// Visible slice of a table after search, sort and paging.
#[derive(Debug, Clone, Serialize)]
pub struct PageWindow<'t> {
    pub columns: &'t [String],
    pub rows: Vec<&'t Row>,
    pub page: usize,
    pub total_pages: usize,
    /// Rows matching the search query, across all pages.
    pub matched: usize,
    pub page_size: usize,
}

/// User-controlled table state.
///
/// Holds no rows; the window is recomputed from whatever table is passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    query: String,
    sort: Option<SortState>,
    pagination: Pagination,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            sort: None,
            pagination: Pagination::new(page_size),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    /// Change the search query; always returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.reset();
    }

    /// Sort by `column`, flipping direction if it is already the sort column.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = Some(toggle_sort(self.sort.as_ref(), column));
    }

    pub fn set_page(&mut self, page: usize, table: &DynamicTable) {
        let matched = self.matching_indices(table).len();
        self.pagination.set_page(page, matched);
    }

    pub fn next_page(&mut self, table: &DynamicTable) {
        let matched = self.matching_indices(table).len();
        self.pagination.next_page(matched);
    }

    pub fn prev_page(&mut self, table: &DynamicTable) {
        let matched = self.matching_indices(table).len();
        self.pagination.prev_page(matched);
    }

    fn matching_indices(&self, table: &DynamicTable) -> Vec<usize> {
        filter_indices(table, &self.query)
    }

    /// Filtered and sorted row indices, before paging.
    pub fn ordered_indices(&self, table: &DynamicTable) -> Vec<usize> {
        let mut indices = self.matching_indices(table);
        if let Some(sort) = &self.sort {
            sort_indices(&mut indices, table, sort);
        }
        indices
    }

    pub fn window<'t>(&self, table: &'t DynamicTable) -> PageWindow<'t> {
        let indices = self.ordered_indices(table);
        let matched = indices.len();
        let range = self.pagination.range(matched);

        PageWindow {
            columns: &table.columns,
            rows: indices[range].iter().map(|&i| &table.rows[i]).collect(),
            page: self.pagination.effective_page(matched),
            total_pages: page_count(matched, self.pagination.page_size()).max(1),
            matched,
            page_size: self.pagination.page_size(),
        }
    }
}
