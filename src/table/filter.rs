//! Free-text search across every column.

use super::value::{DynamicTable, Row};

/// Whether any column of the row contains the (already lowercased) needle.
pub fn row_matches(row: &Row, columns: &[String], needle: &str) -> bool {
    columns
        .iter()
        .any(|column| row.get(column).canonical().to_lowercase().contains(needle))
}

/// Indices of rows matching the query, in input order.
///
/// The query is trimmed and compared case-insensitively; an empty query
/// matches every row.
pub fn filter_indices(table: &DynamicTable, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..table.rows.len()).collect();
    }

    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &table.columns, &needle))
        .map(|(index, _)| index)
        .collect()
}
