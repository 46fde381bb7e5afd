//! Column sorting for dynamic tables.

use serde::Serialize;

use super::value::DynamicTable;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Next sort state after the user picks `column`.
///
/// Picking the sorted column flips its direction; any other column starts
/// ascending.
pub fn toggle_sort(current: Option<&SortState>, column: &str) -> SortState {
    match current {
        Some(state) if state.column == column => SortState {
            column: state.column.clone(),
            direction: state.direction.toggled(),
        },
        _ => SortState::ascending(column),
    }
}

/// Sort row indices by a column, case-insensitively on canonical strings.
///
/// Stable in both directions: rows with equal keys keep their relative order.
pub fn sort_indices(indices: &mut [usize], table: &DynamicTable, sort: &SortState) {
    let keys: Vec<String> = table
        .rows
        .iter()
        .map(|row| row.get(&sort.column).canonical().to_lowercase())
        .collect();

    match sort.direction {
        SortDirection::Ascending => indices.sort_by(|&a, &b| keys[a].cmp(&keys[b])),
        SortDirection::Descending => indices.sort_by(|&a, &b| keys[b].cmp(&keys[a])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> DynamicTable {
        DynamicTable::from_json_rows(vec![
            json!({"id": 1, "cobertura": "pami"}),
            json!({"id": 2, "cobertura": "OSDE"}),
            json!({"id": 3, "cobertura": "Galeno"}),
            json!({"id": 4, "cobertura": "osde"}),
        ])
    }

    fn ids(table: &DynamicTable, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| table.rows[i].get("id").canonical())
            .collect()
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let first = toggle_sort(None, "cobertura");
        assert_eq!(first, SortState::ascending("cobertura"));
        let second = toggle_sort(Some(&first), "cobertura");
        assert_eq!(second.direction, SortDirection::Descending);
        let third = toggle_sort(Some(&second), "cobertura");
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_column_resets_to_ascending() {
        let state = SortState {
            column: "cobertura".into(),
            direction: SortDirection::Descending,
        };
        assert_eq!(toggle_sort(Some(&state), "id"), SortState::ascending("id"));
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let table = table();
        let mut indices: Vec<usize> = (0..table.len()).collect();
        sort_indices(&mut indices, &table, &SortState::ascending("cobertura"));
        // "OSDE" and "osde" compare equal and keep input order.
        assert_eq!(ids(&table, &indices), vec!["3", "2", "4", "1"]);

        let mut indices: Vec<usize> = (0..table.len()).collect();
        let desc = SortState {
            column: "cobertura".into(),
            direction: SortDirection::Descending,
        };
        sort_indices(&mut indices, &table, &desc);
        assert_eq!(ids(&table, &indices), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_sort_compares_strings_not_numbers() {
        let table = DynamicTable::from_json_rows(vec![
            json!({"n": 10}),
            json!({"n": 9}),
            json!({"n": 100}),
        ]);
        let mut indices: Vec<usize> = (0..3).collect();
        sort_indices(&mut indices, &table, &SortState::ascending("n"));
        assert_eq!(indices, vec![0, 2, 1]);
    }

    #[test]
    fn test_missing_cells_sort_first() {
        let table = DynamicTable::from_json_rows(vec![
            json!({"a": "x", "b": "z"}),
            json!({"a": "y"}),
        ]);
        let mut indices = vec![0, 1];
        sort_indices(&mut indices, &table, &SortState::ascending("b"));
        assert_eq!(indices, vec![1, 0]);
    }
}
