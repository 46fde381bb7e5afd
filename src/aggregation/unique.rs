//! Deduplicated option lists for filter selectors.

use std::collections::BTreeSet;

use crate::core::{Turno, TurnoField};
use crate::normalize::normalize_text;

/// Labels of helper sheets that leak into the `centro` column upstream
/// (summary and lookup-list tabs). Compared after [`normalize_text`].
pub const INVALID_CENTRO_NAMES: [&str; 6] = [
    "copia de resumen",
    "resumen_per",
    "coberturas",
    "especialidades",
    "especialidades select",
    "estados",
];

/// Whether a centro label names an actual facility.
pub fn is_valid_centro(centro: &str) -> bool {
    let normalized = normalize_text(centro);
    !normalized.is_empty() && !INVALID_CENTRO_NAMES.contains(&normalized.as_str())
}

/// Sorted, deduplicated values of a field.
///
/// Absent values are skipped. For [`TurnoField::Centro`] sentinel labels and
/// blank names are removed as well.
pub fn unique_values(records: &[Turno], field: TurnoField) -> Vec<String> {
    let values: BTreeSet<&str> = records.iter().filter_map(|t| t.field(field)).collect();

    values
        .into_iter()
        .filter(|value| field != TurnoField::Centro || is_valid_centro(value))
        .map(str::to_string)
        .collect()
}

/// Option lists for the three filter selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FilterOptions {
    pub centros: Vec<String>,
    pub especialidades: Vec<String>,
    pub estados: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Turno]) -> Self {
        Self {
            centros: unique_values(records, TurnoField::Centro),
            especialidades: unique_values(records, TurnoField::Especialidad),
            estados: unique_values(records, TurnoField::Estado),
        }
    }
}
