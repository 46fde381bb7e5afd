//! Aggregations turning a record set into chart-ready series.
//!
//! All functions borrow their input and return freshly built series; nothing
//! is cached between calls.

pub mod charts;
pub mod grouping;
pub mod timeline;
pub mod unique;

pub use charts::{
    estado_breakdown, requests_by_centro, top_coberturas, top_especialidades, undated_by_centro,
    ChartSet, EstadoCount,
};
pub use grouping::{count_by, group_by, group_count, sort_by_count_desc, top_n, Group};
pub use timeline::group_by_day;
pub use unique::{is_valid_centro, unique_values, FilterOptions, INVALID_CENTRO_NAMES};
