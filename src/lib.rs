//! Aggregation and period-comparison engine for medical appointment
//! ("turno") request dashboards.
//!
//! The engine is a set of pure functions over borrowed record slices:
//! normalization, grouping and counting, unique filter options, daily
//! bucketing, KPI comparison against the previous month, and
//! search/sort/paginate over runtime-shaped tables. Around it sit a fetch
//! layer, a stateful dashboard session and a CLI.

// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod io;
pub mod normalize;
pub mod observability;
pub mod output;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    CategoryCount, DailyCount, Error, EstadoCategory, FetchError, FilterParams, Result, Turno,
    TurnoField,
};

pub use crate::aggregation::{
    count_by, group_by, group_by_day, group_count, is_valid_centro, unique_values, ChartSet,
    FilterOptions,
};

pub use crate::comparison::{percent_change, shift_period, KpiComparison, KpiSnapshot, Kpis};

pub use crate::config::DashboardConfig;

pub use crate::dashboard::{ApplyOutcome, DashboardSession, DashboardSnapshot, DashboardView};

pub use crate::io::{HttpClient, InMemorySource, TurnoSource, ViewSource};

pub use crate::normalize::{has_date_assigned, looks_like_date, normalize_text};

pub use crate::table::{DynamicTable, PageWindow, SortDirection, SortState, TableView, TurnoTable};
