//! Period-over-period comparison: month shifting and KPI deltas.

pub mod kpi;
pub mod period;

pub use kpi::{percent_change, ChangeDirection, KpiComparison, KpiSnapshot, Kpis};
pub use period::{previous_period, shift_date, shift_period};
