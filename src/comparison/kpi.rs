//! KPI snapshots and period-over-period deltas.

use serde::Serialize;

use crate::aggregation::unique_values;
use crate::core::{EstadoCategory, FilterParams, Turno, TurnoField};

/// Relative change from `previous` to `current`, in percent.
///
/// `None` when the baseline is zero or either value is not finite: a zero
/// baseline has no meaningful percentage and must not be shown as one.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if !current.is_finite() || !previous.is_finite() || previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// The four dashboard KPIs for one record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSnapshot {
    pub total_requests: usize,
    pub confirmed: usize,
    /// Confirmed over total, in percent; `0.0` for an empty set.
    pub conversion_rate: f64,
    pub active_specialties: usize,
}

impl KpiSnapshot {
    pub fn from_records(records: &[Turno]) -> Self {
        let total_requests = records.len();
        let confirmed = records
            .iter()
            .filter(|t| EstadoCategory::classify(&t.estado).is_confirmed())
            .count();
        let conversion_rate = if total_requests > 0 {
            confirmed as f64 / total_requests as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_requests,
            confirmed,
            conversion_rate,
            active_specialties: unique_values(records, TurnoField::Especialidad).len(),
        }
    }
}

/// Percent change per KPI; `None` means "no comparison", never 0%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct KpiComparison {
    pub total_requests: Option<f64>,
    pub confirmed: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub active_specialties: Option<f64>,
}

impl KpiComparison {
    pub fn between(current: &KpiSnapshot, previous: &KpiSnapshot) -> Self {
        Self {
            total_requests: percent_change(
                current.total_requests as f64,
                previous.total_requests as f64,
            ),
            confirmed: percent_change(current.confirmed as f64, previous.confirmed as f64),
            conversion_rate: percent_change(current.conversion_rate, previous.conversion_rate),
            active_specialties: percent_change(
                current.active_specialties as f64,
                previous.active_specialties as f64,
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_requests.is_none()
            && self.confirmed.is_none()
            && self.conversion_rate.is_none()
            && self.active_specialties.is_none()
    }
}

/// Direction of a KPI change for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn from_percent(pct: f64) -> Self {
        if pct > 0.0 {
            ChangeDirection::Up
        } else if pct < 0.0 {
            ChangeDirection::Down
        } else {
            ChangeDirection::Flat
        }
    }
}

/// Current KPIs with their comparison against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub current: KpiSnapshot,
    pub previous: Option<KpiSnapshot>,
    pub comparisons: KpiComparison,
    pub has_comparison: bool,
}

impl Kpis {
    /// Comparisons are only produced when the filters carry both dates and a
    /// previous-period record set is available.
    pub fn compute(current: &[Turno], previous: Option<&[Turno]>, filters: &FilterParams) -> Self {
        let current = KpiSnapshot::from_records(current);
        let previous = previous
            .filter(|_| filters.has_range())
            .map(KpiSnapshot::from_records);

        let comparisons = previous
            .as_ref()
            .map(|prev| KpiComparison::between(&current, prev))
            .unwrap_or_default();

        Self {
            current,
            has_comparison: previous.is_some(),
            previous,
            comparisons,
        }
    }
}
