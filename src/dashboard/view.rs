//! Everything the dashboard shows, derived from one snapshot.

use serde::Serialize;

use super::session::DashboardSnapshot;
use crate::aggregation::{ChartSet, FilterOptions};
use crate::comparison::Kpis;
use crate::config::DisplayConfig;
use crate::core::FilterParams;
use crate::table::{TurnoPage, TurnoTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub filters: FilterParams,
    pub options: FilterOptions,
    pub kpis: Kpis,
    pub charts: ChartSet,
    pub turnos: TurnoPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_warning: Option<String>,
}

impl DashboardView {
    /// `None` unless the snapshot is ready: a failed or pending load shows no
    /// derived data.
    pub fn build(
        snapshot: &DashboardSnapshot,
        display: &DisplayConfig,
        table: &TurnoTable,
    ) -> Option<Self> {
        if !snapshot.is_ready() {
            return None;
        }

        let current = snapshot.current.as_slice();
        let previous = snapshot.previous.as_deref().map(Vec::as_slice);

        Some(Self {
            filters: snapshot.filters.clone(),
            options: FilterOptions::from_records(current),
            kpis: Kpis::compute(current, previous, &snapshot.filters),
            charts: ChartSet::from_records(current, display.top_n),
            turnos: table.page_of(current),
            comparison_warning: snapshot.comparison_warning.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::session::LoadState;
    use crate::core::Turno;
    use std::sync::Arc;

    fn snapshot(state: LoadState) -> DashboardSnapshot {
        DashboardSnapshot {
            filters: FilterParams::default(),
            state,
            current: Arc::new(vec![Turno {
                centro: "Norte".into(),
                especialidad: "Clínica".into(),
                estado: "Asignado".into(),
                ..Default::default()
            }]),
            previous: None,
            comparison_warning: None,
        }
    }

    #[test]
    fn test_failed_snapshot_has_no_view() {
        let failed = snapshot(LoadState::Failed("boom".into()));
        assert!(DashboardView::build(&failed, &DisplayConfig::default(), &TurnoTable::default())
            .is_none());
    }

    #[test]
    fn test_ready_snapshot_without_range_has_no_comparison() {
        let view = DashboardView::build(
            &snapshot(LoadState::Ready),
            &DisplayConfig::default(),
            &TurnoTable::default(),
        )
        .unwrap();
        assert_eq!(view.kpis.current.total_requests, 1);
        assert!(!view.kpis.has_comparison);
        assert_eq!(view.options.centros, vec!["Norte"]);
        assert_eq!(view.turnos.rows.len(), 1);
    }
}
