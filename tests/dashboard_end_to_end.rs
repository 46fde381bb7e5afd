mod common;

use common::*;
use pretty_assertions::assert_eq;
use turnos_dashboard::config::DisplayConfig;
use turnos_dashboard::table::TurnoTable;
use turnos_dashboard::{
    ApplyOutcome, CategoryCount, DashboardSession, DashboardView, InMemorySource,
};

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("comparison should be present");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn test_second_month_compares_against_first_month() {
    let source = InMemorySource::new(two_month_records());
    let session = DashboardSession::new();

    let outcome = session
        .apply_filters(&source, range("2024-04-01", "2024-04-30"))
        .await;
    assert_eq!(outcome, ApplyOutcome::Ready);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.current.len(), 72);
    assert_eq!(snapshot.previous.as_ref().map(|p| p.len()), Some(48));

    let view = DashboardView::build(&snapshot, &DisplayConfig::default(), &TurnoTable::default())
        .unwrap();
    let kpis = &view.kpis;
    assert!(kpis.has_comparison);
    assert_eq!(kpis.current.total_requests, 72);
    assert_eq!(kpis.current.confirmed, 24);
    assert_eq!(kpis.current.active_specialties, 4);
    assert_eq!(kpis.previous.map(|p| p.confirmed), Some(24));

    assert_close(kpis.comparisons.total_requests, 50.0);
    assert_close(kpis.comparisons.confirmed, 0.0);
    assert_close(
        kpis.comparisons.conversion_rate,
        (100.0 / 3.0 - 50.0) / 50.0 * 100.0,
    );
    assert_close(kpis.comparisons.active_specialties, 100.0 / 3.0);
}

#[tokio::test]
async fn test_empty_first_month_has_null_conversion_comparison() {
    let source = InMemorySource::new(april_records());
    let session = DashboardSession::new();
    session
        .apply_filters(&source, range("2024-04-01", "2024-04-30"))
        .await;

    let snapshot = session.snapshot();
    let view = DashboardView::build(&snapshot, &DisplayConfig::default(), &TurnoTable::default())
        .unwrap();
    assert!(view.kpis.has_comparison);
    assert_eq!(view.kpis.previous.map(|p| p.total_requests), Some(0));
    assert_eq!(view.kpis.comparisons.conversion_rate, None);
    assert_eq!(view.kpis.comparisons.total_requests, None);
}

#[tokio::test]
async fn test_chart_series_for_second_month() {
    let source = InMemorySource::new(two_month_records());
    let session = DashboardSession::new();
    session
        .apply_filters(&source, range("2024-04-01", "2024-04-30"))
        .await;

    let view = DashboardView::build(
        &session.snapshot(),
        &DisplayConfig::default(),
        &TurnoTable::default(),
    )
    .unwrap();
    let charts = &view.charts;

    assert_eq!(
        charts.por_centro,
        vec![
            CategoryCount::new("Centro Norte", 24),
            CategoryCount::new("Centro Sur", 24),
            CategoryCount::new("Centro Oeste", 24),
        ]
    );
    assert_eq!(
        charts.sin_fecha_por_centro,
        vec![
            CategoryCount::new("Centro Sur", 24),
            CategoryCount::new("Centro Oeste", 24),
        ]
    );
    assert_eq!(charts.top_especialidades.len(), 4);
    assert!(charts
        .top_coberturas
        .contains(&CategoryCount::new("Sin cobertura", 15)));

    assert_eq!(charts.timeline.len(), 30);
    assert_eq!(charts.timeline[0].date, date("2024-04-01"));
    assert_eq!(charts.timeline[0].value, 3);
    assert_eq!(charts.timeline[29].value, 2);
    assert_eq!(charts.timeline.iter().map(|d| d.value).sum::<usize>(), 72);

    assert_eq!(
        view.options.centros,
        vec!["Centro Norte", "Centro Oeste", "Centro Sur"]
    );
}

#[tokio::test]
async fn test_turno_table_first_page_is_newest_first() {
    let source = InMemorySource::new(two_month_records());
    let session = DashboardSession::new();
    session
        .apply_filters(&source, range("2024-04-01", "2024-04-30"))
        .await;

    let view = DashboardView::build(
        &session.snapshot(),
        &DisplayConfig::default(),
        &TurnoTable::default(),
    )
    .unwrap();
    assert_eq!(view.turnos.rows.len(), 50);
    assert_eq!(view.turnos.total_pages, 2);
    assert_eq!(view.turnos.rows[0].fecha_solicitud, "30/04/2024");
}

#[tokio::test]
async fn test_open_range_disables_comparison() {
    let source = InMemorySource::new(two_month_records());
    let session = DashboardSession::new();
    session
        .apply_filters(
            &source,
            turnos_dashboard::FilterParams::new().with_from(Some(date("2024-04-01"))),
        )
        .await;

    let snapshot = session.snapshot();
    assert!(snapshot.previous.is_none());
    let view = DashboardView::build(&snapshot, &DisplayConfig::default(), &TurnoTable::default())
        .unwrap();
    assert!(!view.kpis.has_comparison);
    assert!(view.kpis.comparisons.is_empty());
}
