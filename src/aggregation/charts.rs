//! Series shown on the dashboard charts.

use serde::Serialize;

use super::grouping::{group_by_key, group_count, top_n};
use super::timeline::group_by_day;
use super::unique::is_valid_centro;
use crate::core::{CategoryCount, DailyCount, EstadoCategory, Turno, TurnoField};
use crate::normalize::has_date_assigned;

/// One estado label with its count and status family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstadoCount {
    pub name: String,
    pub value: usize,
    pub category: EstadoCategory,
}

/// Requests per facility, helper-sheet labels excluded.
pub fn requests_by_centro(records: &[Turno]) -> Vec<CategoryCount> {
    group_count(records, TurnoField::Centro, Some(&is_valid_centro))
}

/// Requests per estado label, tagged with the status family.
pub fn estado_breakdown(records: &[Turno]) -> Vec<EstadoCount> {
    group_count(records, TurnoField::Estado, None)
        .into_iter()
        .map(|entry| EstadoCount {
            category: EstadoCategory::classify(&entry.name),
            name: entry.name,
            value: entry.value,
        })
        .collect()
}

/// Most requested specialties.
pub fn top_especialidades(records: &[Turno], n: usize) -> Vec<CategoryCount> {
    top_n(group_count(records, TurnoField::Especialidad, None), n)
}

/// Most frequent coverage plans; records without one count as `Sin cobertura`.
pub fn top_coberturas(records: &[Turno], n: usize) -> Vec<CategoryCount> {
    let groups = group_by_key(records, |turno: &Turno| {
        turno
            .cobertura
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| TurnoField::Cobertura.missing_label())
    });
    top_n(
        groups
            .into_iter()
            .map(|g| CategoryCount::new(g.name, g.members.len()))
            .collect(),
        n,
    )
}

/// Requests still waiting for an appointment date, per facility.
pub fn undated_by_centro(records: &[Turno]) -> Vec<CategoryCount> {
    let undated = records.iter().filter(|turno| !has_date_assigned(turno));
    let groups = group_by_key(undated, |turno: &Turno| {
        let centro = turno.centro.trim();
        if centro.is_empty() {
            TurnoField::Centro.missing_label()
        } else {
            centro.to_string()
        }
    });
    top_n(
        groups
            .into_iter()
            .map(|g| CategoryCount::new(g.name, g.members.len()))
            .collect(),
        usize::MAX,
    )
}

/// Every chart series of the dashboard, computed from one record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSet {
    pub por_centro: Vec<CategoryCount>,
    pub por_estado: Vec<EstadoCount>,
    pub top_especialidades: Vec<CategoryCount>,
    pub top_coberturas: Vec<CategoryCount>,
    pub sin_fecha_por_centro: Vec<CategoryCount>,
    pub timeline: Vec<DailyCount>,
}

impl ChartSet {
    pub fn from_records(records: &[Turno], top: usize) -> Self {
        Self {
            por_centro: requests_by_centro(records),
            por_estado: estado_breakdown(records),
            top_especialidades: top_especialidades(records, top),
            top_coberturas: top_coberturas(records, top),
            sin_fecha_por_centro: undated_by_centro(records),
            timeline: group_by_day(records),
        }
    }
}
