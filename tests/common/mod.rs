// Shared fixtures for turnos-dashboard integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use tokio::sync::Notify;
use turnos_dashboard::{FetchError, FilterParams, InMemorySource, Turno, TurnoSource};

pub const CENTROS: [&str; 3] = ["Centro Norte", "Centro Sur", "Centro Oeste"];
pub const ESPECIALIDADES: [&str; 4] = ["Clínica Médica", "Pediatría", "Cardiología", "Traumatología"];
pub const COBERTURAS: [&str; 4] = ["OSDE", "PAMI", "Swiss Medical", "IOMA"];

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn range(from: &str, to: &str) -> FilterParams {
    FilterParams::new()
        .with_from(Some(date(from)))
        .with_to(Some(date(to)))
}

/// Builder for a single record.
#[derive(Debug, Clone)]
pub struct TurnoBuilder {
    turno: Turno,
}

impl TurnoBuilder {
    pub fn new(centro: &str, especialidad: &str, estado: &str) -> Self {
        Self {
            turno: Turno {
                centro: centro.to_string(),
                especialidad: especialidad.to_string(),
                estado: estado.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn requested(mut self, day: NaiveDate) -> Self {
        self.turno.fecha_solicitud_iso = Some(format!("{}T09:30:00.000Z", day.format("%Y-%m-%d")));
        self.turno.fecha_solicitud = Some(day.format("%d/%m/%Y").to_string());
        self
    }

    pub fn scheduled(mut self, day: NaiveDate) -> Self {
        self.turno.fecha_turno_iso = Some(format!("{}T14:00:00.000Z", day.format("%Y-%m-%d")));
        self
    }

    pub fn cobertura(mut self, cobertura: Option<&str>) -> Self {
        self.turno.cobertura = cobertura.map(str::to_string);
        self
    }

    pub fn build(self) -> Turno {
        self.turno
    }
}

/// March 2024: 48 requests, every other one confirmed, 3 especialidades.
/// Request days stay within 1..=28.
pub fn march_records() -> Vec<Turno> {
    (0..48)
        .map(|i| {
            let day = NaiveDate::from_ymd_opt(2024, 3, (i % 28) + 1).unwrap();
            let confirmed = i % 2 == 0;
            let builder = TurnoBuilder::new(
                CENTROS[i as usize % 3],
                ESPECIALIDADES[i as usize % 3],
                if confirmed { "Asignado" } else { "Pendiente" },
            )
            .requested(day)
            .cobertura(Some(COBERTURAS[i as usize % 4]));
            if confirmed {
                builder.scheduled(day + chrono::Days::new(7)).build()
            } else {
                builder.build()
            }
        })
        .collect()
}

/// April 2024: 72 requests, one in three confirmed, 4 especialidades.
pub fn april_records() -> Vec<Turno> {
    (0..72)
        .map(|i| {
            let day = NaiveDate::from_ymd_opt(2024, 4, (i % 30) + 1).unwrap();
            let estado = match i % 3 {
                0 => "Turno ASIGNADO",
                1 => "Pendiente de asignación",
                _ => "Cancelado por paciente",
            };
            let cobertura = if i % 5 == 0 {
                None
            } else {
                Some(COBERTURAS[i as usize % 4])
            };
            let builder = TurnoBuilder::new(
                CENTROS[i as usize % 3],
                ESPECIALIDADES[i as usize % 4],
                estado,
            )
            .requested(day)
            .cobertura(cobertura);
            if i % 3 == 0 {
                builder.scheduled(day + chrono::Days::new(10)).build()
            } else {
                builder.build()
            }
        })
        .collect()
}

/// 120 records over March and April 2024 across 3 centros.
pub fn two_month_records() -> Vec<Turno> {
    let mut records = march_records();
    records.extend(april_records());
    records
}

/// Source that holds the answer for one filter selection until released,
/// and logs every request it receives.
pub struct GatedSource {
    inner: InMemorySource,
    gated: FilterParams,
    gate: Notify,
    requests: Mutex<Vec<FilterParams>>,
}

impl GatedSource {
    pub fn new(inner: InMemorySource, gated: FilterParams) -> Self {
        Self {
            inner,
            gated,
            gate: Notify::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn requests(&self) -> Vec<FilterParams> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl TurnoSource for GatedSource {
    async fn fetch_turnos(&self, filters: &FilterParams) -> Result<Vec<Turno>, FetchError> {
        self.requests.lock().push(filters.clone());
        if *filters == self.gated {
            self.gate.notified().await;
        }
        self.inner.fetch_turnos(filters).await
    }
}
