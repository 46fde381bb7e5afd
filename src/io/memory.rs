//! Offline sources: in-memory records and local JSON dumps.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::envelope::{turnos_from_rows, ApiResponse, TURNOS_FALLBACK};
use super::traits::{TurnoSource, ViewSource};
use crate::core::{Error, FetchError, FilterParams, Result, Turno};
use crate::table::DynamicTable;

/// Records held in memory, filtered locally the way the endpoint filters.
///
/// Failures can be scheduled for specific periods to exercise degraded paths.
#[derive(Debug, Default)]
pub struct InMemorySource {
    records: Vec<Turno>,
    views: HashMap<String, Vec<Value>>,
    failures: Vec<(FilterParams, String)>,
}

impl InMemorySource {
    pub fn new(records: Vec<Turno>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn with_view(mut self, name: impl Into<String>, rows: Vec<Value>) -> Self {
        self.views.insert(name.into(), rows);
        self
    }

    /// Fail every fetch whose filters equal `filters` with `message`.
    pub fn fail_on(mut self, filters: FilterParams, message: impl Into<String>) -> Self {
        self.failures.push((filters, message.into()));
        self
    }

    pub fn records(&self) -> &[Turno] {
        &self.records
    }

    fn scheduled_failure(&self, filters: &FilterParams) -> Option<FetchError> {
        self.failures
            .iter()
            .find(|(f, _)| f == filters)
            .map(|(_, message)| FetchError::Application(message.clone()))
    }
}

#[async_trait]
impl TurnoSource for InMemorySource {
    async fn fetch_turnos(
        &self,
        filters: &FilterParams,
    ) -> std::result::Result<Vec<Turno>, FetchError> {
        if let Some(err) = self.scheduled_failure(filters) {
            return Err(err);
        }
        let turnos: Vec<Turno> = self
            .records
            .iter()
            .filter(|t| filters.matches(t))
            .cloned()
            .collect();
        debug!(
            "In-memory source matched {} of {} turnos",
            turnos.len(),
            self.records.len()
        );
        Ok(turnos)
    }
}

#[async_trait]
impl ViewSource for InMemorySource {
    async fn fetch_view(&self, name: &str) -> std::result::Result<DynamicTable, FetchError> {
        self.views
            .get(name)
            .map(|rows| DynamicTable::from_json_rows(rows.clone()))
            .ok_or_else(|| FetchError::Application(format!("unknown view '{name}'")))
    }
}

/// A local dump is either the full response envelope or a bare record array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Dump {
    Records(Vec<Value>),
    Envelope(ApiResponse<Vec<Value>>),
}

/// Parse a JSON dump of the turnos endpoint.
pub fn parse_turnos_dump(contents: &str) -> Result<Vec<Turno>> {
    let dump: Dump = serde_json::from_str(contents)?;
    let rows = match dump {
        Dump::Records(rows) => rows,
        Dump::Envelope(envelope) => envelope.into_data(TURNOS_FALLBACK)?.unwrap_or_default(),
    };
    Ok(turnos_from_rows("dump", rows))
}

/// Read a JSON dump of the turnos endpoint from disk.
pub fn load_turnos_file(path: &Path) -> Result<Vec<Turno>> {
    let contents = fs::read_to_string(path)?;
    let records = parse_turnos_dump(&contents).map_err(|e| match e {
        Error::Json(source) => Error::from(FetchError::Decode {
            endpoint: path.display().to_string(),
            source,
        }),
        other => other,
    })?;
    debug!("Loaded {} turnos from {}", records.len(), path.display());
    Ok(records)
}
