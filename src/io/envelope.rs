//! JSON response envelopes returned by the spreadsheet endpoints.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::{FetchError, Turno};
use crate::table::DynamicTable;

/// `{ ok, count, params, data, error }`
///
/// A body without `ok` is treated as a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub params: Option<Value>,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response.
    ///
    /// Anything but `ok: true` becomes an application error carrying the
    /// server's message, or `fallback` when it sent none.
    pub fn into_data(self, fallback: &str) -> Result<Option<T>, FetchError> {
        if !self.ok {
            return Err(FetchError::application(self.error, fallback));
        }
        Ok(self.data)
    }
}

pub(crate) const TURNOS_FALLBACK: &str = "failed to load turnos";
pub(crate) const VIEW_FALLBACK: &str = "failed to load view";

/// Decode record rows one by one. Rows that are not JSON objects are skipped.
pub fn turnos_from_rows(origin: &str, rows: Vec<Value>) -> Vec<Turno> {
    let total = rows.len();
    let turnos: Vec<Turno> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match row {
            Value::Object(_) => match serde_json::from_value(row) {
                Ok(turno) => Some(turno),
                Err(e) => {
                    warn!("Skipping row {} from {}: {}", index, origin, e);
                    None
                }
            },
            other => {
                warn!("Skipping non-object row {} from {}: {}", index, origin, other);
                None
            }
        })
        .collect();
    if turnos.len() < total {
        warn!("Kept {} of {} rows from {}", turnos.len(), total, origin);
    }
    turnos
}

/// Decode a turnos body. Missing `data` yields no records.
pub fn decode_turnos(endpoint: &str, body: &str) -> Result<Vec<Turno>, FetchError> {
    let envelope: ApiResponse<Vec<Value>> =
        serde_json::from_str(body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;
    let rows = envelope.into_data(TURNOS_FALLBACK)?.unwrap_or_default();
    Ok(turnos_from_rows(endpoint, rows))
}

/// Decode a view body. A non-array `data` yields an empty table.
pub fn decode_view(endpoint: &str, body: &str) -> Result<DynamicTable, FetchError> {
    let envelope: ApiResponse<Value> =
        serde_json::from_str(body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;
    match envelope.into_data(VIEW_FALLBACK)? {
        Some(Value::Array(rows)) => Ok(DynamicTable::from_json_rows(rows)),
        _ => Ok(DynamicTable::default()),
    }
}
