//! Data source traits for the dashboard.
//!
//! The dashboard session and CLI only talk to these traits, so the HTTP
//! client can be swapped for an in-memory source offline and in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use turnos_dashboard::io::{InMemorySource, TurnoSource};
//!
//! let source = InMemorySource::new(records);
//! let turnos = source.fetch_turnos(&FilterParams::new()).await?;
//! ```

use async_trait::async_trait;

use crate::core::{FetchError, FilterParams, Turno};
use crate::table::DynamicTable;

/// Source of appointment records.
///
/// Implementations apply the filters themselves (server-side for HTTP) and
/// must be `Send + Sync` so a session can be shared across tasks.
#[async_trait]
pub trait TurnoSource: Send + Sync {
    /// Records matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the source is unreachable, answers with a
    /// non-success status, reports `ok: false` or sends an undecodable body.
    async fn fetch_turnos(&self, filters: &FilterParams) -> Result<Vec<Turno>, FetchError>;
}

/// Source of named tabular views (coberturas, ...).
#[async_trait]
pub trait ViewSource: Send + Sync {
    /// Rows of the view. A view whose payload is not a list is an empty table.
    async fn fetch_view(&self, name: &str) -> Result<DynamicTable, FetchError>;
}
