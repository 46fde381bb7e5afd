//! Command handlers. Each returns `anyhow::Result` so failures carry context
//! up to `main`.

pub mod init;
pub mod summary;
pub mod table;
pub mod view;

pub use init::handle_init_command;
pub use summary::handle_summary_command;
pub use table::handle_table_command;
pub use view::handle_view_command;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::DashboardConfig;
use crate::io::{load_turnos_file, HttpClient, InMemorySource, TurnoSource};

/// The endpoint, or a local dump when `input` is given.
pub(crate) fn turno_source(
    config: &DashboardConfig,
    input: Option<&Path>,
) -> Result<Box<dyn TurnoSource>> {
    match input {
        Some(path) => {
            let records = load_turnos_file(path)
                .with_context(|| format!("Failed to load turnos from {}", path.display()))?;
            Ok(Box::new(InMemorySource::new(records)))
        }
        None => {
            let client =
                HttpClient::from_config(config).context("Failed to create HTTP client")?;
            Ok(Box::new(client))
        }
    }
}
