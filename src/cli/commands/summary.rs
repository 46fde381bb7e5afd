use anyhow::{bail, Result};
use std::path::Path;

use super::turno_source;
use crate::config::DashboardConfig;
use crate::core::FilterParams;
use crate::dashboard::{DashboardSession, DashboardView};
use crate::output::{format_dashboard, output_json, OutputFormat};
use crate::table::TurnoTable;

pub async fn handle_summary_command(
    config: &DashboardConfig,
    filters: FilterParams,
    format: OutputFormat,
    input: Option<&Path>,
) -> Result<()> {
    let source = turno_source(config, input)?;
    let session = DashboardSession::new();
    session.apply_filters(source.as_ref(), filters).await;

    let snapshot = session.snapshot();
    if let Some(message) = snapshot.error() {
        bail!("{}", message);
    }

    let table = TurnoTable::new(config.display.turnos_page_size);
    let Some(view) = DashboardView::build(&snapshot, &config.display, &table) else {
        bail!("No data loaded");
    };

    match format {
        OutputFormat::Json => output_json(&view, None),
        OutputFormat::Terminal => {
            println!("{}", format_dashboard(&view));
            Ok(())
        }
    }
}
