use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::turno_source;
use crate::config::DashboardConfig;
use crate::core::FilterParams;
use crate::output::{format_turno_page, output_json, OutputFormat};
use crate::table::{SortDirection, TurnoTable};

pub async fn handle_table_command(
    config: &DashboardConfig,
    filters: FilterParams,
    page: usize,
    ascending: bool,
    format: OutputFormat,
    input: Option<&Path>,
) -> Result<()> {
    let source = turno_source(config, input)?;
    let records = source
        .fetch_turnos(&filters)
        .await
        .context("Failed to load turnos")?;
    debug!("Rendering table over {} turnos", records.len());

    let direction = if ascending {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };
    let mut table = TurnoTable::new(config.display.turnos_page_size).with_direction(direction);
    table.set_page(page, records.len());
    let page = table.page_of(&records);

    match format {
        OutputFormat::Json => output_json(&page, None),
        OutputFormat::Terminal => {
            println!("{}", format_turno_page(&page));
            Ok(())
        }
    }
}
