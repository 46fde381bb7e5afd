use anyhow::{Context, Result};

use crate::config::DashboardConfig;
use crate::io::{HttpClient, ViewSource};
use crate::output::{format_page_window, output_json, OutputFormat};
use crate::table::TableView;

pub async fn handle_view_command(
    config: &DashboardConfig,
    name: &str,
    query: Option<&str>,
    sort: &[String],
    page: usize,
    format: OutputFormat,
) -> Result<()> {
    let client = HttpClient::from_config(config).context("Failed to create HTTP client")?;
    render_view(&client, config, name, query, sort, page, format).await
}

pub(crate) async fn render_view<S: ViewSource + ?Sized>(
    source: &S,
    config: &DashboardConfig,
    name: &str,
    query: Option<&str>,
    sort: &[String],
    page: usize,
    format: OutputFormat,
) -> Result<()> {
    let table = source
        .fetch_view(name)
        .await
        .with_context(|| format!("Failed to load view '{name}'"))?;

    let mut view = TableView::new(config.display.view_page_size);
    if let Some(query) = query {
        view.set_query(query);
    }
    for column in sort {
        view.toggle_sort(column);
    }
    view.set_page(page, &table);
    let window = view.window(&table);

    match format {
        OutputFormat::Json => output_json(&window, None),
        OutputFormat::Terminal => {
            println!("{}", format_page_window(&window));
            Ok(())
        }
    }
}
