//! Command-line interface for the turnos dashboard
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FilterArgs};

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{load_config, load_config_file, validate_config, DashboardConfig};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Config file (explicit or discovered), then environment, then flags.
pub fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_config(),
    };
    let config = config
        .apply_env()
        .with_turnos_url(cli.api_url.clone())
        .with_views_url(cli.views_url.clone());
    validate_config(&config)
        .map_err(anyhow::Error::msg)
        .context("Invalid endpoint override")?;
    Ok(config)
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { force } = cli.command {
        return commands::handle_init_command(force);
    }

    let config = resolve_config(&cli)?;
    match cli.command {
        Commands::Summary {
            filters,
            format,
            input,
        } => {
            commands::handle_summary_command(
                &config,
                filters.to_filters(),
                format,
                input.as_deref(),
            )
            .await
        }
        Commands::Table {
            filters,
            page,
            asc,
            format,
            input,
        } => {
            commands::handle_table_command(
                &config,
                filters.to_filters(),
                page,
                asc,
                format,
                input.as_deref(),
            )
            .await
        }
        Commands::View {
            name,
            query,
            sort,
            page,
            format,
        } => {
            commands::handle_view_command(&config, &name, query.as_deref(), &sort, page, format)
                .await
        }
        Commands::Init { .. } => Ok(()),
    }
}
