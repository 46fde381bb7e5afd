use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::{Error, FilterParams};
use crate::normalize::parse_calendar_date;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "turnos")]
#[command(about = "KPIs, charts and tables for medical appointment requests", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the nearest .turnos.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Turnos endpoint URL (overrides config and TURNOS_API_URL)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// View endpoint URL (overrides config and TURNOS_VIEWS_URL)
    #[arg(long = "views-url", global = true)]
    pub views_url: Option<String>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// KPI cards, chart series and the first page of turnos
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Read turnos from a local JSON dump instead of the endpoint
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// One page of the turnos table, newest requests first
    Table {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page number (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Oldest requests first
        #[arg(long)]
        asc: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Read turnos from a local JSON dump instead of the endpoint
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Fetch a named view (e.g. coberturas) and print one page
    View {
        /// View name
        name: String,

        /// Free-text search across all columns
        #[arg(short, long)]
        query: Option<String>,

        /// Sort column; repeating a column flips its direction
        #[arg(long)]
        sort: Vec<String>,

        /// Page number (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Write a default .turnos.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Filter flags shared by the data commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start of the request date range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// End of the request date range (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Centros to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub centro: Vec<String>,

    /// Especialidades to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub especialidad: Vec<String>,

    /// Estados to include (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub estado: Vec<String>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> FilterParams {
        FilterParams::new()
            .with_from(self.from)
            .with_to(self.to)
            .with_centros(self.centro.iter().cloned())
            .with_especialidades(self.especialidad.iter().cloned())
            .with_estados(self.estado.iter().cloned())
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(value).ok_or_else(|| Error::invalid_date(value).to_string())
}
