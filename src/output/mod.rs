//! Output formats for the CLI.

pub mod json;
pub mod terminal;

pub use json::{output_json, to_json};
pub use terminal::{
    format_change, format_dashboard, format_error, format_kpis, format_page_window,
    format_series, format_turno_page,
};

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}
