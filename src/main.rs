use anyhow::{Context, Result};
use turnos_dashboard::cli;
use turnos_dashboard::observability::init_logging;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_logging(cli.verbosity);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(cli::run(cli))
}
