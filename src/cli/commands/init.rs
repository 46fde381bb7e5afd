use anyhow::{Context, Result};

use crate::config::write_default_config;

pub fn handle_init_command(force: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to get current directory")?;
    let path = write_default_config(&dir, force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}
