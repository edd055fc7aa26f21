//! nodeplot - main entry point

use anyhow::{Context, Result};
use clap::Parser;
use nodeplot::{config_source, load_config, run, Args};
use nodeplot_common::logging::init_logging;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let _guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    match config_source(&args) {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    info!(
        file_id = %args.file_id,
        data_dir = %config.data.directory.display(),
        area_limit = config.plot.area_limit,
        "Starting nodeplot"
    );

    if let Err(e) = run(&args, &config) {
        error!("{e:#}");
        return Err(e);
    }

    Ok(())
}
