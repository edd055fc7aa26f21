//! Configuration resolution and the single plotting run.

use crate::cli::Args;
use anyhow::{Context, Result};
use nodeplot_config::{Config, ConfigLoader};
use nodeplot_graphs::Visualizer;
use std::path::PathBuf;
use tracing::info;

/// The configuration file `load_config` reads for `args`, if any.
pub fn config_source(args: &Args) -> Option<PathBuf> {
    ConfigLoader::config_path(args.config.as_deref())
}

/// Loads configuration for `args`: file and environment first, then flags.
pub fn load_config(args: &Args) -> Result<Config> {
    let mut config =
        ConfigLoader::load(args.config.as_deref()).context("Failed to load configuration")?;

    args.apply_to(&mut config);
    config
        .validate()
        .context("Invalid command line arguments")?;

    Ok(config)
}

/// Plots the file pair selected by `args` with `config`.
///
/// Shows the plot in the configured viewer, or writes it to `--output`.
pub fn run(args: &Args, config: &Config) -> Result<()> {
    let visualizer = Visualizer::from_config(config);

    match &args.output {
        Some(path) => {
            visualizer
                .render_to_file(&args.file_id, path)
                .with_context(|| format!("Failed to plot data set {}", args.file_id))?;
            info!("Plot written to {}", path.display());
        }
        None => visualizer
            .visualize(&args.file_id)
            .with_context(|| format!("Failed to plot data set {}", args.file_id))?,
    }

    Ok(())
}
