//! Command line arguments.

use clap::Parser;
use nodeplot_common::{parse_decimal, FileId};
use nodeplot_config::Config;
use std::path::PathBuf;

/// Plot given node positions against the optimized ones
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Selects `x{FILE_ID}.txt` and `y{FILE_ID}.txt`
    pub file_id: FileId,

    /// Configuration file path (YAML, or TOML by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configured one
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Directory holding the coordinate files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Half-width of the boundary square; accepts a decimal comma
    #[arg(short, long, value_parser = parse_area_limit)]
    pub area_limit: Option<f64>,

    /// Render to this file (PNG, or SVG by extension) instead of opening a viewer
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Writes the flags that were given over `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.data.directory.clone_from(dir);
        }
        if let Some(limit) = self.area_limit {
            config.plot.area_limit = limit;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

fn parse_area_limit(value: &str) -> Result<f64, String> {
    parse_decimal(value).ok_or_else(|| format!("'{value}' is not a number"))
}
