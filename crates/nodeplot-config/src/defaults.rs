//! Default values for every configuration section.

use crate::schema::*;
use nodeplot_common::logging::LoggingConfig;
use std::path::PathBuf;

/// Default half-width of the boundary square.
pub const DEFAULT_AREA_LIMIT: f64 = 10.0;

/// Names looked for in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["nodeplot.yaml", "nodeplot.yml", "nodeplot.toml"];

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            plot: PlotConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            area_limit: DEFAULT_AREA_LIMIT,
            width: 800,
            height: 800,
            marker_size: 5,
            show_grid: true,
            given_color: "#ff0000".to_string(),
            optimized_color: "#0000ff".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}
