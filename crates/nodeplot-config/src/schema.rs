//! Configuration schema definitions using serde.

use nodeplot_common::logging::LoggingConfig;
use nodeplot_common::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for nodeplot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where coordinate files are read from.
    pub data: DataConfig,
    /// Plot geometry and styling.
    pub plot: PlotConfig,
    /// Interactive display settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Input data configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `x{id}.txt`, `y{id}.txt`, `xx.txt` and `yy.txt`.
    pub directory: PathBuf,
}

/// Plot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Half-width of the boundary square; the axes span this plus a fixed padding.
    pub area_limit: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Whether to draw the background grid.
    pub show_grid: bool,
    /// Marker color of given nodes (`#RRGGBB`).
    pub given_color: String,
    /// Marker color of optimized nodes (`#RRGGBB`).
    pub optimized_color: String,
    /// Background color (`#RRGGBB`).
    pub background_color: String,
}

/// Interactive display configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Viewer command, split on whitespace; the image path is appended.
    /// The platform default opener is used when unset.
    pub viewer: Option<String>,
    /// Set when the viewer command returns before its window is closed
    /// (e.g. `gio open`). The rendered image is then kept on disk.
    pub detached: bool,
    /// Where images for viewers that do not wait are kept.
    /// Defaults to `nodeplot` under the system temporary directory.
    pub image_dir: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
