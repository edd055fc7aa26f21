//! Runtime validation of loaded configuration.

use crate::schema::{Config, PlotConfig};
use nodeplot_common::{NodePlotError, Result};

/// Accepted image edge length in pixels.
pub const IMAGE_SIZE_RANGE: std::ops::RangeInclusive<u32> = 100..=8192;

/// Accepted marker radius in pixels.
pub const MARKER_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_plot(&config.plot)?;

        if config.logging.level.trim().is_empty() {
            return Err(NodePlotError::validation_field(
                "Log level cannot be empty",
                "logging.level",
            ));
        }

        if let Some(viewer) = &config.display.viewer {
            if viewer.split_whitespace().next().is_none() {
                return Err(NodePlotError::validation_field(
                    "Viewer command cannot be blank",
                    "display.viewer",
                ));
            }
        }

        Ok(())
    }

    fn validate_plot(plot: &PlotConfig) -> Result<()> {
        if !plot.area_limit.is_finite() || plot.area_limit <= 0.0 {
            return Err(NodePlotError::validation_field(
                format!("Area limit must be a positive number, got {}", plot.area_limit),
                "plot.area_limit",
            ));
        }

        for (value, field) in [(plot.width, "plot.width"), (plot.height, "plot.height")] {
            if !IMAGE_SIZE_RANGE.contains(&value) {
                return Err(NodePlotError::validation_field(
                    format!(
                        "Image size must be between {} and {} pixels, got {value}",
                        IMAGE_SIZE_RANGE.start(),
                        IMAGE_SIZE_RANGE.end()
                    ),
                    field,
                ));
            }
        }

        if !MARKER_SIZE_RANGE.contains(&plot.marker_size) {
            return Err(NodePlotError::validation_field(
                format!("Marker size must be between 1 and 50, got {}", plot.marker_size),
                "plot.marker_size",
            ));
        }

        for (value, field) in [
            (&plot.given_color, "plot.given_color"),
            (&plot.optimized_color, "plot.optimized_color"),
            (&plot.background_color, "plot.background_color"),
        ] {
            if parse_hex_color(value).is_none() {
                return Err(NodePlotError::validation_field(
                    format!("Invalid color '{value}', expected #RRGGBB"),
                    field,
                ));
            }
        }

        Ok(())
    }
}

/// Parses a `#RRGGBB` string into its components.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let component = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((component(0..2)?, component(2..4)?, component(4..6)?))
}
