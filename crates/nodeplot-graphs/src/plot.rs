//! Plot model: what gets drawn, independent of any drawing backend.

use nodeplot_common::{NodePlotError, Point, PointSet, Result};
use nodeplot_config::{parse_hex_color, PlotConfig};
use std::ops::Range;

/// Distance between the boundary square and the edge of the visible area.
pub const AXIS_PADDING: f64 = 2.0;

/// Caption of the comparison plot.
pub const PLOT_TITLE: &str = "Optimized points";

/// Axis-aligned square centered at the origin, drawn as a reference frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySquare {
    half_width: f64,
}

impl BoundarySquare {
    /// Creates a square with side length `2 * half_width`.
    pub fn new(half_width: f64) -> Self {
        Self { half_width }
    }

    /// Half of the side length.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Closed outline starting and ending at the lower-left corner, clockwise
    /// through upper-left, upper-right and lower-right.
    pub fn outline(&self) -> [Point; 5] {
        let a = self.half_width;
        [
            Point::new(-a, -a),
            Point::new(-a, a),
            Point::new(a, a),
            Point::new(a, -a),
            Point::new(-a, -a),
        ]
    }
}

/// Visible interval, identical on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    min: f64,
    max: f64,
}

impl PlotRange {
    /// `[-area_limit - 2, area_limit + 2]`
    pub fn from_area_limit(area_limit: f64) -> Self {
        Self {
            min: -area_limit - AXIS_PADDING,
            max: area_limit + AXIS_PADDING,
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `point` falls inside the visible square.
    pub fn contains(&self, point: &Point) -> bool {
        (self.min..=self.max).contains(&point.x) && (self.min..=self.max).contains(&point.y)
    }

    /// The interval as a `Range` for chart construction.
    pub fn as_range(&self) -> Range<f64> {
        self.min..self.max
    }
}

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Resolved styling, with colors already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Whether to draw the background grid.
    pub show_grid: bool,
    /// Given node marker color.
    pub given_color: Rgb,
    /// Optimized node marker color.
    pub optimized_color: Rgb,
    /// Background color.
    pub background_color: Rgb,
}

impl TryFrom<&PlotConfig> for PlotStyle {
    type Error = NodePlotError;

    fn try_from(config: &PlotConfig) -> Result<Self> {
        let color = |value: &str, field: &str| {
            parse_hex_color(value).ok_or_else(|| {
                NodePlotError::validation_field(format!("Invalid color '{value}'"), field)
            })
        };

        Ok(Self {
            width: config.width,
            height: config.height,
            marker_size: config.marker_size,
            show_grid: config.show_grid,
            given_color: color(&config.given_color, "plot.given_color")?,
            optimized_color: color(&config.optimized_color, "plot.optimized_color")?,
            background_color: color(&config.background_color, "plot.background_color")?,
        })
    }
}

/// Everything needed to draw the comparison plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    given: PointSet,
    optimized: PointSet,
    boundary: BoundarySquare,
    range: PlotRange,
    style: PlotStyle,
}

impl ScatterPlot {
    /// Composes the plot for two point sets under `config`.
    pub fn new(given: PointSet, optimized: PointSet, config: &PlotConfig) -> Result<Self> {
        Ok(Self {
            given,
            optimized,
            boundary: BoundarySquare::new(config.area_limit),
            range: PlotRange::from_area_limit(config.area_limit),
            style: PlotStyle::try_from(config)?,
        })
    }

    /// Caption text.
    pub const fn title(&self) -> &'static str {
        PLOT_TITLE
    }

    /// Given nodes.
    pub const fn given(&self) -> &PointSet {
        &self.given
    }

    /// Optimized nodes.
    pub const fn optimized(&self) -> &PointSet {
        &self.optimized
    }

    /// Reference square.
    pub const fn boundary(&self) -> &BoundarySquare {
        &self.boundary
    }

    /// Visible range on both axes.
    pub const fn range(&self) -> &PlotRange {
        &self.range
    }

    /// Resolved style.
    pub const fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Points of `set` that fall inside the visible range, in file order.
    pub fn visible_points<'a>(
        &'a self,
        set: &'a PointSet,
    ) -> impl Iterator<Item = &'a Point> + 'a {
        set.points().iter().filter(|p| self.range.contains(p))
    }

    /// Number of points, across both sets, that lie outside the visible range.
    pub fn points_outside_range(&self) -> usize {
        let visible =
            self.visible_points(&self.given).count() + self.visible_points(&self.optimized).count();
        self.given.len() + self.optimized.len() - visible
    }
}
