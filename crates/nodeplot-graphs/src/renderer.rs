//! Graph rendering trait and the scatter plot implementation

use crate::plot::{Rgb, ScatterPlot};
use nodeplot_common::{NodePlotError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// Length of one dash of the boundary outline, in pixels.
const DASH_LENGTH: u32 = 8;

/// Gap between dashes of the boundary outline, in pixels.
const DASH_SPACING: u32 = 5;

/// Trait for rendering a [`ScatterPlot`] onto plotters backends
pub trait GraphRenderer {
    /// Draw the plot onto an existing drawing area
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, plot: &ScatterPlot) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static;

    /// Render a graph to a file path; `.svg` selects the SVG backend,
    /// anything else the bitmap backend
    fn render_to_file(&self, plot: &ScatterPlot, path: &Path) -> Result<()> {
        let size = (plot.style().width, plot.style().height);

        if is_svg(path) {
            let root = SVGBackend::new(path, size).into_drawing_area();
            self.draw(&root, plot)?;
        } else {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            self.draw(&root, plot)?;
        }

        info!("Successfully rendered scatter plot to {}", path.display());
        Ok(())
    }

    /// Render a graph to PNG-encoded bytes
    fn render_to_bytes(&self, plot: &ScatterPlot) -> Result<Vec<u8>> {
        let (width, height) = (plot.style().width, plot.style().height);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            self.draw(&root, plot)?;
        }

        let image = image::RgbImage::from_raw(width, height, pixels)
            .ok_or_else(|| NodePlotError::graph("Pixel buffer does not match image size"))?;

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .map_err(|e| NodePlotError::graph_with_source("PNG encoding failed", e))?;

        Ok(bytes)
    }
}

/// Renders given and optimized nodes as markers over the dashed boundary square
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterRenderer;

impl ScatterRenderer {
    /// Creates a new renderer
    pub const fn new() -> Self {
        Self
    }
}

impl GraphRenderer for ScatterRenderer {
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, plot: &ScatterPlot) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let style = plot.style();
        root.fill(&rgb(style.background_color))?;

        let range = plot.range();
        let mut chart = ChartBuilder::on(root)
            .caption(plot.title(), ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(45)
            .build_cartesian_2d(range.as_range(), range.as_range())?;

        {
            let mut mesh = chart.configure_mesh();
            if !style.show_grid {
                mesh.disable_mesh();
            }
            mesh.draw()?;
        }

        let marker_size = style.marker_size;
        for (set, color) in [
            (plot.given(), rgb(style.given_color)),
            (plot.optimized(), rgb(style.optimized_color)),
        ] {
            chart
                .draw_series(
                    plot.visible_points(set)
                        .map(|p| Circle::new((p.x, p.y), marker_size, color.filled())),
                )?
                .label(set.label())
                .legend(move |(x, y)| Circle::new((x, y), marker_size, color.filled()));
        }

        let outline = plot.boundary().outline();
        chart.draw_series(DashedLineSeries::new(
            outline.iter().map(|p| (p.x, p.y)),
            DASH_LENGTH,
            DASH_SPACING,
            BLACK.stroke_width(1),
        ))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

fn rgb((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}
