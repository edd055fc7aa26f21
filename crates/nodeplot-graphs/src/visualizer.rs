//! End-to-end comparison plot: load both point sets, compose, present.

use crate::loader::CoordinateFiles;
use crate::plot::ScatterPlot;
use crate::renderer::{GraphRenderer, ScatterRenderer};
use crate::viewer::{PlotViewer, SystemViewer};
use nodeplot_common::{FileId, NodePlotError, PointSet, Result};
use nodeplot_config::{Config, PlotConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Loads a given/optimized file pair and plots them against each other.
///
/// Every operation loads both point sets completely before anything is
/// drawn, so a missing or malformed file never produces a partial plot.
pub struct Visualizer<V = SystemViewer> {
    data_dir: PathBuf,
    image_dir: PathBuf,
    plot: PlotConfig,
    renderer: ScatterRenderer,
    viewer: V,
}

impl Visualizer<SystemViewer> {
    /// Builds a visualizer with the system viewer from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let viewer =
            SystemViewer::new(config.display.viewer.clone()).detached(config.display.detached);
        let visualizer =
            Self::with_viewer(config.data.directory.clone(), config.plot.clone(), viewer);

        match &config.display.image_dir {
            Some(dir) => visualizer.with_image_dir(dir.clone()),
            None => visualizer,
        }
    }
}

/// `nodeplot` under the system temporary directory.
pub fn default_image_dir() -> PathBuf {
    std::env::temp_dir().join("nodeplot")
}

impl<V: PlotViewer> Visualizer<V> {
    /// Builds a visualizer presenting through `viewer`.
    pub fn with_viewer(data_dir: impl Into<PathBuf>, plot: PlotConfig, viewer: V) -> Self {
        Self {
            data_dir: data_dir.into(),
            image_dir: default_image_dir(),
            plot,
            renderer: ScatterRenderer::new(),
            viewer,
        }
    }

    /// Keeps images for viewers that do not wait in `dir`.
    #[must_use]
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Paths of the four files read for `id`.
    pub fn files(&self, id: &FileId) -> CoordinateFiles {
        CoordinateFiles::resolve(&self.data_dir, id)
    }

    /// Loads the given and the optimized point sets for `id`.
    pub fn load_point_sets(&self, id: &FileId) -> Result<(PointSet, PointSet)> {
        let (given, optimized) = self.files(id).load()?;
        info!(
            file_id = %id,
            given = given.len(),
            optimized = optimized.len(),
            "Loaded node positions"
        );
        debug!(given = ?given.extent(), optimized = ?optimized.extent(), "Point extents");
        Ok((given, optimized))
    }

    /// Loads and composes the plot for `id` without drawing it.
    pub fn compose(&self, id: &FileId) -> Result<ScatterPlot> {
        let (given, optimized) = self.load_point_sets(id)?;
        let plot = ScatterPlot::new(given, optimized, &self.plot)?;

        let outside = plot.points_outside_range();
        if outside > 0 {
            warn!(
                outside,
                area_limit = self.plot.area_limit,
                "Some nodes lie outside the visible area and will be clipped"
            );
        }

        Ok(plot)
    }

    /// Plots `id` and shows it.
    ///
    /// With a viewer that waits for close, this blocks until the image is
    /// dismissed and the image is removed afterwards. Otherwise the image is
    /// written to the image directory and left there for the viewer.
    #[instrument(skip_all, fields(file_id = %id))]
    pub fn visualize(&self, id: &FileId) -> Result<()> {
        let plot = self.compose(id)?;
        let file_name = format!("plot-{id}.png");

        if self.viewer.waits_for_close() {
            let scratch = tempfile::Builder::new()
                .prefix("nodeplot-")
                .tempdir()
                .map_err(|e| {
                    NodePlotError::display_with_source("Failed to create scratch directory", e)
                })?;
            let image = scratch.path().join(file_name);

            self.renderer.render_to_file(&plot, &image)?;
            return self.viewer.show(&image);
        }

        std::fs::create_dir_all(&self.image_dir).map_err(|e| {
            NodePlotError::display_with_source(
                format!("Failed to create image directory {}", self.image_dir.display()),
                e,
            )
        })?;
        let image = self.image_dir.join(file_name);

        self.renderer.render_to_file(&plot, &image)?;
        info!(
            path = %image.display(),
            "Viewer does not wait for the plot to be closed, keeping the image"
        );
        self.viewer.show(&image)
    }

    /// Plots `id` into `path` instead of showing it.
    #[instrument(skip_all, fields(file_id = %id, path = %path.display()))]
    pub fn render_to_file(&self, id: &FileId, path: &Path) -> Result<()> {
        let plot = self.compose(id)?;
        self.renderer.render_to_file(&plot, path)
    }

    /// Plots `id` into PNG-encoded bytes.
    pub fn render_to_bytes(&self, id: &FileId) -> Result<Vec<u8>> {
        let plot = self.compose(id)?;
        self.renderer.render_to_bytes(&plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::MockPlotViewer;
    use mockall::predicate::function;
    use nodeplot_common::test_utils::coordinate_fixtures::{sample_data_dir, DataDir};
    use nodeplot_common::Point;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// Hands the image to a background reader and returns at once.
    struct DispatchingViewer {
        seen: mpsc::Sender<bool>,
    }

    impl PlotViewer for DispatchingViewer {
        fn show(&self, image: &Path) -> Result<()> {
            let image = image.to_path_buf();
            let seen = self.seen.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(200));
                let _ = seen.send(image.is_file());
            });
            Ok(())
        }

        fn waits_for_close(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_load_sample_point_sets() {
        let dir = sample_data_dir();
        let visualizer =
            Visualizer::with_viewer(dir.path(), PlotConfig::default(), MockPlotViewer::new());

        let (given, optimized) = visualizer.load_point_sets(&FileId::from(1u32)).unwrap();
        assert_eq!(given.points(), &[Point::new(1.5, 0.5), Point::new(2.0, 1.0)]);
        assert_eq!(optimized.points(), &[Point::new(0.0, 0.0)]);
        assert_eq!(given.label(), "Given locations");
        assert_eq!(optimized.label(), "Optimized locations");
    }

    #[test]
    fn test_missing_optimized_file_fails_before_display() {
        let dir = DataDir::new();
        dir.write_given("1", &["1,5"], &["0,5"]);
        dir.write("yy.txt", &["0,0"]);

        let mut viewer = MockPlotViewer::new();
        viewer.expect_show().never();

        let visualizer = Visualizer::with_viewer(dir.path(), PlotConfig::default(), viewer);
        let err = visualizer.visualize(&FileId::from(1u32)).unwrap_err();

        match err {
            NodePlotError::FileNotFound { path } => assert!(path.ends_with("xx.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error_fails_before_display() {
        let dir = DataDir::new();
        dir.write_given("2", &["1,5", "oops"], &["0,5", "1,0"])
            .write_optimized(&["0,0"], &["0,0"]);

        let mut viewer = MockPlotViewer::new();
        viewer.expect_show().never();

        let visualizer = Visualizer::with_viewer(dir.path(), PlotConfig::default(), viewer);
        let err = visualizer.visualize(&FileId::from(2u32)).unwrap_err();
        assert!(matches!(err, NodePlotError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_compose_uses_configured_area_limit() {
        let dir = sample_data_dir();
        let plot = PlotConfig {
            area_limit: 4.0,
            ..PlotConfig::default()
        };
        let visualizer = Visualizer::with_viewer(dir.path(), plot, MockPlotViewer::new());

        let composed = visualizer.compose(&FileId::from(1u32)).unwrap();
        assert_eq!(composed.range().as_range(), -6.0..6.0);
        assert_eq!(composed.boundary().half_width(), 4.0);
    }

    #[test]
    fn test_visualize_shows_rendered_png() {
        let dir = sample_data_dir();

        let mut viewer = MockPlotViewer::new();
        viewer.expect_waits_for_close().return_const(true);
        viewer
            .expect_show()
            .with(function(|path: &Path| {
                path.extension().is_some_and(|ext| ext == "png") && path.exists()
            }))
            .times(1)
            .returning(|_| Ok(()));

        let visualizer = Visualizer::with_viewer(dir.path(), PlotConfig::default(), viewer);
        visualizer.visualize(&FileId::from(1u32)).unwrap();
    }

    #[test]
    fn test_waiting_viewer_image_removed_after_close() {
        let dir = sample_data_dir();
        let shown = std::sync::Arc::new(std::sync::Mutex::new(None));
        let recorded = shown.clone();

        let mut viewer = MockPlotViewer::new();
        viewer.expect_waits_for_close().return_const(true);
        viewer.expect_show().times(1).returning(move |path| {
            *recorded.lock().unwrap() = Some(path.to_path_buf());
            Ok(())
        });

        let visualizer = Visualizer::with_viewer(dir.path(), PlotConfig::default(), viewer);
        visualizer.visualize(&FileId::from(1u32)).unwrap();

        let image = shown.lock().unwrap().clone().unwrap();
        assert!(!image.exists());
    }

    #[test]
    fn test_image_outlives_dispatching_viewer() {
        let dir = sample_data_dir();
        let images = tempfile::tempdir().unwrap();
        let (seen, reader) = mpsc::channel();

        let visualizer =
            Visualizer::with_viewer(dir.path(), PlotConfig::default(), DispatchingViewer { seen })
                .with_image_dir(images.path().join("kept"));
        visualizer.visualize(&FileId::from(1u32)).unwrap();

        assert!(reader.recv_timeout(Duration::from_secs(5)).unwrap());
        assert!(images.path().join("kept").join("plot-1.png").is_file());
    }
}
