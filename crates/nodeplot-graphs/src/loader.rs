//! Coordinate file loading.
//!
//! A coordinate file holds one decimal-comma number per line. Blank lines are
//! skipped and anything after `#` is treated as a comment. The x and y files
//! of a pair are zipped by position into a [`PointSet`].

use nodeplot_common::{parse_decimal, FileId, NodePlotError, Point, PointSet, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed name of the optimized-node x coordinate file.
pub const OPTIMIZED_X_FILE: &str = "xx.txt";

/// Fixed name of the optimized-node y coordinate file.
pub const OPTIMIZED_Y_FILE: &str = "yy.txt";

/// Legend label of the given nodes.
pub const GIVEN_LABEL: &str = "Given locations";

/// Legend label of the optimized nodes.
pub const OPTIMIZED_LABEL: &str = "Optimized locations";

/// The four files read for one plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateFiles {
    /// `x{id}.txt`
    pub given_x: PathBuf,
    /// `y{id}.txt`
    pub given_y: PathBuf,
    /// `xx.txt`
    pub optimized_x: PathBuf,
    /// `yy.txt`
    pub optimized_y: PathBuf,
}

impl CoordinateFiles {
    /// Resolves the file names for `id` inside `data_dir`.
    pub fn resolve(data_dir: &Path, id: &FileId) -> Self {
        Self {
            given_x: data_dir.join(id.x_file_name()),
            given_y: data_dir.join(id.y_file_name()),
            optimized_x: data_dir.join(OPTIMIZED_X_FILE),
            optimized_y: data_dir.join(OPTIMIZED_Y_FILE),
        }
    }

    /// Loads the given and the optimized point sets, in that order.
    pub fn load(&self) -> Result<(PointSet, PointSet)> {
        let given = load_point_set(GIVEN_LABEL, &self.given_x, &self.given_y)?;
        let optimized = load_point_set(OPTIMIZED_LABEL, &self.optimized_x, &self.optimized_y)?;
        Ok((given, optimized))
    }
}

/// Parses the contents of one coordinate file.
///
/// `path` is only used for error reporting.
pub fn parse_coordinates(text: &str, path: &Path) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(before, _)| before);

        for token in content.split_whitespace() {
            let value = parse_decimal(token).ok_or_else(|| NodePlotError::Parse {
                path: path.to_path_buf(),
                line: index + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Reads and parses one coordinate file.
pub fn read_coordinates(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| NodePlotError::from_io(path, e))?;
    let values = parse_coordinates(&text, path)?;
    debug!(path = %path.display(), count = values.len(), "read coordinate file");
    Ok(values)
}

/// Loads an x/y file pair into a labeled point set.
pub fn load_point_set(label: &str, x_path: &Path, y_path: &Path) -> Result<PointSet> {
    let xs = read_coordinates(x_path)?;
    let ys = read_coordinates(y_path)?;

    if xs.len() != ys.len() {
        return Err(NodePlotError::ShapeMismatch {
            x_path: x_path.to_path_buf(),
            y_path: y_path.to_path_buf(),
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }

    let points = xs.into_iter().zip(ys).map(Point::from).collect();
    Ok(PointSet::new(label, points))
}
