//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::{NodePlotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest identifier accepted by [`FileId`].
pub const MAX_FILE_ID_LEN: usize = 64;

/// A 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// An ordered, labeled sequence of points loaded from one x/y file pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    label: String,
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set from already paired points.
    pub fn new(label: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Legend label of this set.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Points in file order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest axis-aligned box containing every point, as
    /// `(x_min, x_max, y_min, y_max)`.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold(
            (first.x, first.x, first.y, first.y),
            |(x_min, x_max, y_min, y_max), p| {
                (x_min.min(p.x), x_max.max(p.x), y_min.min(p.y), y_max.max(p.y))
            },
        ))
    }
}

/// Identifier selecting one `x{id}.txt` / `y{id}.txt` pair.
///
/// Only ASCII alphanumerics, `-` and `_` are accepted so the id can never
/// escape the data directory once interpolated into a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileId(String);

impl FileId {
    /// Validates and wraps a string identifier.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let reject = |reason: &str| NodePlotError::InvalidFileId {
            id: id.clone(),
            reason: reason.to_string(),
        };

        if id.is_empty() {
            return Err(reject("identifier cannot be empty"));
        }
        if id.len() > MAX_FILE_ID_LEN {
            return Err(reject("identifier is too long"));
        }
        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(reject(&format!("character {c:?} is not allowed")));
        }

        Ok(Self(id))
    }

    /// The identifier as it appears in file names.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the given-node x coordinates.
    pub fn x_file_name(&self) -> String {
        format!("x{}.txt", self.0)
    }

    /// File name of the given-node y coordinates.
    pub fn y_file_name(&self) -> String {
        format!("y{}.txt", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileId {
    type Err = NodePlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<u32> for FileId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for FileId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_keeps_order() {
        let set = PointSet::new(
            "Given locations",
            vec![(1.5, 0.5).into(), (2.0, 1.0).into()],
        );
        assert_eq!(set.label(), "Given locations");
        assert_eq!(set.points(), &[Point::new(1.5, 0.5), Point::new(2.0, 1.0)]);
    }

    #[test]
    fn test_extent() {
        let empty = PointSet::new("empty", vec![]);
        assert!(empty.extent().is_none());

        let set = PointSet::new(
            "set",
            vec![Point::new(-3.0, 4.0), Point::new(5.0, -1.0), Point::new(0.0, 0.0)],
        );
        assert_eq!(set.extent(), Some((-3.0, 5.0, -1.0, 4.0)));
    }

    #[test]
    fn test_file_id_from_integer() {
        let id = FileId::from(3u32);
        assert_eq!(id.as_str(), "3");
        assert_eq!(id.x_file_name(), "x3.txt");
        assert_eq!(id.y_file_name(), "y3.txt");
    }

    #[test]
    fn test_file_id_rejects_unsafe_input() {
        assert!(FileId::new("").is_err());
        assert!(FileId::new("../etc").is_err());
        assert!(FileId::new("a/b").is_err());
        assert!(FileId::new("a b").is_err());
        assert!(FileId::new("1.txt").is_err());
        assert!(FileId::new("a".repeat(MAX_FILE_ID_LEN + 1)).is_err());

        assert!(FileId::new("run_2-b").is_ok());
        assert!(FileId::new("a".repeat(MAX_FILE_ID_LEN)).is_ok());
    }

    #[test]
    fn test_file_id_deserialize_validates() {
        let ok: FileId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(ok, FileId::from(7u32));

        let bad = serde_json::from_str::<FileId>("\"../7\"");
        assert!(bad.is_err());
    }
}
