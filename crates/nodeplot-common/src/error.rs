//! Error types and utilities for nodeplot

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for nodeplot operations
pub type Result<T> = std::result::Result<T, NodePlotError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for nodeplot operations
#[derive(Error, Debug)]
pub enum NodePlotError {
    /// A required coordinate file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A token could not be converted to a finite number
    #[error("Parse error in {} at line {line}: invalid number '{token}'", path.display())]
    Parse {
        /// File containing the token
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Raw token as read from the file
        token: String,
    },

    /// The x and y files of one pair hold a different number of values
    #[error(
        "Shape mismatch: {} has {x_len} values but {} has {y_len}",
        x_path.display(),
        y_path.display()
    )]
    ShapeMismatch {
        /// Path of the x-coordinate file
        x_path: PathBuf,
        /// Path of the y-coordinate file
        y_path: PathBuf,
        /// Number of x values
        x_len: usize,
        /// Number of y values
        y_len: usize,
    },

    /// The identifier used to build file names was rejected
    #[error("Invalid file id '{id}': {reason}")]
    InvalidFileId {
        /// Identifier as supplied
        id: String,
        /// Why it was rejected
        reason: String,
    },

    /// I/O related errors other than a missing file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// Graph rendering and image encoding errors
    #[error("Graph error: {message}")]
    Graph {
        /// Description
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Failure to present the plot to the user
    #[error("Display error: {message}")]
    Display {
        /// Description
        message: String,
        /// Underlying error
        #[source]
        source: Option<BoxedSource>,
    },
}

impl NodePlotError {
    /// Map an I/O error on `path`, turning `NotFound` into [`NodePlotError::FileNotFound`]
    pub fn from_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new display error
    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new display error with source
    pub fn display_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Display {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the error was raised while loading input data
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::Parse { .. }
                | Self::ShapeMismatch { .. }
                | Self::Io { .. }
        )
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to NodePlotError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for NodePlotError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_from_io_maps_not_found() {
        let err = NodePlotError::from_io(
            "xx.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, NodePlotError::FileNotFound { ref path } if path == Path::new("xx.txt")));
        assert_eq!(err.to_string(), "File not found: xx.txt");
    }

    #[test]
    fn test_from_io_keeps_other_kinds() {
        let err = NodePlotError::from_io(
            "x1.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(matches!(err, NodePlotError::Io { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("x1.txt"));
    }

    #[test]
    fn test_error_display_formatting() {
        let parse = NodePlotError::Parse {
            path: PathBuf::from("y3.txt"),
            line: 7,
            token: "1,2,3".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Parse error in y3.txt at line 7: invalid number '1,2,3'"
        );

        let shape = NodePlotError::ShapeMismatch {
            x_path: PathBuf::from("x1.txt"),
            y_path: PathBuf::from("y1.txt"),
            x_len: 3,
            y_len: 2,
        };
        assert_eq!(
            shape.to_string(),
            "Shape mismatch: x1.txt has 3 values but y1.txt has 2"
        );

        let config_error = NodePlotError::config_with_source(
            "missing field",
            io::Error::new(io::ErrorKind::InvalidData, "no 'plot' key"),
        );
        assert_eq!(config_error.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_load_error_classification() {
        assert!(NodePlotError::FileNotFound {
            path: PathBuf::from("xx.txt")
        }
        .is_load_error());
        assert!(!NodePlotError::graph("boom").is_load_error());
        assert!(!NodePlotError::display("no viewer").is_load_error());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::Other, "Root cause");
        let error = NodePlotError::display_with_source("Viewer failed", root_error);

        let source = error.source().expect("source should be kept");
        assert_eq!(source.to_string(), "Root cause");
    }
}
