//! Test utilities and shared test helpers for nodeplot.
//!
//! This module provides logging setup, on-disk coordinate fixtures, and
//! property-testing strategies that can be used across all crates in the
//! workspace for unit and integration testing.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Coordinate files written into a temporary data directory.
#[cfg(feature = "tempfile")]
pub mod coordinate_fixtures {
    use super::*;

    /// A temporary data directory removed on drop.
    pub struct DataDir {
        dir: tempfile::TempDir,
    }

    impl DataDir {
        /// Creates an empty data directory.
        pub fn new() -> Self {
            Self {
                dir: tempfile::tempdir().expect("Failed to create temporary directory"),
            }
        }

        /// Directory path.
        pub fn path(&self) -> &Path {
            self.dir.path()
        }

        /// Writes one token per line into `name` and returns the full path.
        pub fn write(&self, name: &str, lines: &[&str]) -> PathBuf {
            write_lines(self.path(), name, lines)
        }

        /// Writes `x{id}.txt` and `y{id}.txt`.
        pub fn write_given(&self, id: &str, xs: &[&str], ys: &[&str]) -> &Self {
            self.write(&format!("x{id}.txt"), xs);
            self.write(&format!("y{id}.txt"), ys);
            self
        }

        /// Writes the fixed `xx.txt` and `yy.txt`.
        pub fn write_optimized(&self, xs: &[&str], ys: &[&str]) -> &Self {
            self.write("xx.txt", xs);
            self.write("yy.txt", ys);
            self
        }
    }

    impl Default for DataDir {
        fn default() -> Self {
            Self::new()
        }
    }

    /// The four files of the two-point example used throughout the tests.
    pub fn sample_data_dir() -> DataDir {
        let dir = DataDir::new();
        dir.write_given("1", &["1,5", "2,0"], &["0,5", "1,0"])
            .write_optimized(&["0,0"], &["0,0"]);
        dir
    }
}

/// Writes `lines` joined with `\n` into `dir/name`.
pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for decimal-comma tokens of the form `-?\d+,\d+` or `-?\d+`.
    pub fn decimal_comma_token() -> impl Strategy<Value = String> {
        r"-?[0-9]{1,6}(,[0-9]{1,6})?"
    }

    /// Strategy for finite coordinates inside a generous plotting area.
    pub fn coordinate() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }
}
