//! Integration tests for the nodeplot binary crate.
//!
//! These tests drive argument parsing, configuration resolution and the
//! plotting run without opening a viewer.

use clap::Parser;
use nodeplot::{config_source, load_config, run, Args};
use nodeplot_common::test_utils::coordinate_fixtures::{sample_data_dir, DataDir};
use nodeplot_common::test_utils::{init_test_logging, write_lines};
use nodeplot_common::NodePlotError;
use std::path::{Path, PathBuf};

fn args(list: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("nodeplot").chain(list.iter().copied())).unwrap()
}

fn config_file(dir: &Path, data_dir: &Path) -> String {
    let directory = format!("  directory: '{}'", data_dir.display());
    let path = write_lines(
        dir,
        "nodeplot.yaml",
        &["data:", directory.as_str(), "plot:", "  area_limit: 6.0"],
    );
    path.display().to_string()
}

#[test]
fn test_config_file_then_flags() {
    init_test_logging();
    let data = sample_data_dir();
    let conf_dir = tempfile::tempdir().unwrap();
    let conf = config_file(conf_dir.path(), data.path());

    let config = load_config(&args(&["-c", &conf, "1"])).unwrap();
    assert_eq!(config.data.directory, data.path());
    assert_eq!(config.plot.area_limit, 6.0);

    let config = load_config(&args(&["-c", &conf, "-a", "2,5", "1"])).unwrap();
    assert_eq!(config.plot.area_limit, 2.5);
}

#[test]
fn test_config_source_is_the_explicit_file() {
    let conf_dir = tempfile::tempdir().unwrap();
    let conf = config_file(conf_dir.path(), conf_dir.path());

    assert_eq!(config_source(&args(&["-c", &conf, "1"])), Some(PathBuf::from(&conf)));
}

#[test]
fn test_non_positive_area_limit_flag_rejected() {
    let conf_dir = tempfile::tempdir().unwrap();
    let conf = config_file(conf_dir.path(), conf_dir.path());

    let err = load_config(&args(&["-c", &conf, "-a", "0", "1"])).unwrap_err();
    assert!(err.downcast_ref::<NodePlotError>().is_some());
}

#[test]
fn test_missing_config_file_reported() {
    let err = load_config(&args(&["-c", "/nonexistent/nodeplot.yaml", "1"])).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load configuration"));
}

#[test]
fn test_run_with_missing_given_file() {
    let data = DataDir::new();
    data.write_optimized(&["0,0"], &["0,0"]);
    let conf_dir = tempfile::tempdir().unwrap();
    let conf = config_file(conf_dir.path(), data.path());
    let out = data.path().join("plot.png");

    let args = args(&["-c", &conf, "-o", out.to_str().unwrap(), "5"]);
    let config = load_config(&args).unwrap();
    let err = run(&args, &config).unwrap_err();

    let cause = err.downcast_ref::<NodePlotError>().unwrap();
    assert!(matches!(cause, NodePlotError::FileNotFound { path } if path.ends_with("x5.txt")));
    assert!(format!("{err:#}").contains("Failed to plot data set 5"));
    assert!(!out.exists());
}

#[test]
fn test_run_writes_output_file() {
    let data = sample_data_dir();
    let conf_dir = tempfile::tempdir().unwrap();
    let conf = config_file(conf_dir.path(), data.path());
    let out = data.path().join("plot.png");

    let args = args(&["-c", &conf, "--output", out.to_str().unwrap(), "1"]);
    let config = load_config(&args).unwrap();
    run(&args, &config).unwrap();

    assert!(out.exists());
}
