//! # nodeplot graphs
//!
//! Coordinate file loading and scatter plot rendering for nodeplot.
//!
//! Given and optimized node positions are read from decimal-comma text
//! files, composed into a [`ScatterPlot`] over a fixed boundary square, and
//! drawn with plotters either to an interactive viewer, a file, or an
//! in-memory PNG.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod plot;
pub mod renderer;
pub mod viewer;
pub mod visualizer;

pub use loader::*;
pub use plot::*;
pub use renderer::*;
pub use viewer::*;
pub use visualizer::*;
