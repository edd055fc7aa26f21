//! # nodeplot
//!
//! Command line front end that plots given node positions against their
//! optimized counterparts.
//!
//! The binary is a thin wrapper: [`cli::Args`] describes the command line,
//! [`app`] resolves configuration and drives the visualizer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;

pub use app::*;
pub use cli::*;
