//! Plots of apparent-horizon diagnostics from simulation output.
//!
//! The `plot_ah_found` binary is a thin wrapper around this library:
//! [`args`] defines the command line, [`config`] turns it into an immutable
//! [`config::PlotRequest`], and [`ah_found`] builds and renders the figure.

use simdir::SimDirError;
use std::path::PathBuf;
use thiserror::Error;
use viz::VizError;

pub mod ah_found;
pub mod args;
pub mod config;
pub mod logging;

pub use ah_found::{build_ah_found_plot, plot_ah_found, HorizonFoundPlot, ScatterSeries};
pub use config::PlotRequest;

/// Errors raised while preparing or producing a horizon plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The config file could not be read or parsed.
    #[error("Config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("No apparent horizons requested")]
    NoHorizons,

    #[error(transparent)]
    SimDir(#[from] SimDirError),

    #[error(transparent)]
    Viz(#[from] VizError),
}

pub type Result<T> = std::result::Result<T, PlotError>;
