//! Access to the apparent-horizon output of numerical-relativity simulations.
//!
//! A simulation run writes its output into a directory tree that may span
//! several restarts. [`SimDir`] indexes such a tree once, and [`Horizons`]
//! exposes the apparent horizons that AHFinderDirect reported in
//! `BH_diagnostics.ah<N>.gp` files.
//!
//! ```rust,no_run
//! use simdir::SimDir;
//!
//! let sim = SimDir::open("/data/bbh_run", true)?;
//! let horizons = sim.horizons()?;
//! for ah in horizons.available_apparent_horizons() {
//!     let found = horizons.get_apparent_horizon(ah)?.time_found();
//!     println!("AH {ah} found {} times", found.len());
//! }
//! # Ok::<(), simdir::SimDirError>(())
//! ```

use std::path::PathBuf;
use thiserror::Error;

pub mod diagnostics;
pub mod horizons;
pub mod scan;
pub mod timeseries;

pub use horizons::{ApparentHorizon, HorizonNumber, HorizonSource, Horizons};
pub use scan::SimDir;
pub use timeseries::TimeSeries;

/// Errors raised while indexing or reading simulation output.
#[derive(Debug, Error)]
pub enum SimDirError {
    /// The simulation directory does not exist or is not a directory.
    #[error("Simulation directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line in a diagnostics file could not be parsed.
    #[error("Malformed data in {path} at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Apparent horizon {0} not available")]
    HorizonNotAvailable(HorizonNumber),
}

pub type Result<T> = std::result::Result<T, SimDirError>;
