//! Figure helpers shared by the plotting tools.
//!
//! The plotting binaries describe *what* to draw; this crate takes care of
//! the figure around it:
//!
//! - **Style** (`style`): figure size, fonts and the series colour cycle
//! - **Output** (`output`): figure naming and `<outdir>/<figname>.<ext>` paths
//! - **Anchors** (`anchor`): placement of annotation text in figure corners
//! - **Saving** (`figure`): backend selection from the file extension
//!
//! # Usage
//!
//! ```rust,no_run
//! use plotters::coord::Shift;
//! use plotters::prelude::*;
//! use viz::figure::{save_figure, Figure};
//! use viz::output::output_path;
//! use viz::style::FigureStyle;
//!
//! struct Blank;
//!
//! impl Figure for Blank {
//!     fn draw<DB: DrawingBackend>(
//!         &self,
//!         root: &DrawingArea<DB, Shift>,
//!         _style: &FigureStyle,
//!     ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
//!         root.fill(&WHITE)
//!     }
//! }
//!
//! let path = output_path("plots", "blank", ".svg");
//! save_figure(&Blank, &path, &FigureStyle::default())?;
//! # Ok::<(), viz::VizError>(())
//! ```

use thiserror::Error;

pub mod anchor;
pub mod figure;
pub mod output;
pub mod style;

/// Errors raised while preparing or saving a figure.
#[derive(Debug, Error)]
pub enum VizError {
    /// The output extension has no matching drawing backend.
    #[error("Unsupported figure extension: {0}")]
    UnsupportedExtension(String),

    /// Corner anchor is not one of N, S, E, W, NE, NW, SE, SW.
    #[error("Invalid anchor: {0}")]
    InvalidAnchor(String),

    /// The drawing backend failed while rendering or writing the figure.
    #[error("Drawing error: {0}")]
    Drawing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Standard Result type for figure operations.
pub type Result<T> = std::result::Result<T, VizError>;
