//! Resolution of command line options and config file into a plot request.
//!
//! Precedence, highest first: explicit command line values, the JSON config
//! file given with `--configfile`, built-in defaults.

use crate::ah_found::default_figname;
use crate::args::{FigureArgs, PlotAhFoundArgs};
use crate::{PlotError, Result};
use serde::{Deserialize, Serialize};
use simdir::HorizonNumber;
use std::path::{Path, PathBuf};
use viz::anchor::Anchor;
use viz::output::get_figname;
use viz::style::FigureStyle;

const DEFAULT_EXTENSION: &str = "png";

/// Optional defaults read from a JSON config file.
///
/// ```json
/// {
///     "datadir": "/data/bbh_run",
///     "outdir": "plots",
///     "fig_extension": "svg",
///     "ignore_symlinks": true,
///     "style": { "width": 1600, "height": 1200, "font_size": 18 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfigFile {
    pub datadir: Option<PathBuf>,
    pub outdir: Option<PathBuf>,
    pub fig_extension: Option<String>,
    pub ignore_symlinks: Option<bool>,
    pub style: Option<FigureStyle>,
}

impl PlotConfigFile {
    /// Load from JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config_error = |reason: String| PlotError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let json = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| config_error(e.to_string()))
    }
}

/// Figure options after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureOptions {
    pub datadir: PathBuf,
    pub outdir: PathBuf,
    /// Explicit figure name; `None` means the tool's default name
    pub figname: Option<String>,
    pub fig_extension: String,
    pub verbose: bool,
    pub ignore_symlinks: bool,
    pub style: FigureStyle,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            datadir: PathBuf::from("."),
            outdir: PathBuf::from("."),
            figname: None,
            fig_extension: DEFAULT_EXTENSION.to_string(),
            verbose: false,
            ignore_symlinks: false,
            style: FigureStyle::default(),
        }
    }
}

impl FigureOptions {
    /// Merge `args` over `file`, then over the defaults.
    pub fn resolve(args: &FigureArgs, file: PlotConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            datadir: args
                .datadir
                .clone()
                .or(file.datadir)
                .unwrap_or(defaults.datadir),
            outdir: args.outdir.clone().or(file.outdir).unwrap_or(defaults.outdir),
            figname: args.figname.clone(),
            fig_extension: args
                .fig_extension
                .clone()
                .or(file.fig_extension)
                .unwrap_or(defaults.fig_extension),
            verbose: args.verbose,
            ignore_symlinks: if args.ignore_symlinks {
                true
            } else if args.follow_symlinks {
                false
            } else {
                file.ignore_symlinks.unwrap_or(defaults.ignore_symlinks)
            },
            style: file.style.unwrap_or(defaults.style),
        }
    }

    /// Read the config file named in `args`, if any, and resolve.
    pub fn from_args(args: &FigureArgs) -> Result<Self> {
        let file = match &args.configfile {
            Some(path) => PlotConfigFile::load_from_file(path)?,
            None => PlotConfigFile::default(),
        };
        Ok(Self::resolve(args, file))
    }
}

/// Text annotation placed in a corner of the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerText {
    pub text: String,
    pub anchor: Anchor,
}

/// Everything needed to produce one horizon-found figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub options: FigureOptions,
    /// Requested horizons, in the order given by the user
    pub horizons: Vec<HorizonNumber>,
    pub corner_text: Option<CornerText>,
}

impl PlotRequest {
    /// Request with default options for `horizons` in `datadir`.
    pub fn new<P: Into<PathBuf>>(datadir: P, horizons: Vec<HorizonNumber>) -> Self {
        Self {
            options: FigureOptions {
                datadir: datadir.into(),
                ..Default::default()
            },
            horizons,
            corner_text: None,
        }
    }

    pub fn from_args(args: &PlotAhFoundArgs) -> Result<Self> {
        if args.horizons.is_empty() {
            return Err(PlotError::NoHorizons);
        }

        Ok(Self {
            options: FigureOptions::from_args(&args.figure)?,
            horizons: args.horizons.clone(),
            corner_text: args.corner_text.clone().map(|text| CornerText {
                text,
                anchor: args.corner_anchor,
            }),
        })
    }

    /// Output figure name: the user's override or `ah_<h1>_<h2>..._found`.
    pub fn figname(&self) -> String {
        get_figname(
            self.options.figname.as_deref(),
            &default_figname(&self.horizons),
        )
    }
}
