use clap::{Args, Parser};
use simdir::HorizonNumber;
use std::path::PathBuf;
use viz::anchor::Anchor;

/// Figure and data options shared by the plotting binaries.
///
/// Options left unset fall back to the config file, then to the defaults
/// documented on each field.
#[derive(Args, Debug, Clone, Default)]
pub struct FigureArgs {
    /// Simulation output directory [default: .]
    #[arg(long)]
    pub datadir: Option<PathBuf>,

    /// JSON config file with default values for these options
    #[arg(short = 'c', long)]
    pub configfile: Option<PathBuf>,

    /// Directory where the figure is saved [default: .]
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Name of the output figure, without extension
    #[arg(long)]
    pub figname: Option<String>,

    /// Extension of the output figure: png, jpg, bmp or svg [default: png]
    #[arg(long)]
    pub fig_extension: Option<String>,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Do not follow symlinks in the simulation directory
    #[arg(long, default_value_t = false)]
    pub ignore_symlinks: bool,

    /// Follow symlinks even if the config file sets `ignore_symlinks`
    #[arg(long, default_value_t = false, conflicts_with = "ignore_symlinks")]
    pub follow_symlinks: bool,
}

/// Command line arguments for `plot_ah_found`
#[derive(Parser, Debug, Clone)]
#[command(
    name = "plot_ah_found",
    about = "Plots the time intervals at which the given apparent horizons were found",
    long_about = None
)]
pub struct PlotAhFoundArgs {
    #[command(flatten)]
    pub figure: FigureArgs,

    /// Apparent horizons to plot
    #[arg(
        short = 'a',
        long,
        required = true,
        num_args = 1..,
        allow_negative_numbers = true
    )]
    pub horizons: Vec<HorizonNumber>,

    /// Text written in a corner of the figure
    #[arg(long)]
    pub corner_text: Option<String>,

    /// Where to put the corner text: N, S, E, W, NE, NW, SE or SW
    #[arg(long, default_value = "NE")]
    pub corner_anchor: Anchor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = PlotAhFoundArgs::try_parse_from(["plot_ah_found", "-a", "1", "2"]).unwrap();
        assert_eq!(args.horizons, vec![1, 2]);
        assert!(!args.figure.verbose);
        assert!(args.figure.datadir.is_none());
        assert_eq!(args.corner_anchor, Anchor::NE);
    }

    #[test]
    fn test_horizons_required() {
        let err = PlotAhFoundArgs::try_parse_from(["plot_ah_found", "--datadir", "sim"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_horizons_must_be_integers() {
        assert!(PlotAhFoundArgs::try_parse_from(["plot_ah_found", "-a", "one"]).is_err());
    }

    #[test]
    fn test_parse_all_options() {
        let args = PlotAhFoundArgs::try_parse_from([
            "plot_ah_found",
            "--datadir",
            "sim",
            "--outdir",
            "plots",
            "--figname",
            "found",
            "--fig-extension",
            "svg",
            "--ignore-symlinks",
            "-v",
            "--horizons",
            "3",
            "1",
            "--corner-text",
            "run 7",
            "--corner-anchor",
            "SW",
        ])
        .unwrap();

        assert_eq!(args.figure.datadir, Some(PathBuf::from("sim")));
        assert_eq!(args.figure.outdir, Some(PathBuf::from("plots")));
        assert_eq!(args.figure.figname.as_deref(), Some("found"));
        assert_eq!(args.figure.fig_extension.as_deref(), Some("svg"));
        assert!(args.figure.ignore_symlinks);
        assert!(args.figure.verbose);
        assert_eq!(args.horizons, vec![3, 1]);
        assert_eq!(args.corner_text.as_deref(), Some("run 7"));
        assert_eq!(args.corner_anchor, Anchor::SW);
    }

    #[test]
    fn test_symlink_flags_conflict() {
        let err = PlotAhFoundArgs::try_parse_from([
            "plot_ah_found",
            "-a",
            "1",
            "--ignore-symlinks",
            "--follow-symlinks",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let args =
            PlotAhFoundArgs::try_parse_from(["plot_ah_found", "-a", "1", "--follow-symlinks"])
                .unwrap();
        assert!(args.figure.follow_symlinks);
        assert!(!args.figure.ignore_symlinks);
    }

    #[test]
    fn test_invalid_anchor_rejected() {
        assert!(PlotAhFoundArgs::try_parse_from([
            "plot_ah_found",
            "-a",
            "1",
            "--corner-anchor",
            "BW"
        ])
        .is_err());
    }
}
