//! Plot the time intervals at which apparent horizons were found
//!
//! Reads the AHFinderDirect diagnostics of a simulation and draws, for each
//! requested horizon, one dot per detection at height equal to the horizon
//! number.
//!
//! Usage:
//! ```
//! cargo run --bin plot_ah_found -- --datadir /data/bbh_run -a 1 2 3
//! ```
//!
//! See --help for detailed options.

use anyhow::Context;
use clap::Parser;
use horizon_plots::args::PlotAhFoundArgs;
use horizon_plots::logging::init_logging;
use horizon_plots::{plot_ah_found, PlotRequest};

fn main() -> anyhow::Result<()> {
    let args = PlotAhFoundArgs::parse();
    init_logging(args.figure.verbose);

    let request = PlotRequest::from_args(&args).context("Failed to prepare plot options")?;

    let path = plot_ah_found(&request).with_context(|| {
        format!(
            "Failed to plot apparent horizons of {}",
            request.options.datadir.display()
        )
    })?;

    println!("Plot saved to: {}", path.display());
    Ok(())
}
