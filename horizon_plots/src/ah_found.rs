//! Scatter plot of the times at which apparent horizons were found.
//!
//! Every requested horizon that the simulation knows about becomes one
//! series of points `(time, horizon)`, so each horizon is drawn as a
//! horizontal band of dots over the times it was detected. Gaps in a band
//! are the intervals where the horizon finder lost the horizon.

use crate::config::{CornerText, PlotRequest};
use crate::{PlotError, Result};
use log::{debug, warn};
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use simdir::{HorizonNumber, HorizonSource, SimDir};
use std::ops::Range;
use std::path::PathBuf;
use viz::anchor::DEFAULT_OFFSET;
use viz::figure::{add_text_to_corner, save_figure, Figure};
use viz::output::{output_path, ImageFormat};
use viz::style::{series_color, FigureStyle};

pub const X_LABEL: &str = "Time";
pub const Y_LABEL: &str = "Apparent horizon";

/// Marker radius in pixels, kept minimal because series can be very dense.
pub const MARKER_RADIUS: u32 = 1;

/// Relative padding added on both sides of the time axis.
const TIME_MARGIN: f64 = 0.05;

/// Default figure name, e.g. `ah_1_2_found` for horizons 1 and 2.
pub fn default_figname(horizons: &[HorizonNumber]) -> String {
    let joined = horizons
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join("_");
    format!("ah_{joined}_found")
}

/// Detection times of one horizon, all drawn at height `horizon`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub horizon: HorizonNumber,
    pub times: Vec<f64>,
}

impl ScatterSeries {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let y = self.horizon as f64;
        self.times.iter().map(move |&t| (t, y))
    }
}

/// Backend-independent description of the horizon-found figure.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonFoundPlot {
    /// One series per requested horizon that is available, in request order
    pub series: Vec<ScatterSeries>,
    /// Exactly the requested horizons, available or not
    pub y_ticks: Vec<HorizonNumber>,
    pub y_limits: (f64, f64),
    pub x_limits: (f64, f64),
    pub corner_text: Option<CornerText>,
}

impl HorizonFoundPlot {
    pub fn num_points(&self) -> usize {
        self.series.iter().map(|s| s.times.len()).sum()
    }
}

/// Collect the detection times of `requested` horizons from `source`.
///
/// Requested horizons that `source` does not have are skipped with a
/// warning; the y axis still shows a tick for them.
pub fn build_ah_found_plot<S: HorizonSource + ?Sized>(
    requested: &[HorizonNumber],
    source: &S,
) -> Result<HorizonFoundPlot> {
    let (Some(&min), Some(&max)) = (requested.iter().min(), requested.iter().max()) else {
        return Err(PlotError::NoHorizons);
    };

    let available = source.available_apparent_horizons();
    debug!("Apparent horizons available: {available:?}");

    let mut series = Vec::new();
    for &ah in requested {
        if !available.contains(&ah) {
            warn!("Apparent horizon {ah} not available, skipping it");
            continue;
        }
        debug!("Reading horizon {ah}");
        let found = source.time_found(ah)?;
        series.push(ScatterSeries {
            horizon: ah,
            times: found.t,
        });
    }

    Ok(HorizonFoundPlot {
        x_limits: time_limits(&series),
        series,
        y_ticks: requested.to_vec(),
        y_limits: (min as f64 - 1.0, max as f64 + 1.0),
        corner_text: None,
    })
}

/// Vertical axis whose only tick marks are the requested horizons.
///
/// Mapping and range come from the plain `f64` coordinate; key points are
/// fixed, and no light (minor) points are ever produced.
#[derive(Clone)]
pub struct HorizonAxis {
    coord: RangedCoordf64,
    ticks: Vec<f64>,
}

impl HorizonAxis {
    pub fn new(limits: (f64, f64), ticks: &[HorizonNumber]) -> Self {
        Self {
            coord: RangedCoordf64::from(limits.0..limits.1),
            ticks: ticks.iter().map(|&h| h as f64).collect(),
        }
    }
}

impl Ranged for HorizonAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.coord.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        let range = self.coord.range();
        self.ticks
            .iter()
            .copied()
            .filter(|t| range.start <= *t && *t <= range.end)
            .collect()
    }

    fn range(&self) -> Range<f64> {
        self.coord.range()
    }
}

fn time_limits(series: &[ScatterSeries]) -> (f64, f64) {
    let times = series.iter().flat_map(|s| s.times.iter().copied());
    let (lo, hi) = times.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
        (lo.min(t), hi.max(t))
    });

    if lo > hi {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    if span == 0.0 {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - TIME_MARGIN * span, hi + TIME_MARGIN * span)
}

impl Figure for HorizonFoundPlot {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &FigureStyle,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let family = style.font_family.as_str();
        let label_area = (style.font_size * 4.0).round() as u32;
        let (x_min, x_max) = self.x_limits;

        let mut chart = ChartBuilder::on(root)
            .margin(10)
            .x_label_area_size(label_area)
            .y_label_area_size(label_area)
            .build_cartesian_2d(
                x_min..x_max,
                HorizonAxis::new(self.y_limits, &self.y_ticks),
            )?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_label_formatter(&|x| format!("{x:.2}"))
            .y_label_formatter(&|y| format!("{y:.0}"))
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .axis_desc_style((family, style.font_size))
            .label_style((family, style.tick_font_size()))
            .draw()?;

        for (idx, series) in self.series.iter().enumerate() {
            let color = series_color(idx);
            chart.draw_series(
                series
                    .points()
                    .map(|point| Circle::new(point, MARKER_RADIUS, color.filled())),
            )?;
        }

        if let Some(corner) = &self.corner_text {
            add_text_to_corner(root, &corner.text, &corner.anchor.info(DEFAULT_OFFSET), style)?;
        }

        Ok(())
    }
}

/// Read the simulation, build the figure and save it.
///
/// Returns the path of the written figure.
pub fn plot_ah_found(request: &PlotRequest) -> Result<PathBuf> {
    let options = &request.options;
    // Fail before touching the simulation if the figure cannot be written.
    ImageFormat::from_extension(&options.fig_extension)?;

    let figname = request.figname();
    debug!("Figname: {figname}");

    let sim = SimDir::open(&options.datadir, options.ignore_symlinks)?;
    debug!(
        "Prepared SimDir at {} (ignore symlinks: {})",
        sim.path().display(),
        sim.ignore_symlinks()
    );
    let horizons = sim.horizons()?;

    let mut plot = build_ah_found_plot(&request.horizons, &horizons)?;
    plot.corner_text = request.corner_text.clone();

    debug!("Plotting");
    let path = output_path(&options.outdir, &figname, &options.fig_extension);
    debug!("Plotted {} points", plot.num_points());

    debug!("Saving");
    save_figure(&plot, &path, &options.style)?;
    debug!("DONE");

    Ok(path)
}
