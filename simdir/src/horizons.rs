//! Apparent horizons found by AHFinderDirect.

use crate::diagnostics::HorizonDiagnostics;
use crate::timeseries::TimeSeries;
use crate::{Result, SimDirError};
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Index of an apparent horizon, the `N` in `BH_diagnostics.ah<N>.gp`.
pub type HorizonNumber = i64;

const DIAGNOSTICS_PREFIX: &str = "BH_diagnostics.ah";
const DIAGNOSTICS_SUFFIX: &str = ".gp";

/// What a horizon plot needs from a simulation.
///
/// [`Horizons`] reads real output; tests substitute in-memory sources.
pub trait HorizonSource {
    /// Horizons with at least one diagnostics file, ascending.
    fn available_apparent_horizons(&self) -> Vec<HorizonNumber>;

    /// Times at which `horizon` was found, with the iteration as value.
    fn time_found(&self, horizon: HorizonNumber) -> Result<TimeSeries>;
}

/// Diagnostics files of every apparent horizon in a simulation.
#[derive(Debug, Clone, Default)]
pub struct Horizons {
    files: BTreeMap<HorizonNumber, Vec<PathBuf>>,
}

impl Horizons {
    /// Select the diagnostics files among `all_files` and group them by horizon.
    ///
    /// `all_files` is expected sorted, so each horizon's files come out in
    /// restart order.
    pub fn from_files(all_files: &[PathBuf]) -> Self {
        let mut files: BTreeMap<HorizonNumber, Vec<PathBuf>> = BTreeMap::new();
        for path in all_files {
            if let Some(number) = diagnostics_horizon_number(path) {
                files.entry(number).or_default().push(path.clone());
            }
        }
        Self { files }
    }

    pub fn available_apparent_horizons(&self) -> Vec<HorizonNumber> {
        self.files.keys().copied().collect()
    }

    /// Diagnostics files for `horizon`, oldest restart first.
    pub fn files(&self, horizon: HorizonNumber) -> Option<&[PathBuf]> {
        self.files.get(&horizon).map(Vec::as_slice)
    }

    /// Read and merge all diagnostics of `horizon`.
    pub fn get_apparent_horizon(&self, horizon: HorizonNumber) -> Result<ApparentHorizon> {
        let files = self
            .files(horizon)
            .ok_or(SimDirError::HorizonNotAvailable(horizon))?;

        debug!("Reading {} diagnostics files for AH {horizon}", files.len());
        let diagnostics = HorizonDiagnostics::read_all(files)?;

        Ok(ApparentHorizon {
            number: horizon,
            diagnostics,
        })
    }
}

impl HorizonSource for Horizons {
    fn available_apparent_horizons(&self) -> Vec<HorizonNumber> {
        Horizons::available_apparent_horizons(self)
    }

    fn time_found(&self, horizon: HorizonNumber) -> Result<TimeSeries> {
        Ok(self.get_apparent_horizon(horizon)?.time_found())
    }
}

/// One apparent horizon with its diagnostics loaded.
#[derive(Debug, Clone)]
pub struct ApparentHorizon {
    number: HorizonNumber,
    diagnostics: HorizonDiagnostics,
}

impl ApparentHorizon {
    pub fn number(&self) -> HorizonNumber {
        self.number
    }

    /// Detection record: iteration versus time, one sample per detection.
    pub fn time_found(&self) -> TimeSeries {
        self.diagnostics.iterations()
    }

    /// Any diagnostics column as a function of time.
    pub fn ah(&self, variable: &str) -> Option<TimeSeries> {
        self.diagnostics.variable(variable)
    }
}

/// Horizon number encoded in a `BH_diagnostics.ah<N>.gp` file name.
fn diagnostics_horizon_number(path: &Path) -> Option<HorizonNumber> {
    let name = path.file_name()?.to_str()?;
    let digits = name
        .strip_prefix(DIAGNOSTICS_PREFIX)?
        .strip_suffix(DIAGNOSTICS_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
