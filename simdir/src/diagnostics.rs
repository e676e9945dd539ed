//! Reader for AHFinderDirect `BH_diagnostics.ah<N>.gp` files.
//!
//! Each data line holds one horizon detection: column 1 is the iteration,
//! column 2 the coordinate time, and the remaining columns describe the
//! horizon shape. Header comments of the form `# column 3 = centroid_x` name
//! the columns; unnamed columns fall back to [`STANDARD_COLUMNS`].

use crate::timeseries::TimeSeries;
use crate::{Result, SimDirError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Column layout written by AHFinderDirect.
pub const STANDARD_COLUMNS: [&str; 36] = [
    "cctk_iteration",
    "cctk_time",
    "centroid_x",
    "centroid_y",
    "centroid_z",
    "min_radius",
    "max_radius",
    "mean_radius",
    "quadrupole_xx",
    "quadrupole_xy",
    "quadrupole_xz",
    "quadrupole_yy",
    "quadrupole_yz",
    "quadrupole_zz",
    "min_x",
    "max_x",
    "min_y",
    "max_y",
    "min_z",
    "max_z",
    "xy_plane_circumference",
    "xz_plane_circumference",
    "yz_plane_circumference",
    "ratio_xz_xy_plane_circumferences",
    "ratio_yz_xy_plane_circumferences",
    "area",
    "m_irreducible",
    "areal_radius",
    "expansion",
    "inner_expansion",
    "product_expansion",
    "mean_curvature",
    "gradient_expansion",
    "gradient_inner_expansion",
    "gradient_product_expansion",
    "gradient_mean_curvature",
];

const ITERATION_COLUMN: usize = 0;
const TIME_COLUMN: usize = 1;

/// Parsed contents of one diagnostics file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticsFile {
    /// Column names taken from the header, indexed from zero.
    pub header_columns: BTreeMap<usize, String>,
    pub rows: Vec<Vec<f64>>,
}

impl DiagnosticsFile {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimDirError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse file contents; `path` is only used for error reporting.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut parsed = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                if let Some((column, name)) = parse_column_header(comment) {
                    parsed.header_columns.insert(column, name);
                }
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|field| field.parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| SimDirError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: e.to_string(),
                })?;

            let malformed = |reason: String| SimDirError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                reason,
            };
            if row.len() <= TIME_COLUMN {
                return Err(malformed(format!(
                    "expected at least 2 columns, found {}",
                    row.len()
                )));
            }
            let (iteration, time) = (row[ITERATION_COLUMN], row[TIME_COLUMN]);
            if !iteration.is_finite() || iteration.fract() != 0.0 {
                return Err(malformed(format!(
                    "iteration must be an integer, found {iteration}"
                )));
            }
            if !time.is_finite() {
                return Err(malformed(format!("time must be finite, found {time}")));
            }

            parsed.rows.push(row);
        }

        Ok(parsed)
    }
}

/// Parse `" column 12 = quadrupole_xy"` into `(11, "quadrupole_xy")`.
fn parse_column_header(comment: &str) -> Option<(usize, String)> {
    let rest = comment.trim().strip_prefix("column")?;
    let (number, name) = rest.split_once('=')?;
    let column: usize = number.trim().parse().ok()?;
    let name = name.trim();
    if column == 0 || name.is_empty() {
        return None;
    }
    Some((column - 1, name.to_string()))
}

/// Diagnostics of one horizon merged over all restarts.
///
/// Rows are keyed by iteration, so a restart that repeats iterations
/// replaces the earlier rows instead of duplicating them.
#[derive(Debug, Clone, Default)]
pub struct HorizonDiagnostics {
    columns: Vec<String>,
    rows: BTreeMap<i64, Vec<f64>>,
}

impl HorizonDiagnostics {
    /// Read and merge `files`, which must be ordered from oldest to newest restart.
    pub fn read_all(files: &[PathBuf]) -> Result<Self> {
        let mut merged = Self::default();
        for path in files {
            merged.merge(DiagnosticsFile::read(path)?);
        }
        Ok(merged)
    }

    pub fn merge(&mut self, file: DiagnosticsFile) {
        for (column, name) in file.header_columns {
            if self.columns.len() <= column {
                self.extend_columns(column + 1);
            }
            self.columns[column] = name;
        }

        for row in file.rows {
            if self.columns.len() < row.len() {
                self.extend_columns(row.len());
            }
            let iteration = row[ITERATION_COLUMN] as i64;
            self.rows.insert(iteration, row);
        }
    }

    fn extend_columns(&mut self, len: usize) {
        while self.columns.len() < len {
            let idx = self.columns.len();
            let name = STANDARD_COLUMNS
                .get(idx)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("column_{}", idx + 1));
            self.columns.push(name);
        }
    }

    /// Names of all known columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iteration as a function of time: one sample per detection.
    pub fn iterations(&self) -> TimeSeries {
        self.column_series(ITERATION_COLUMN)
    }

    /// Named column as a function of time, if the column exists.
    pub fn variable(&self, name: &str) -> Option<TimeSeries> {
        let column = self.columns.iter().position(|c| c == name)?;
        Some(self.column_series(column))
    }

    fn column_series(&self, column: usize) -> TimeSeries {
        // Rows shorter than the widest row do not contribute to missing columns.
        let (t, y) = self
            .rows
            .values()
            .filter_map(|row| Some((row[TIME_COLUMN], *row.get(column)?)))
            .unzip();
        TimeSeries::new(t, y)
    }
}
