//! Test helpers for the horizon plotting workspace.
//!
//! Provides the shared test output directory and writers for synthetic
//! simulation directories.

use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Error type for test helper operations
#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    #[error("Failed to find project root: {0}")]
    ProjectRootNotFound(String),
}

/// Returns the path to the workspace root directory.
///
/// Starts from the current directory and moves up until a `Cargo.toml`
/// declaring `[workspace]` is found.
pub fn find_project_root() -> Result<PathBuf, TestHelperError> {
    let mut current_dir = env::current_dir().map_err(|e| {
        TestHelperError::ProjectRootNotFound(format!("Failed to get current directory: {e}"))
    })?;

    loop {
        let cargo_toml = current_dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = fs::read_to_string(&cargo_toml).map_err(|e| {
                TestHelperError::ProjectRootNotFound(format!("Failed to read Cargo.toml: {e}"))
            })?;

            if content.contains("[workspace]") {
                return Ok(current_dir);
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Err(TestHelperError::ProjectRootNotFound(
        "Workspace root not found".to_string(),
    ))
}

static PROJECT_ROOT: Lazy<PathBuf> =
    Lazy::new(|| find_project_root().expect("Failed to find project root directory"));

/// Directory for test artifacts such as rendered figures, created on demand.
pub fn get_output_dir() -> PathBuf {
    let output_dir = PROJECT_ROOT.join("test_output");

    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    }

    output_dir
}

/// Path of `path` inside [`get_output_dir`].
pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    get_output_dir().join(path)
}

const FIXTURE_COLUMNS: [&str; 6] = [
    "cctk_iteration",
    "cctk_time",
    "centroid_x",
    "centroid_y",
    "centroid_z",
    "min_radius",
];

/// Write an AHFinderDirect diagnostics file for horizon `horizon` into `dir`.
///
/// Each `(iteration, time)` pair becomes one detection row. The shape columns
/// are filled with constants, so the file has the layout of the first few
/// standard columns.
///
/// # Returns
/// The path of the written `BH_diagnostics.ah<horizon>.gp` file.
pub fn write_bh_diagnostics(
    dir: &Path,
    horizon: i64,
    detections: &[(i64, f64)],
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("BH_diagnostics.ah{horizon}.gp"));
    let mut file = fs::File::create(&path)?;

    writeln!(file, "# apparent horizon {horizon}")?;
    writeln!(file, "#")?;
    for (idx, name) in FIXTURE_COLUMNS.iter().enumerate() {
        writeln!(file, "# column {} = {name}", idx + 1)?;
    }

    for (iteration, time) in detections {
        writeln!(
            file,
            "{iteration}\t{time:.10}\t{:.6}\t0.000000\t0.000000\t0.500000",
            horizon as f64
        )?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_root_exists() {
        let root = find_project_root().expect("Failed to find project root");
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn test_output_path() {
        let path = output_path("test.png");
        assert_eq!(path, get_output_dir().join("test.png"));
        assert!(get_output_dir().is_dir());
    }

    #[test]
    fn test_write_bh_diagnostics() {
        let dir = env::temp_dir().join(format!("bh_diag_{}", std::process::id()));
        let path = write_bh_diagnostics(&dir, 2, &[(0, 0.0), (16, 0.25)]).unwrap();
        assert!(path.ends_with("BH_diagnostics.ah2.gp"));

        let text = fs::read_to_string(&path).unwrap();
        let data_lines: Vec<_> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data_lines.len(), 2);
        assert!(data_lines[1].starts_with("16\t0.25"));

        fs::remove_dir_all(dir).unwrap();
    }
}
