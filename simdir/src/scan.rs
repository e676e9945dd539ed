//! Recursive indexing of a simulation output directory.
//!
//! Simulation runs scatter their output across per-restart subdirectories
//! (`output-0000/`, `output-0001/`, ...). The scan collects every regular file
//! below the root so that readers can select the files they understand by
//! name without touching the filesystem again.

use crate::horizons::Horizons;
use crate::{Result, SimDirError};
use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};

/// Directories deeper than this below the root are not scanned.
pub const MAX_DEPTH: usize = 8;

/// Directory names that never contain simulation data.
pub const EXCLUDED_DIRS: [&str; 5] = ["SIMFACTORY", "report", "movies", "tmp", "temp"];

/// Index of all files found in one simulation directory.
#[derive(Debug, Clone)]
pub struct SimDir {
    path: PathBuf,
    ignore_symlinks: bool,
    all_files: Vec<PathBuf>,
}

impl SimDir {
    /// Scan `path` and record every regular file below it.
    ///
    /// With `ignore_symlinks`, symbolic links to files or directories are
    /// skipped. Otherwise they are followed, still bounded by [`MAX_DEPTH`].
    pub fn open<P: AsRef<Path>>(path: P, ignore_symlinks: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(SimDirError::DirectoryNotFound(path));
        }

        let mut all_files = Vec::new();
        scan_dir(&path, 0, ignore_symlinks, &mut all_files)?;
        all_files.sort();

        debug!(
            "Indexed {} files in {}",
            all_files.len(),
            path.display()
        );

        Ok(Self {
            path,
            ignore_symlinks,
            all_files,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ignore_symlinks(&self) -> bool {
        self.ignore_symlinks
    }

    /// All files found, sorted by path.
    pub fn all_files(&self) -> &[PathBuf] {
        &self.all_files
    }

    /// Apparent horizons reported by AHFinderDirect in this run.
    pub fn horizons(&self) -> Result<Horizons> {
        Ok(Horizons::from_files(&self.all_files))
    }
}

fn scan_dir(
    dir: &Path,
    depth: usize,
    ignore_symlinks: bool,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    let io_err = |source| SimDirError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(io_err)?;

        if file_type.is_symlink() {
            if ignore_symlinks {
                trace!("Ignoring symlink {}", path.display());
                continue;
            }
            // Dangling links are not data.
            let Ok(target) = fs::metadata(&path) else {
                continue;
            };
            visit(path, target.is_dir(), depth, ignore_symlinks, files)?;
        } else {
            visit(path, file_type.is_dir(), depth, ignore_symlinks, files)?;
        }
    }

    Ok(())
}

fn visit(
    path: PathBuf,
    is_dir: bool,
    depth: usize,
    ignore_symlinks: bool,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    if !is_dir {
        files.push(path);
        return Ok(());
    }

    let excluded = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| EXCLUDED_DIRS.contains(&name));

    if excluded || depth + 1 > MAX_DEPTH {
        trace!("Not descending into {}", path.display());
        return Ok(());
    }

    scan_dir(&path, depth + 1, ignore_symlinks, files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_missing_directory() {
        let err = SimDir::open("/definitely/not/a/simulation", false).unwrap_err();
        assert!(matches!(err, SimDirError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        touch(&file);
        assert!(matches!(
            SimDir::open(&file, false),
            Err(SimDirError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_scan_collects_nested_files_and_skips_excluded() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("output-0000/run/BH_diagnostics.ah1.gp"));
        touch(&dir.path().join("output-0001/run/BH_diagnostics.ah1.gp"));
        touch(&dir.path().join("SIMFACTORY/BH_diagnostics.ah9.gp"));
        touch(&dir.path().join("output-0000/tmp/BH_diagnostics.ah8.gp"));

        let sim = SimDir::open(dir.path(), false).unwrap();
        assert_eq!(sim.all_files().len(), 2);
        assert!(sim
            .all_files()
            .iter()
            .all(|p| p.ends_with("run/BH_diagnostics.ah1.gp")));
    }

    #[test]
    fn test_depth_limit() {
        let dir = TempDir::new().unwrap();
        let mut deep = dir.path().to_path_buf();
        for level in 0..=MAX_DEPTH {
            deep.push(format!("level{level}"));
        }
        touch(&deep.join("too_deep.gp"));
        touch(&dir.path().join("level0/shallow.gp"));

        let sim = SimDir::open(dir.path(), false).unwrap();
        let names: Vec<_> = sim
            .all_files()
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["shallow.gp".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_followed_or_ignored() {
        let data = TempDir::new().unwrap();
        touch(&data.path().join("BH_diagnostics.ah2.gp"));

        let sim_root = TempDir::new().unwrap();
        touch(&sim_root.path().join("output-0000/BH_diagnostics.ah1.gp"));
        std::os::unix::fs::symlink(data.path(), sim_root.path().join("linked")).unwrap();

        let followed = SimDir::open(sim_root.path(), false).unwrap();
        assert_eq!(followed.all_files().len(), 2);

        let ignored = SimDir::open(sim_root.path(), true).unwrap();
        assert_eq!(ignored.all_files().len(), 1);
        assert!(ignored.ignore_symlinks());
    }
}
