//! Figure naming and output paths.

use crate::{Result, VizError};
use std::path::{Path, PathBuf};

/// Return the user-supplied figure name, or `default` when none was given.
pub fn get_figname(figname: Option<&str>, default: &str) -> String {
    figname.unwrap_or(default).to_string()
}

/// Build `<outdir>/<figname>.<ext>`.
///
/// `ext` may be given with or without the leading dot.
pub fn output_path<P: AsRef<Path>>(outdir: P, figname: &str, ext: &str) -> PathBuf {
    let ext = ext.trim_start_matches('.');
    outdir.as_ref().join(format!("{figname}.{ext}"))
}

/// Image formats with a drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Svg,
}

impl ImageFormat {
    /// Match an extension, case-insensitively, with or without a leading dot.
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "svg" => Ok(Self::Svg),
            _ => Err(VizError::UnsupportedExtension(ext.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| VizError::UnsupportedExtension(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Whether the format is rasterised by the bitmap backend.
    pub fn is_bitmap(self) -> bool {
        !matches!(self, Self::Svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figname() {
        assert_eq!(get_figname(None, "bob"), "bob");
        assert_eq!(get_figname(Some("bob"), "lol"), "bob");
    }

    #[test]
    fn test_output_path_with_and_without_dot() {
        assert_eq!(output_path(".", "test", "pdf"), PathBuf::from("./test.pdf"));
        assert_eq!(output_path(".", "test", ".pdf"), output_path(".", "test", "pdf"));
        assert_eq!(
            output_path("plots/run1", "ah_1_2_found", "png"),
            PathBuf::from("plots/run1/ah_1_2_found.png")
        );
    }

    #[test]
    fn test_image_format_from_extension() {
        assert_eq!(ImageFormat::from_extension("png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension(".SVG").unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_extension("jpeg").unwrap(), ImageFormat::Jpeg);
        assert!(ImageFormat::Bmp.is_bitmap());
        assert!(!ImageFormat::Svg.is_bitmap());

        let err = ImageFormat::from_extension("pdf").unwrap_err();
        assert!(matches!(err, VizError::UnsupportedExtension(ref e) if e == "pdf"));
    }

    #[test]
    fn test_image_format_from_path() {
        assert_eq!(
            ImageFormat::from_path(Path::new("out/fig.png")).unwrap(),
            ImageFormat::Png
        );
        assert!(ImageFormat::from_path(Path::new("out/fig")).is_err());
    }
}
