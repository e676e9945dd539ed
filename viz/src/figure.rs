//! Rendering a figure to a file with the backend matching its extension.

use crate::anchor::AnchorInfo;
use crate::output::ImageFormat;
use crate::style::FigureStyle;
use crate::{Result, VizError};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

/// Something that can draw itself on any plotters backend.
pub trait Figure {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &FigureStyle,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>;
}

fn drawing_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> VizError {
    VizError::Drawing(err.to_string())
}

/// Draw `figure` and write it to `path`.
///
/// The parent directory is created if needed. The backend is chosen from
/// the extension of `path`, see [`ImageFormat`].
pub fn save_figure<F: Figure>(figure: &F, path: &Path, style: &FigureStyle) -> Result<()> {
    let format = ImageFormat::from_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let size = (style.width, style.height);
    debug!("Rendering {}x{} {:?} figure to {}", size.0, size.1, format, path.display());

    if format.is_bitmap() {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        figure.draw(&root, style).map_err(drawing_error)?;
        root.present().map_err(drawing_error)?;
    } else {
        let root = SVGBackend::new(path, size).into_drawing_area();
        figure.draw(&root, style).map_err(drawing_error)?;
        root.present().map_err(drawing_error)?;
    }

    Ok(())
}

/// Draw `text` at the figure position described by `anchor`.
pub fn add_text_to_corner<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    text: &str,
    anchor: &AnchorInfo,
    style: &FigureStyle,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let position = anchor.pixel_position(root.dim_in_pixel());
    let text_style = TextStyle::from((style.font_family.as_str(), style.font_size))
        .pos(anchor.text_pos());
    root.draw(&Text::new(text, position, text_style))
}
