//! Figure style defaults.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Matplotlib "tab10" colour cycle, used for successive series.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Colour of the `index`-th series, cycling through [`TAB10`].
pub fn series_color(index: usize) -> RGBColor {
    TAB10[index % TAB10.len()]
}

/// Size and typography of a figure.
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureStyle {
    /// Width in pixels
    #[serde(default = "FigureStyle::default_width")]
    pub width: u32,
    /// Height in pixels
    #[serde(default = "FigureStyle::default_height")]
    pub height: u32,
    /// Base font size for axis labels and annotations
    #[serde(default = "FigureStyle::default_font_size")]
    pub font_size: f64,
    #[serde(default = "FigureStyle::default_font_family")]
    pub font_family: String,
}

impl FigureStyle {
    fn default_width() -> u32 {
        1024
    }
    fn default_height() -> u32 {
        768
    }
    fn default_font_size() -> f64 {
        16.0
    }
    fn default_font_family() -> String {
        "sans-serif".to_string()
    }

    /// Font size for tick labels, slightly smaller than the base size.
    pub fn tick_font_size(&self) -> f64 {
        (self.font_size * 0.8).max(1.0)
    }
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            font_size: Self::default_font_size(),
            font_family: Self::default_font_family(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_style() {
        let style = FigureStyle::default();
        assert_eq!((style.width, style.height), (1024, 768));
        assert_relative_eq!(style.font_size, 16.0);
        assert_eq!(style.font_family, "sans-serif");
    }

    #[test]
    fn test_partial_style_from_json() {
        let style: FigureStyle = serde_json::from_str(r#"{"font_size": 18}"#).unwrap();
        assert_relative_eq!(style.font_size, 18.0);
        assert_eq!(style.width, 1024);
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), TAB10[0]);
        assert_eq!(series_color(10), TAB10[0]);
        assert_eq!(series_color(13), TAB10[3]);
    }
}
