//! Placement of annotation text in a corner or on an edge of the figure.
//!
//! Anchors are compass directions. The text is placed `offset` (as a
//! fraction of the figure size) away from the border it is anchored to,
//! and aligned so that it grows away from that border.

use crate::{Result, VizError};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::str::FromStr;

/// Default distance from the border, as a fraction of the figure.
pub const DEFAULT_OFFSET: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl FromStr for Anchor {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Self::N),
            "S" => Ok(Self::S),
            "E" => Ok(Self::E),
            "W" => Ok(Self::W),
            "NE" => Ok(Self::NE),
            "NW" => Ok(Self::NW),
            "SE" => Ok(Self::SE),
            "SW" => Ok(Self::SW),
            _ => Err(VizError::InvalidAnchor(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Right,
}

/// Where and how to draw anchored text.
///
/// `x` and `y` are fractions of the figure, with `y` measured upwards from
/// the bottom edge. `None` alignments mean centred on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorInfo {
    pub x: f64,
    pub y: f64,
    pub vertical: Option<VerticalAlign>,
    pub horizontal: Option<HorizontalAlign>,
}

impl Anchor {
    pub fn info(self, offset: f64) -> AnchorInfo {
        let (north, south) = (1.0 - offset, offset);
        let (east, west) = (1.0 - offset, offset);

        let (y, vertical) = match self {
            Self::N | Self::NE | Self::NW => (north, Some(VerticalAlign::Top)),
            Self::S | Self::SE | Self::SW => (south, Some(VerticalAlign::Bottom)),
            Self::E | Self::W => (0.5, None),
        };

        let (x, horizontal) = match self {
            Self::E | Self::NE | Self::SE => (east, Some(HorizontalAlign::Right)),
            Self::W | Self::NW | Self::SW => (west, Some(HorizontalAlign::Left)),
            Self::N | Self::S => (0.5, None),
        };

        AnchorInfo {
            x,
            y,
            vertical,
            horizontal,
        }
    }
}

/// Parse `anchor` and resolve its placement in one step.
pub fn process_anchor_info(anchor: &str, offset: f64) -> Result<AnchorInfo> {
    Ok(anchor.parse::<Anchor>()?.info(offset))
}

impl AnchorInfo {
    /// Pixel position inside a `(width, height)` drawing area, origin top-left.
    pub fn pixel_position(&self, (width, height): (u32, u32)) -> (i32, i32) {
        let x = (self.x * width as f64).round() as i32;
        let y = ((1.0 - self.y) * height as f64).round() as i32;
        (x, y)
    }

    /// Text anchor for plotters' text style.
    pub fn text_pos(&self) -> Pos {
        let h = match self.horizontal {
            Some(HorizontalAlign::Left) => HPos::Left,
            Some(HorizontalAlign::Right) => HPos::Right,
            None => HPos::Center,
        };
        let v = match self.vertical {
            Some(VerticalAlign::Top) => VPos::Top,
            Some(VerticalAlign::Bottom) => VPos::Bottom,
            None => VPos::Center,
        };
        Pos::new(h, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invalid_anchor() {
        assert!(matches!(
            process_anchor_info("BW", DEFAULT_OFFSET),
            Err(VizError::InvalidAnchor(_))
        ));
        assert!("ne".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_corner_anchor() {
        let info = process_anchor_info("SE", 0.02).unwrap();
        assert_relative_eq!(info.x, 0.98);
        assert_relative_eq!(info.y, 0.02);
        assert_eq!(info.vertical, Some(VerticalAlign::Bottom));
        assert_eq!(info.horizontal, Some(HorizontalAlign::Right));
    }

    #[test]
    fn test_edge_anchors() {
        let north = process_anchor_info("N", 0.02).unwrap();
        assert_relative_eq!(north.x, 0.5);
        assert_relative_eq!(north.y, 0.98);
        assert_eq!(north.vertical, Some(VerticalAlign::Top));
        assert_eq!(north.horizontal, None);

        let west = process_anchor_info("W", 0.02).unwrap();
        assert_relative_eq!(west.x, 0.02);
        assert_relative_eq!(west.y, 0.5);
        assert_eq!(west.vertical, None);
        assert_eq!(west.horizontal, Some(HorizontalAlign::Left));
    }

    #[test]
    fn test_pixel_position() {
        let info = Anchor::NW.info(0.1);
        assert_eq!(info.pixel_position((1000, 500)), (100, 50));
        let info = Anchor::S.info(0.0);
        assert_eq!(info.pixel_position((1000, 500)), (500, 500));
    }
}
