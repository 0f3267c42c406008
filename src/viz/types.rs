//! Public types and constants for the visualization module.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Legend placement inside the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    UpperRight,
    #[default]
    UpperLeft,
    LowerLeft,
    LowerRight,
    /// Same placement as `CenterRight`; kept as its own keyword.
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendPosition {
    pub const ALL: [LegendPosition; 10] = [
        LegendPosition::UpperRight,
        LegendPosition::UpperLeft,
        LegendPosition::LowerLeft,
        LegendPosition::LowerRight,
        LegendPosition::Right,
        LegendPosition::CenterLeft,
        LegendPosition::CenterRight,
        LegendPosition::LowerCenter,
        LegendPosition::UpperCenter,
        LegendPosition::Center,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            LegendPosition::UpperRight => "upper right",
            LegendPosition::UpperLeft => "upper left",
            LegendPosition::LowerLeft => "lower left",
            LegendPosition::LowerRight => "lower right",
            LegendPosition::Right => "right",
            LegendPosition::CenterLeft => "center left",
            LegendPosition::CenterRight => "center right",
            LegendPosition::LowerCenter => "lower center",
            LegendPosition::UpperCenter => "upper center",
            LegendPosition::Center => "center",
        }
    }

    /// Horizontal and vertical anchors as fractions of the free space (0 = left/top).
    pub fn anchor(&self) -> (f64, f64) {
        match self {
            LegendPosition::UpperRight => (1.0, 0.0),
            LegendPosition::UpperLeft => (0.0, 0.0),
            LegendPosition::LowerLeft => (0.0, 1.0),
            LegendPosition::LowerRight => (1.0, 1.0),
            LegendPosition::Right | LegendPosition::CenterRight => (1.0, 0.5),
            LegendPosition::CenterLeft => (0.0, 0.5),
            LegendPosition::LowerCenter => (0.5, 1.0),
            LegendPosition::UpperCenter => (0.5, 0.0),
            LegendPosition::Center => (0.5, 0.5),
        }
    }
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for LegendPosition {
    type Err = Error;

    /// Accepts `"upper left"`, `"upper-left"`, `"upper_left"` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.keyword() == wanted)
            .ok_or_else(|| Error::UnknownKeyword {
                kind: "legend position",
                value: s.to_string(),
            })
    }
}

/// Output geometry: physical size in inches and dots per inch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
}

impl Resolution {
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }

    /// Same physical layout for an arbitrary pixel box (used by the preview).
    pub fn fit_pixels(width: u32, height: u32, dpi: f64) -> Self {
        Self {
            width_in: width as f64 / dpi,
            height_in: height as f64 / dpi,
            dpi,
        }
    }

    /// Pixel size of a length given in typographic points.
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

/// Print resolution for batch output: 12 x 8 inches at 300 DPI.
pub const PRINT_RESOLUTION: Resolution = Resolution {
    width_in: 12.0,
    height_in: 8.0,
    dpi: 300.0,
};

/// Samples evaluated along a smoothed curve.
pub const SMOOTH_SAMPLES: usize = 1000;

/// Upper bound on markers drawn per series (before rounding).
pub const MAX_MARKERS: usize = 50;

/// Distinct x values needed before smoothing is attempted (strictly more than this).
pub const SMOOTH_MIN_DISTINCT: usize = 3;

/// Legend title drawn above the entries.
pub const LEGEND_TITLE: &str = "Data Series";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_resolution_pixels() {
        assert_eq!(PRINT_RESOLUTION.pixels(), (3600, 2400));
        assert!((PRINT_RESOLUTION.pt(72.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn legend_keywords_roundtrip() {
        for p in LegendPosition::ALL {
            assert_eq!(p.keyword().parse::<LegendPosition>().unwrap(), p);
        }
        assert_eq!(
            "Lower-Center".parse::<LegendPosition>().unwrap(),
            LegendPosition::LowerCenter
        );
        assert!("top".parse::<LegendPosition>().is_err());
    }
}
