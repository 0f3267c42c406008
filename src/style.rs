//! Series styling: the fixed color and marker palettes and per-series styles.
//!
//! Every keyword parses from the name shown to users (`"darkred"`, `"o"`,
//! `"triangle_up"`, ...), so the CLI, the GUI and library callers share one
//! vocabulary.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Plain 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The 20 named series colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Brown,
    Pink,
    Gray,
    Olive,
    Cyan,
    DarkRed,
    Navy,
    Lime,
    Magenta,
    Gold,
    Teal,
    Violet,
    Coral,
    DarkGreen,
    SkyBlue,
}

impl NamedColor {
    /// Palette order; default series colors cycle through it.
    pub const ALL: [NamedColor; 20] = [
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Purple,
        NamedColor::Orange,
        NamedColor::Brown,
        NamedColor::Pink,
        NamedColor::Gray,
        NamedColor::Olive,
        NamedColor::Cyan,
        NamedColor::DarkRed,
        NamedColor::Navy,
        NamedColor::Lime,
        NamedColor::Magenta,
        NamedColor::Gold,
        NamedColor::Teal,
        NamedColor::Violet,
        NamedColor::Coral,
        NamedColor::DarkGreen,
        NamedColor::SkyBlue,
    ];

    pub fn cycle(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Purple => "purple",
            NamedColor::Orange => "orange",
            NamedColor::Brown => "brown",
            NamedColor::Pink => "pink",
            NamedColor::Gray => "gray",
            NamedColor::Olive => "olive",
            NamedColor::Cyan => "cyan",
            NamedColor::DarkRed => "darkred",
            NamedColor::Navy => "navy",
            NamedColor::Lime => "lime",
            NamedColor::Magenta => "magenta",
            NamedColor::Gold => "gold",
            NamedColor::Teal => "teal",
            NamedColor::Violet => "violet",
            NamedColor::Coral => "coral",
            NamedColor::DarkGreen => "darkgreen",
            NamedColor::SkyBlue => "skyblue",
        }
    }

    /// CSS/X11 values for the named colors.
    pub fn rgb(&self) -> Rgb8 {
        match self {
            NamedColor::Red => Rgb8::new(255, 0, 0),
            NamedColor::Blue => Rgb8::new(0, 0, 255),
            NamedColor::Green => Rgb8::new(0, 128, 0),
            NamedColor::Purple => Rgb8::new(128, 0, 128),
            NamedColor::Orange => Rgb8::new(255, 165, 0),
            NamedColor::Brown => Rgb8::new(165, 42, 42),
            NamedColor::Pink => Rgb8::new(255, 192, 203),
            NamedColor::Gray => Rgb8::new(128, 128, 128),
            NamedColor::Olive => Rgb8::new(128, 128, 0),
            NamedColor::Cyan => Rgb8::new(0, 255, 255),
            NamedColor::DarkRed => Rgb8::new(139, 0, 0),
            NamedColor::Navy => Rgb8::new(0, 0, 128),
            NamedColor::Lime => Rgb8::new(0, 255, 0),
            NamedColor::Magenta => Rgb8::new(255, 0, 255),
            NamedColor::Gold => Rgb8::new(255, 215, 0),
            NamedColor::Teal => Rgb8::new(0, 128, 128),
            NamedColor::Violet => Rgb8::new(238, 130, 238),
            NamedColor::Coral => Rgb8::new(255, 127, 80),
            NamedColor::DarkGreen => Rgb8::new(0, 100, 0),
            NamedColor::SkyBlue => Rgb8::new(135, 206, 235),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_', '-'], "");
        // British spelling
        let wanted = if wanted == "grey" { "gray".to_string() } else { wanted };
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| Error::UnknownKeyword {
                kind: "color",
                value: s.to_string(),
            })
    }
}

/// The 20 marker symbols. Each has a one-character symbol and a descriptive name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Pentagon,
    Star,
    Hexagon,
    Plus,
    X,
    TriangleRight,
    TriangleLeft,
    TriDown,
    TriUp,
    TriLeft,
    TriRight,
    Octagon,
    PlusFilled,
    XFilled,
    ThinDiamond,
}

impl MarkerShape {
    /// Palette order; default series markers cycle through it.
    pub const ALL: [MarkerShape; 20] = [
        MarkerShape::Circle,
        MarkerShape::Square,
        MarkerShape::TriangleUp,
        MarkerShape::TriangleDown,
        MarkerShape::Diamond,
        MarkerShape::Pentagon,
        MarkerShape::Star,
        MarkerShape::Hexagon,
        MarkerShape::Plus,
        MarkerShape::X,
        MarkerShape::TriangleRight,
        MarkerShape::TriangleLeft,
        MarkerShape::TriDown,
        MarkerShape::TriUp,
        MarkerShape::TriLeft,
        MarkerShape::TriRight,
        MarkerShape::Octagon,
        MarkerShape::PlusFilled,
        MarkerShape::XFilled,
        MarkerShape::ThinDiamond,
    ];

    pub fn cycle(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "o",
            MarkerShape::Square => "s",
            MarkerShape::TriangleUp => "^",
            MarkerShape::TriangleDown => "v",
            MarkerShape::Diamond => "D",
            MarkerShape::Pentagon => "p",
            MarkerShape::Star => "*",
            MarkerShape::Hexagon => "h",
            MarkerShape::Plus => "+",
            MarkerShape::X => "x",
            MarkerShape::TriangleRight => ">",
            MarkerShape::TriangleLeft => "<",
            MarkerShape::TriDown => "1",
            MarkerShape::TriUp => "2",
            MarkerShape::TriLeft => "3",
            MarkerShape::TriRight => "4",
            MarkerShape::Octagon => "8",
            MarkerShape::PlusFilled => "P",
            MarkerShape::XFilled => "X",
            MarkerShape::ThinDiamond => "d",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Square => "square",
            MarkerShape::TriangleUp => "triangle_up",
            MarkerShape::TriangleDown => "triangle_down",
            MarkerShape::Diamond => "diamond",
            MarkerShape::Pentagon => "pentagon",
            MarkerShape::Star => "star",
            MarkerShape::Hexagon => "hexagon",
            MarkerShape::Plus => "plus",
            MarkerShape::X => "x",
            MarkerShape::TriangleRight => "triangle_right",
            MarkerShape::TriangleLeft => "triangle_left",
            MarkerShape::TriDown => "tri_down",
            MarkerShape::TriUp => "tri_up",
            MarkerShape::TriLeft => "tri_left",
            MarkerShape::TriRight => "tri_right",
            MarkerShape::Octagon => "octagon",
            MarkerShape::PlusFilled => "plus_filled",
            MarkerShape::XFilled => "x_filled",
            MarkerShape::ThinDiamond => "thin_diamond",
        }
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MarkerShape {
    type Err = Error;

    /// Symbols are matched exactly (`x` and `X` differ), names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_trim = s.trim();
        if let Some(m) = Self::ALL.iter().find(|m| m.symbol() == s_trim) {
            return Ok(*m);
        }
        let wanted = s_trim.to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| Error::UnknownKeyword {
                kind: "marker",
                value: s.to_string(),
            })
    }
}

/// User-facing style of one series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub color: NamedColor,
    pub marker: MarkerShape,
    /// `None` means "use the positional default name".
    pub name: Option<String>,
}

impl SeriesStyle {
    /// Palette defaults for series `idx` (0-based).
    pub fn default_for(idx: usize) -> Self {
        Self {
            color: NamedColor::cycle(idx),
            marker: MarkerShape::cycle(idx),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Default display name of series `idx` (0-based).
pub fn default_series_name(idx: usize) -> String {
    format!("Series {}", idx + 1)
}
