//! Immutable chart and batch configuration.
//!
//! Front-ends build a [`ChartConfig`] from their own widgets or flags and hand
//! it to the renderer; nothing reads styling from shared mutable state.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::fonts::FontChoice;
use crate::style::{SeriesStyle, default_series_name};
use crate::viz::{LegendPosition, PRINT_RESOLUTION, Resolution};

pub const MIN_SERIES: usize = 1;
pub const MAX_SERIES: usize = 10;

pub const DEFAULT_INPUT_DIR: &str = "./excel";
pub const DEFAULT_OUTPUT_DIR: &str = "./graph";
pub const DEFAULT_SHEET: &str = "Sheet1";
pub const DEFAULT_X_LABEL: &str = "ε";
pub const DEFAULT_Y_LABEL: &str = "σ";

/// Everything that shapes how a chart looks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    /// Maximum number of series drawn per chart (1..=10).
    pub num_series: usize,
    /// Configured styles; indices past the end cycle through this list.
    pub series: Vec<SeriesStyle>,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub show_markers: bool,
    pub legend_position: LegendPosition,
    pub font: FontChoice,
    pub resolution: Resolution,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            num_series: 1,
            series: (0..MAX_SERIES).map(SeriesStyle::default_for).collect(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            show_legend: true,
            show_markers: true,
            legend_position: LegendPosition::default(),
            font: FontChoice::default(),
            resolution: PRINT_RESOLUTION,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SERIES..=MAX_SERIES).contains(&self.num_series) {
            return Err(Error::Config(format!(
                "number of series must be between {MIN_SERIES} and {MAX_SERIES}, got {}",
                self.num_series
            )));
        }
        if self.series.is_empty() {
            return Err(Error::Config(
                "series colors and markers are not configured".into(),
            ));
        }
        let (w, h) = self.resolution.pixels();
        if w == 0 || h == 0 || !self.resolution.dpi.is_finite() || self.resolution.dpi <= 0.0 {
            return Err(Error::Config(format!("invalid output size {w}x{h}")));
        }
        Ok(())
    }

    /// Effective style of series `idx`: color and marker cycle through the
    /// configured list, the name falls back to "Series N" past its end.
    pub fn series_style(&self, idx: usize) -> SeriesStyle {
        let mut style = match self.series.len() {
            0 => SeriesStyle::default_for(idx),
            n => self.series[idx % n].clone(),
        };
        style.name = self
            .series
            .get(idx)
            .and_then(|s| s.name.clone())
            .or_else(|| Some(default_series_name(idx)));
        style
    }

    /// Resize the style list to `n` entries, keeping existing ones and
    /// filling new slots with palette defaults.
    pub fn resize_series(&mut self, n: usize) {
        let len = self.series.len();
        if n > len {
            self.series.extend((len..n).map(SeriesStyle::default_for));
        }
    }
}

/// Folder-level settings for a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sheet_name: String,
    /// Extra directories searched for font files before the system ones.
    pub font_dirs: Vec<PathBuf>,
    pub chart: ChartConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sheet_name: DEFAULT_SHEET.to_string(),
            font_dirs: Vec::new(),
            chart: ChartConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Configuration errors that must stop a batch before any file is read.
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() || self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config(
                "please select both input and output folders".into(),
            ));
        }
        if !self.input_dir.is_dir() {
            return Err(Error::Config(format!(
                "input folder {} does not exist",
                self.input_dir.display()
            )));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(Error::Config("worksheet name is empty".into()));
        }
        self.chart.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{MarkerShape, NamedColor};

    #[test]
    fn default_config_is_valid() {
        assert!(ChartConfig::default().validate().is_ok());
    }

    #[test]
    fn series_bounds_are_enforced() {
        let mut c = ChartConfig::default();
        c.num_series = 0;
        assert!(c.validate().unwrap_err().is_config());
        c.num_series = 11;
        assert!(c.validate().is_err());
        c.num_series = 10;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_style_list_is_a_config_error() {
        let c = ChartConfig {
            series: Vec::new(),
            ..ChartConfig::default()
        };
        assert!(matches!(c.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn styles_cycle_and_names_default() {
        let c = ChartConfig {
            series: vec![
                SeriesStyle {
                    color: NamedColor::Navy,
                    marker: MarkerShape::Star,
                    name: Some("steel".into()),
                },
                SeriesStyle {
                    color: NamedColor::Gold,
                    marker: MarkerShape::Square,
                    name: None,
                },
            ],
            ..ChartConfig::default()
        };
        assert_eq!(c.series_style(0).name.as_deref(), Some("steel"));
        assert_eq!(c.series_style(1).name.as_deref(), Some("Series 2"));
        let third = c.series_style(2);
        assert_eq!(third.color, NamedColor::Navy);
        assert_eq!(third.marker, MarkerShape::Star);
        assert_eq!(third.name.as_deref(), Some("Series 3"));
    }

    #[test]
    fn resize_keeps_existing_styles() {
        let mut c = ChartConfig {
            series: vec![SeriesStyle::default_for(5)],
            ..ChartConfig::default()
        };
        c.resize_series(3);
        assert_eq!(c.series.len(), 3);
        assert_eq!(c.series[0], SeriesStyle::default_for(5));
        assert_eq!(c.series[2], SeriesStyle::default_for(2));
    }

    #[test]
    fn missing_folders_block_the_batch() {
        let b = BatchConfig {
            input_dir: PathBuf::new(),
            ..BatchConfig::default()
        };
        assert!(b.validate().unwrap_err().is_config());
    }
}
