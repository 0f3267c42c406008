//! Legend box drawn inside the plotting area.
//!
//! Layout is computed first (pure, testable), then drawn on the root area in
//! pixel coordinates so the box can sit anywhere over the plot.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

use super::curve::LegendEntry;
use super::marker::draw_markers;
use super::text::{estimate_text_width_px, truncate_to_width};
use super::types::{LEGEND_TITLE, LegendPosition};
use super::util::rgb;
use crate::error::{Error, Result};

/// Pixel geometry of the legend box and its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    /// Top-left corner of the box.
    pub origin: (i32, i32),
    pub size: (i32, i32),
    pub pad: i32,
    pub row_h: i32,
    pub sample_w: i32,
    pub gap: i32,
    /// Labels after truncation, in entry order.
    pub labels: Vec<String>,
}

impl LegendLayout {
    /// Vertical center of entry row `i` (row 0 is below the title).
    pub fn row_center_y(&self, i: usize) -> i32 {
        self.origin.1 + self.pad + self.row_h * (i as i32 + 1) + self.row_h / 2
    }
}

/// Compute where the legend goes inside `plot` (x and y pixel ranges).
pub fn layout(
    plot: &(Range<i32>, Range<i32>),
    entries: &[LegendEntry],
    position: LegendPosition,
    font_px: u32,
) -> LegendLayout {
    let f = font_px as i32;
    let pad = (f / 2).max(2);
    let row_h = (f * 7 / 5).max(f + 2);
    let sample_w = f * 2;
    let gap = (f / 2).max(2);
    let inset = (f / 2).max(2);

    let plot_w = plot.0.end - plot.0.start;
    let plot_h = plot.1.end - plot.1.start;
    let max_text_px = ((plot_w as f64) * 0.45).max(40.0) as u32;

    let labels: Vec<String> = entries
        .iter()
        .map(|e| truncate_to_width(&e.label, font_px, max_text_px))
        .collect();
    let text_w = labels
        .iter()
        .map(|l| estimate_text_width_px(l, font_px))
        .chain(std::iter::once(estimate_text_width_px(LEGEND_TITLE, font_px)))
        .max()
        .unwrap_or(0) as i32;

    let w = pad * 2 + sample_w + gap + text_w;
    let h = pad * 2 + row_h * (entries.len() as i32 + 1);

    let (ax, ay) = position.anchor();
    let free_w = (plot_w - w - 2 * inset).max(0) as f64;
    let free_h = (plot_h - h - 2 * inset).max(0) as f64;
    let x = plot.0.start + inset + (free_w * ax).round() as i32;
    let y = plot.1.start + inset + (free_h * ay).round() as i32;

    LegendLayout {
        origin: (x, y),
        size: (w, h),
        pad,
        row_h,
        sample_w,
        gap,
        labels,
    }
}

/// Draw the legend: translucent box, `Data Series` title, one row per entry
/// with a line sample, the marker (if any) and the label.
#[allow(clippy::too_many_arguments)]
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot: &(Range<i32>, Range<i32>),
    entries: &[LegendEntry],
    position: LegendPosition,
    family: FontFamily<'static>,
    font_px: u32,
    line_w: u32,
    marker_px: i32,
) -> Result<()> {
    let lay = layout(plot, entries, position, font_px);
    let err = |e: DrawingAreaErrorKind<DB::ErrorType>| Error::Chart(format!("{:?}", e));

    let (x0, y0) = lay.origin;
    let (x1, y1) = (x0 + lay.size.0, y0 + lay.size.1);
    area.draw(&Rectangle::new([(x0, y0), (x1, y1)], WHITE.mix(0.8).filled()))
        .map_err(err)?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x1, y1)],
        RGBColor(204, 204, 204).stroke_width(1),
    ))
    .map_err(err)?;

    let text_style =
        TextStyle::from((family, font_px as f64)).pos(Pos::new(HPos::Left, VPos::Center));
    let title_style =
        TextStyle::from((family, font_px as f64)).pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        LEGEND_TITLE,
        ((x0 + x1) / 2, y0 + lay.pad + lay.row_h / 2),
        title_style,
    ))
    .map_err(err)?;

    let sample_x0 = x0 + lay.pad;
    let sample_x1 = sample_x0 + lay.sample_w;
    let text_x = sample_x1 + lay.gap;
    for (i, (entry, label)) in entries.iter().zip(&lay.labels).enumerate() {
        let cy = lay.row_center_y(i);
        let color = rgb(entry.color);
        area.draw(&PathElement::new(
            vec![(sample_x0, cy), (sample_x1, cy)],
            color.stroke_width(line_w),
        ))
        .map_err(err)?;
        if let Some(shape) = entry.marker {
            draw_markers(
                area,
                &[((sample_x0 + sample_x1) / 2, cy)],
                shape,
                marker_px,
                color,
            )
            .map_err(err)?;
        }
        area.draw(&Text::new(label.as_str(), (text_x, cy), text_style.clone()))
            .map_err(err)?;
    }
    Ok(())
}
