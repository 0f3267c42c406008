//! Visualization: turn a [`Dataset`] into a chart image.
//!
//! - Series pairing and curve building (see [`curve`])
//! - PNG output at print resolution, or an in-memory RGB buffer for previews
//! - White background, dashed light-gray grid, left/bottom axes only
//! - Optional legend box at one of ten positions inside the plot

pub mod curve;
pub mod legend;
pub mod marker;
pub mod spline;
pub mod text;
pub mod types;
pub mod util;

pub use curve::{LegendEntry, LineKind, RenderedCurve, render_curve};
pub use types::{
    LEGEND_TITLE, LegendPosition, MAX_MARKERS, PRINT_RESOLUTION, Resolution, SMOOTH_MIN_DISTINCT,
    SMOOTH_SAMPLES,
};

use log::debug;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::coord::ranged1d::Ranged;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use serde::Serialize;
use std::path::Path;

use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::fonts;
use crate::models::Dataset;
use crate::series::{extract_pairs, series_values};

/// Tick count requested on both axes; the grid follows the same positions.
const TICKS: usize = 10;

/// What was drawn for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub x: String,
    pub y: String,
    pub label: String,
    /// Data rows plotted (after dropping empty cells).
    pub points: usize,
    pub line: LineKind,
}

/// An RGB8 image held in memory, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Pair columns and build one curve per pair, in pairing order.
pub fn build_curves(
    dataset: &Dataset,
    config: &ChartConfig,
) -> Result<(Vec<RenderedCurve>, Vec<SeriesSummary>)> {
    let pairs = extract_pairs(dataset, config.num_series);
    let mut curves = Vec::with_capacity(pairs.len());
    let mut summary = Vec::with_capacity(pairs.len());
    for (i, pair) in pairs.iter().enumerate() {
        let (xs, ys) = series_values(dataset, pair)?;
        let style = config.series_style(i);
        let curve = render_curve(&xs, &ys, &style, i, config.show_markers)?;
        summary.push(SeriesSummary {
            x: pair.x.clone(),
            y: pair.y.clone(),
            label: curve.legend.label.clone(),
            points: xs.len(),
            line: curve.line_kind,
        });
        curves.push(curve);
    }
    debug!("built {} curve(s)", curves.len());
    Ok((curves, summary))
}

/// Render `dataset` to a PNG at `config.resolution`.
///
/// Nothing is written when pairing, value extraction or font setup fails.
pub fn render_png<P: AsRef<Path>>(
    dataset: &Dataset,
    config: &ChartConfig,
    title: &str,
    out_path: P,
) -> Result<Vec<SeriesSummary>> {
    config.validate()?;
    let family = fonts::ensure_registered(config.font, &[])?;
    let (curves, summary) = build_curves(dataset, config)?;

    let out_path = out_path.as_ref();
    let root = BitMapBackend::new(out_path, config.resolution.pixels()).into_drawing_area();
    draw_chart(&root, &curves, config, title, family)?;
    root.present().map_err(|e| Error::Chart(format!("{:?}", e)))?;
    Ok(summary)
}

/// Render `dataset` into an RGB buffer sized by `config.resolution`.
pub fn render_rgb(dataset: &Dataset, config: &ChartConfig, title: &str) -> Result<RgbBuffer> {
    config.validate()?;
    let family = fonts::ensure_registered(config.font, &[])?;
    let (curves, _) = build_curves(dataset, config)?;

    let (width, height) = config.resolution.pixels();
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        draw_chart(&root, &curves, config, title, family)?;
        root.present().map_err(|e| Error::Chart(format!("{:?}", e)))?;
    }
    Ok(RgbBuffer {
        width,
        height,
        pixels,
    })
}

fn chart_err<E: std::fmt::Debug>(e: E) -> Error {
    Error::Chart(format!("{:?}", e))
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    curves: &[RenderedCurve],
    config: &ChartConfig,
    title: &str,
    family: FontFamily<'static>,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let res = &config.resolution;
    let px = |points: f64| res.pt(points).round().max(1.0) as u32;
    let title_px = px(16.0);
    let desc_px = px(14.0);
    let tick_px = px(12.0);
    let legend_px = px(12.0);
    let line_w = px(1.5);
    let marker_px = (res.pt(6.0) / 2.0).round().max(2.0) as i32;

    root.fill(&WHITE).map_err(chart_err)?;

    let (x_scale, y_scale) = util::axis_scales(curves);
    let scaled: Vec<RenderedCurve> = curves
        .iter()
        .map(|c| util::scale_curve(c, x_scale, y_scale))
        .collect();
    let curves = scaled.as_slice();

    let (x_range, y_range) = util::axis_ranges(curves);
    if [x_range.start, x_range.end, y_range.start, y_range.end]
        .iter()
        .any(|v| !v.is_finite())
    {
        return Err(Error::InvalidInput(format!(
            "axis range {x_range:?} x {y_range:?} cannot be drawn"
        )));
    }
    let left_px = util::compute_left_label_area_px(&y_range, TICKS, tick_px, desc_px);
    let bottom_px = util::compute_bottom_label_area_px(tick_px, desc_px);

    let mut chart = ChartBuilder::on(root)
        .margin(px(12.0))
        .caption(title, (family, title_px as f64))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom_px)
        .build_cartesian_2d(x_range, y_range)
        .map_err(chart_err)?;

    let fmt = |v: &f64| util::tick_label(*v);
    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(TRANSPARENT)
        .x_labels(TICKS)
        .y_labels(TICKS)
        .x_label_formatter(&fmt)
        .y_label_formatter(&fmt)
        .x_desc(x_scale.describe(&config.x_label))
        .y_desc(y_scale.describe(&config.y_label))
        .label_style((family, tick_px as f64))
        .axis_desc_style((family, desc_px as f64))
        .axis_style(BLACK.stroke_width(px(0.8)))
        .draw()
        .map_err(chart_err)?;

    // dashed grid, drawn in pixel space under the series
    let grid = RGBColor(190, 190, 190).stroke_width(px(0.5));
    let (dash, gap) = (px(4.0) as i32, px(2.0) as i32);
    let (px_x, px_y) = chart.plotting_area().get_pixel_range();
    let xs = chart.as_coord_spec().x_spec().key_points(TICKS);
    let ys = chart.as_coord_spec().y_spec().key_points(TICKS);
    let mut lines = Vec::new();
    for x in xs {
        let (cx, _) = chart.backend_coord(&(x, 0.0));
        lines.push(((cx, px_y.start), (cx, px_y.end)));
    }
    for y in ys {
        let (_, cy) = chart.backend_coord(&(0.0, y));
        lines.push(((px_x.start, cy), (px_x.end, cy)));
    }
    for (from, to) in lines {
        for seg in util::dashed_segments(from, to, dash, gap) {
            root.draw(&PathElement::new(seg.to_vec(), grid))
                .map_err(chart_err)?;
        }
    }

    for curve in curves {
        let color = util::rgb(curve.legend.color);
        chart
            .draw_series(LineSeries::new(
                curve.line.iter().copied(),
                color.stroke_width(line_w),
            ))
            .map_err(chart_err)?;
        if let Some(shape) = curve.legend.marker {
            marker::draw_markers(chart.plotting_area(), &curve.markers, shape, marker_px, color)
                .map_err(chart_err)?;
        }
    }

    if config.show_legend && !curves.is_empty() {
        let entries: Vec<LegendEntry> = curves.iter().map(|c| c.legend.clone()).collect();
        let plot = chart.plotting_area().get_pixel_range();
        legend::draw_legend(
            root,
            &plot,
            &entries,
            config.legend_position,
            family,
            legend_px,
            line_w,
            marker_px,
        )?;
    }
    Ok(())
}
