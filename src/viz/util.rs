//! Utility functions for visualization: colors, axis ranges, tick labels, gutters.

use plotters::prelude::*;
use std::ops::Range;

use super::curve::RenderedCurve;
use super::text::estimate_text_width_px;
use crate::style::NamedColor;

/// Plotters color for a palette entry.
#[inline]
pub fn rgb(color: NamedColor) -> RGBColor {
    let c = color.rgb();
    RGBColor(c.r, c.g, c.b)
}

/// Fraction of the data span added on each side of both axes.
pub const AXIS_MARGIN: f64 = 0.05;

/// X and Y ranges covering every line and marker point, padded by
/// [`AXIS_MARGIN`]. Degenerate spans are widened by one unit each way; no
/// data at all gives `0..1` on both axes.
pub fn axis_ranges(curves: &[RenderedCurve]) -> (Range<f64>, Range<f64>) {
    let pts = curves
        .iter()
        .flat_map(|c| c.line.iter().chain(c.markers.iter()));
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for &(x, y) in pts {
        bounds = Some(match bounds {
            None => (x, x, y, y),
            Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        });
    }
    match bounds {
        None => (0.0..1.0, 0.0..1.0),
        Some((x0, x1, y0, y1)) => (pad(x0, x1), pad(y0, y1)),
    }
}

fn pad(lo: f64, hi: f64) -> Range<f64> {
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    let m = hi * AXIS_MARGIN - lo * AXIS_MARGIN;
    (lo - m)..(hi + m)
}

/// Power-of-ten factor applied to one axis before drawing, shown in the
/// axis description as `(×1eN)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub factor: f64,
    pub exponent: i32,
}

impl AxisScale {
    pub const IDENTITY: AxisScale = AxisScale {
        factor: 1.0,
        exponent: 0,
    };

    /// Axis description with the scale appended when one is in effect.
    pub fn describe(&self, desc: &str) -> String {
        if self.exponent == 0 {
            desc.to_string()
        } else {
            format!("{desc} (×1e{})", self.exponent)
        }
    }
}

/// Largest and smallest magnitudes drawn without a scale factor.
const UNSCALED_MAX: f64 = 1.0e4;
const UNSCALED_MIN: f64 = 1.0e-2;

/// Scale for an axis whose largest absolute value is `max_abs`: values stay
/// as they are between 1e-2 and 1e4, otherwise they are divided by the power
/// of ten of `max_abs`.
pub fn choose_axis_scale(max_abs: f64) -> AxisScale {
    if !max_abs.is_finite() || max_abs == 0.0 || (UNSCALED_MIN..UNSCALED_MAX).contains(&max_abs)
    {
        return AxisScale::IDENTITY;
    }
    let exponent = (max_abs.log10().floor() as i32).clamp(-307, 308);
    AxisScale {
        factor: 10f64.powi(exponent),
        exponent,
    }
}

/// X and Y scales covering every line and marker point.
pub fn axis_scales(curves: &[RenderedCurve]) -> (AxisScale, AxisScale) {
    let (mut mx, mut my) = (0.0f64, 0.0f64);
    for &(x, y) in curves
        .iter()
        .flat_map(|c| c.line.iter().chain(c.markers.iter()))
    {
        mx = mx.max(x.abs());
        my = my.max(y.abs());
    }
    (choose_axis_scale(mx), choose_axis_scale(my))
}

/// Copy of `curve` with coordinates divided by the axis factors.
pub fn scale_curve(curve: &RenderedCurve, x: AxisScale, y: AxisScale) -> RenderedCurve {
    let scale = |pts: &[(f64, f64)]| -> Vec<(f64, f64)> {
        pts.iter()
            .map(|&(px, py)| (px / x.factor, py / y.factor))
            .collect()
    };
    RenderedCurve {
        line: scale(&curve.line),
        markers: scale(&curve.markers),
        ..curve.clone()
    }
}

/// Tick label text: fewer decimals for larger magnitudes, exponent notation
/// past a million.
pub fn tick_label(v: f64) -> String {
    let a = v.abs();
    if a >= 1.0e6 {
        return format!("{:.2e}", v);
    }
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}

/// Width of the left label gutter: widest tick label over the sampled range
/// plus room for the rotated axis description.
pub fn compute_left_label_area_px(
    range: &Range<f64>,
    ticks: usize,
    tick_font_px: u32,
    desc_font_px: u32,
) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let v = range.start + (range.end - range.start) * t;
        max_px = max_px.max(estimate_text_width_px(&tick_label(v), tick_font_px));
    }
    max_px + tick_font_px + desc_font_px * 2
}

/// Height of the bottom label gutter: tick labels plus the axis description.
pub fn compute_bottom_label_area_px(tick_font_px: u32, desc_font_px: u32) -> u32 {
    tick_font_px * 2 + desc_font_px * 2
}

/// Split the axis-aligned pixel line `from -> to` into dashes of `dash`
/// pixels separated by `gap` pixels.
pub fn dashed_segments(
    from: (i32, i32),
    to: (i32, i32),
    dash: i32,
    gap: i32,
) -> Vec<[(i32, i32); 2]> {
    let (dx, dy) = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
    let len = (to.0 - from.0).abs().max((to.1 - from.1).abs());
    let (dash, step) = (dash.max(1), dash.max(1) + gap.max(0));
    let mut out = Vec::new();
    let mut at = 0;
    while at < len {
        let end = (at + dash).min(len);
        out.push([
            (from.0 + dx * at, from.1 + dy * at),
            (from.0 + dx * end, from.1 + dy * end),
        ]);
        at += step;
    }
    out
}
