//! Live preview: synthetic series drawn through the regular chart pipeline.

use std::f64::consts::FRAC_PI_4;
use std::path::Path;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::Dataset;
use crate::viz::spline::linspace;
use crate::viz::{PRINT_RESOLUTION, Resolution, RgbBuffer, render_png, render_rgb};

pub const PREVIEW_TITLE: &str = "Preview";
pub const PREVIEW_SAMPLES: usize = 100;
const X_MAX: f64 = 10.0;

/// Smallest preview drawn, in pixels.
pub const MIN_PREVIEW_SIZE: (u32, u32) = (120, 80);

/// `X1/Y1 .. Xn/Yn` over `[0, 10]`: `sin x`, `cos x`, `0.1 x`, then
/// `sin(x + i·π/4)` for every further series.
pub fn preview_dataset(num_series: usize) -> Dataset {
    let xs = linspace(0.0, X_MAX, PREVIEW_SAMPLES);
    let mut cols = Vec::with_capacity(num_series * 2);
    for i in 0..num_series {
        let ys: Vec<f64> = xs
            .iter()
            .map(|&x| match i {
                0 => x.sin(),
                1 => x.cos(),
                2 => 0.1 * x,
                _ => (x + i as f64 * FRAC_PI_4).sin(),
            })
            .collect();
        cols.push((format!("X{}", i + 1), xs.clone()));
        cols.push((format!("Y{}", i + 1), ys));
    }
    Dataset::from_numeric(cols)
}

/// `config` resized to `width` x `height` pixels, keeping the proportions of
/// the printed chart (fonts and strokes scale with the width).
fn sized(config: &ChartConfig, width: u32, height: u32) -> ChartConfig {
    let dpi = width as f64 / PRINT_RESOLUTION.width_in;
    ChartConfig {
        resolution: Resolution::fit_pixels(width, height, dpi),
        ..config.clone()
    }
}

/// Largest preview with the printed chart's 3:2 proportions that fits in a
/// `width` x `height` box, never smaller than [`MIN_PREVIEW_SIZE`].
pub fn fit_to_box(width: f32, height: f32) -> (u32, u32) {
    let aspect = PRINT_RESOLUTION.width_in / PRINT_RESOLUTION.height_in;
    let w = f64::from(width).min(f64::from(height) * aspect);
    let (min_w, min_h) = MIN_PREVIEW_SIZE;
    if !w.is_finite() || w <= f64::from(min_w) {
        return MIN_PREVIEW_SIZE;
    }
    let w = w.floor() as u32;
    let h = ((f64::from(w) / aspect).floor() as u32).max(min_h);
    (w, h)
}

/// Render the preview into an RGB buffer of `width` x `height` pixels.
pub fn render_preview(config: &ChartConfig, width: u32, height: u32) -> Result<RgbBuffer> {
    let config = sized(config, width, height);
    render_rgb(&preview_dataset(config.num_series), &config, PREVIEW_TITLE)
}

/// Same as [`render_preview`], written to a PNG file instead.
pub fn write_preview_png<P: AsRef<Path>>(
    config: &ChartConfig,
    width: u32,
    height: u32,
    out_path: P,
) -> Result<()> {
    let config = sized(config, width, height);
    render_png(
        &preview_dataset(config.num_series),
        &config,
        PREVIEW_TITLE,
        out_path,
    )?;
    Ok(())
}
