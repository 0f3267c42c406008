//! Turn one (x, y) series into something drawable: a line path, a decimated
//! set of marker points and a legend entry.
//!
//! Everything here is pure; the chart module only draws what it is given.

use log::debug;
use serde::Serialize;

use super::spline::CubicSpline;
use super::types::{MAX_MARKERS, SMOOTH_MIN_DISTINCT, SMOOTH_SAMPLES};
use crate::error::{Error, Result};
use crate::style::{MarkerShape, NamedColor, SeriesStyle, default_series_name};

/// What the legend shows for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: NamedColor,
    /// `None` when markers are switched off.
    pub marker: Option<MarkerShape>,
    pub label: String,
}

/// How the line path was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// Spline evaluated at evenly spaced positions.
    Smoothed,
    /// Too few distinct x values; sorted points joined directly.
    Raw,
    /// Smoothing was attempted but the data was ill-conditioned.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCurve {
    pub line: Vec<(f64, f64)>,
    pub line_kind: LineKind,
    pub markers: Vec<(f64, f64)>,
    pub legend: LegendEntry,
}

/// Build the drawable curve for series `index`.
///
/// Errors only on malformed input: mismatched lengths or non-finite values.
/// Spline trouble never surfaces; the raw polyline is used instead.
pub fn render_curve(
    xs: &[f64],
    ys: &[f64],
    style: &SeriesStyle,
    index: usize,
    show_markers: bool,
) -> Result<RenderedCurve> {
    if xs.len() != ys.len() {
        return Err(Error::InvalidInput(format!(
            "x has {} values but y has {}",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(bad) = xs.iter().chain(ys).find(|v| !v.is_finite()) {
        return Err(Error::InvalidInput(format!("non-finite value {bad}")));
    }

    let sorted = sort_by_x(xs, ys);
    let (line, line_kind) = line_path(&sorted);
    let markers = if show_markers {
        decimate(&sorted)
    } else {
        Vec::new()
    };

    let label = style
        .name
        .clone()
        .unwrap_or_else(|| default_series_name(index));
    Ok(RenderedCurve {
        line,
        line_kind,
        markers,
        legend: LegendEntry {
            color: style.color,
            marker: show_markers.then_some(style.marker),
            label,
        },
    })
}

/// Joint sort by ascending x; equal x keep their input order.
pub fn sort_by_x(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0));
    pts
}

/// Collapse runs of equal x (input must be sorted) into one knot at the mean y.
pub fn dedup_by_x(sorted: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    let mut kx: Vec<f64> = Vec::new();
    let mut ky: Vec<f64> = Vec::new();
    let mut run = 0usize;
    for &(x, y) in sorted {
        if let (Some(&last), Some(mean)) = (kx.last(), ky.last_mut()) {
            if last == x {
                run += 1;
                *mean += (y - *mean) / run as f64;
                continue;
            }
        }
        kx.push(x);
        ky.push(y);
        run = 1;
    }
    (kx, ky)
}

fn line_path(sorted: &[(f64, f64)]) -> (Vec<(f64, f64)>, LineKind) {
    let (kx, ky) = dedup_by_x(sorted);
    if kx.len() <= SMOOTH_MIN_DISTINCT {
        return (sorted.to_vec(), LineKind::Raw);
    }
    match CubicSpline::fit(&kx, &ky) {
        Some(spline) => smoothed_or_fallback(sorted, spline.sample(SMOOTH_SAMPLES)),
        None => {
            debug!(
                "spline rejected {} knots as ill-conditioned; drawing raw polyline",
                kx.len()
            );
            (sorted.to_vec(), LineKind::Fallback)
        }
    }
}

/// Keep a sampled spline path only when every sample is finite.
fn smoothed_or_fallback(
    sorted: &[(f64, f64)],
    path: Vec<(f64, f64)>,
) -> (Vec<(f64, f64)>, LineKind) {
    if path.iter().all(|(x, y)| x.is_finite() && y.is_finite()) {
        (path, LineKind::Smoothed)
    } else {
        debug!("spline produced non-finite samples; drawing raw polyline");
        (sorted.to_vec(), LineKind::Fallback)
    }
}

/// Every k-th point with k = max(1, n / 50), starting at the first.
pub fn decimate(sorted: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let step = (sorted.len() / MAX_MARKERS).max(1);
    sorted.iter().copied().step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SeriesStyle {
        SeriesStyle::default_for(0)
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let pts = sort_by_x(&[2.0, 1.0, 2.0, 0.0], &[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(pts, vec![(0.0, 40.0), (1.0, 20.0), (2.0, 10.0), (2.0, 30.0)]);
    }

    #[test]
    fn dedup_averages_ties() {
        let (kx, ky) = dedup_by_x(&[(0.0, 1.0), (1.0, 2.0), (1.0, 4.0), (1.0, 6.0)]);
        assert_eq!(kx, vec![0.0, 1.0]);
        assert_eq!(ky, vec![1.0, 4.0]);
    }

    #[test]
    fn ties_do_not_count_as_distinct() {
        // five points but only three distinct x values: stays raw
        let c = render_curve(
            &[3.0, 1.0, 2.0, 1.0, 3.0],
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &style(),
            0,
            true,
        )
        .unwrap();
        assert_eq!(c.line_kind, LineKind::Raw);
        assert_eq!(
            c.line,
            vec![(1.0, 2.0), (1.0, 4.0), (2.0, 3.0), (3.0, 1.0), (3.0, 5.0)]
        );
    }

    #[test]
    fn mismatched_lengths_fail_fast() {
        let err = render_curve(&[1.0, 2.0], &[1.0], &style(), 0, false).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn nan_fails_fast() {
        let err = render_curve(&[1.0, f64::NAN], &[1.0, 2.0], &style(), 0, false).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn empty_series_is_empty_curve() {
        let c = render_curve(&[], &[], &style(), 4, true).unwrap();
        assert!(c.line.is_empty());
        assert!(c.markers.is_empty());
        assert_eq!(c.legend.label, "Series 5");
    }

    #[test]
    fn non_finite_samples_fall_back() {
        let sorted = [(0.0, 1.0), (1.0, 2.0), (2.0, 0.5), (3.0, 4.0)];
        let path = vec![(0.0, 1.0), (1.5, f64::NAN), (3.0, 4.0)];
        assert_eq!(
            smoothed_or_fallback(&sorted, path),
            (sorted.to_vec(), LineKind::Fallback)
        );
        let overflow = vec![(0.0, 1.0), (1.5, f64::INFINITY), (3.0, 4.0)];
        assert_eq!(smoothed_or_fallback(&sorted, overflow).1, LineKind::Fallback);

        let finite = vec![(0.0, 1.0), (1.5, 1.2), (3.0, 4.0)];
        assert_eq!(
            smoothed_or_fallback(&sorted, finite.clone()),
            (finite, LineKind::Smoothed)
        );
    }

    #[test]
    fn decimation_step() {
        let pts: Vec<(f64, f64)> = (0..120).map(|i| (i as f64, 0.0)).collect();
        // k = 2 -> 60 markers
        let m = decimate(&pts);
        assert_eq!(m.len(), 60);
        assert_eq!(m[1], (2.0, 0.0));
        let few: Vec<(f64, f64)> = (0..7).map(|i| (i as f64, 0.0)).collect();
        assert_eq!(decimate(&few).len(), 7);
    }
}
