//! Marker geometry for the 20 marker shapes.
//!
//! Shapes are described in pixel offsets around an anchor so the same geometry
//! serves data points (anchored in chart coordinates) and legend glyphs
//! (anchored in pixels).

use plotters::element::{Circle, EmptyElement, PathElement, Polygon};
use plotters::prelude::*;
use std::f64::consts::PI;

use crate::style::MarkerShape;

/// Primitive drawing recipe for one marker.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerGeometry {
    Disc(i32),
    /// Filled polygon, vertices relative to the anchor.
    Filled(Vec<(i32, i32)>),
    /// Line segments relative to the anchor.
    Strokes(Vec<[(i32, i32); 2]>),
}

/// Regular polygon with `n` vertices, first vertex at `start_deg` (0 = right, 90 = up).
fn regular(n: usize, r: f64, start_deg: f64) -> Vec<(i32, i32)> {
    (0..n)
        .map(|i| {
            let a = (start_deg + 360.0 * i as f64 / n as f64) * PI / 180.0;
            ((r * a.cos()).round() as i32, (-r * a.sin()).round() as i32)
        })
        .collect()
}

fn star(r: f64) -> Vec<(i32, i32)> {
    let inner = r * 0.45;
    (0..10)
        .map(|i| {
            let rad = if i % 2 == 0 { r } else { inner };
            let a = (90.0 + 36.0 * i as f64) * PI / 180.0;
            ((rad * a.cos()).round() as i32, (-rad * a.sin()).round() as i32)
        })
        .collect()
}

/// Three spokes from the center, first spoke at `start_deg`.
fn tri_spokes(r: i32, start_deg: f64) -> Vec<[(i32, i32); 2]> {
    regular(3, r as f64, start_deg)
        .into_iter()
        .map(|p| [(0, 0), p])
        .collect()
}

/// Geometry of `shape` for a marker of radius `s` pixels.
pub fn geometry(shape: MarkerShape, s: i32) -> MarkerGeometry {
    let r = s as f64;
    let t = (s / 3).max(1);
    match shape {
        MarkerShape::Circle => MarkerGeometry::Disc(s),
        MarkerShape::Square => MarkerGeometry::Filled(vec![(-s, -s), (s, -s), (s, s), (-s, s)]),
        MarkerShape::TriangleUp => MarkerGeometry::Filled(regular(3, r, 90.0)),
        MarkerShape::TriangleDown => MarkerGeometry::Filled(regular(3, r, 270.0)),
        MarkerShape::TriangleRight => MarkerGeometry::Filled(regular(3, r, 0.0)),
        MarkerShape::TriangleLeft => MarkerGeometry::Filled(regular(3, r, 180.0)),
        MarkerShape::Diamond => MarkerGeometry::Filled(vec![(0, -s), (s, 0), (0, s), (-s, 0)]),
        MarkerShape::ThinDiamond => {
            let w = (s * 3 / 5).max(1);
            MarkerGeometry::Filled(vec![(0, -s), (w, 0), (0, s), (-w, 0)])
        }
        MarkerShape::Pentagon => MarkerGeometry::Filled(regular(5, r, 90.0)),
        MarkerShape::Hexagon => MarkerGeometry::Filled(regular(6, r, 90.0)),
        MarkerShape::Octagon => MarkerGeometry::Filled(regular(8, r, 22.5)),
        MarkerShape::Star => MarkerGeometry::Filled(star(r * 1.2)),
        MarkerShape::Plus => MarkerGeometry::Strokes(vec![[(-s, 0), (s, 0)], [(0, -s), (0, s)]]),
        MarkerShape::X => MarkerGeometry::Strokes(vec![[(-s, -s), (s, s)], [(-s, s), (s, -s)]]),
        MarkerShape::TriDown => MarkerGeometry::Strokes(tri_spokes(s, 270.0)),
        MarkerShape::TriUp => MarkerGeometry::Strokes(tri_spokes(s, 90.0)),
        MarkerShape::TriLeft => MarkerGeometry::Strokes(tri_spokes(s, 180.0)),
        MarkerShape::TriRight => MarkerGeometry::Strokes(tri_spokes(s, 0.0)),
        MarkerShape::PlusFilled => MarkerGeometry::Filled(vec![
            (-t, -s),
            (t, -s),
            (t, -t),
            (s, -t),
            (s, t),
            (t, t),
            (t, s),
            (-t, s),
            (-t, t),
            (-s, t),
            (-s, -t),
            (-t, -t),
        ]),
        MarkerShape::XFilled => {
            // the filled plus rotated by 45 degrees
            let c = std::f64::consts::FRAC_1_SQRT_2;
            let plus = [
                (-t, -s),
                (t, -s),
                (t, -t),
                (s, -t),
                (s, t),
                (t, t),
                (t, s),
                (-t, s),
                (-t, t),
                (-s, t),
                (-s, -t),
                (-t, -t),
            ];
            MarkerGeometry::Filled(
                plus.iter()
                    .map(|&(x, y)| {
                        let (x, y) = (x as f64, y as f64);
                        (((x - y) * c).round() as i32, ((x + y) * c).round() as i32)
                    })
                    .collect(),
            )
        }
    }
}

/// Stroke width used for line-only markers at radius `s`.
pub fn stroke_width(s: i32) -> u32 {
    (s / 3).max(1) as u32
}

/// Draw markers at every anchor in `points` on any drawing area whose
/// coordinate system accepts `C`.
///
/// One `draw_series` call per primitive keeps every element concretely typed.
pub fn draw_markers<DB, CT, C>(
    area: &DrawingArea<DB, CT>,
    points: &[C],
    shape: MarkerShape,
    size: i32,
    color: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    CT: plotters::coord::CoordTranslate<From = C>,
    C: Clone,
{
    match geometry(shape, size) {
        MarkerGeometry::Disc(r) => {
            for p in points {
                area.draw(&(EmptyElement::at(p.clone()) + Circle::new((0, 0), r, color.filled())))?;
            }
        }
        MarkerGeometry::Filled(verts) => {
            for p in points {
                area.draw(
                    &(EmptyElement::at(p.clone()) + Polygon::new(verts.clone(), color.filled())),
                )?;
            }
        }
        MarkerGeometry::Strokes(segments) => {
            let style = color.stroke_width(stroke_width(size));
            for p in points {
                for seg in &segments {
                    area.draw(
                        &(EmptyElement::at(p.clone()) + PathElement::new(seg.to_vec(), style)),
                    )?;
                }
            }
        }
    }
    Ok(())
}
