use excel2graph::viz::{LineKind, MAX_MARKERS, SMOOTH_SAMPLES, render_curve};
use excel2graph::{Error, SeriesStyle};

fn style() -> SeriesStyle {
    SeriesStyle::default_for(0)
}

#[test]
fn few_distinct_x_keeps_sorted_input() {
    let xs = [3.0, 1.0, 2.0, 1.0];
    let ys = [30.0, 10.0, 20.0, 11.0];
    let c = render_curve(&xs, &ys, &style(), 0, true).unwrap();
    assert_eq!(c.line_kind, LineKind::Raw);
    assert_eq!(
        c.line,
        vec![(1.0, 10.0), (1.0, 11.0), (2.0, 20.0), (3.0, 30.0)]
    );
}

#[test]
fn smooth_curve_spans_the_data() {
    let xs: Vec<f64> = (0..20).map(|i| (19 - i) as f64 * 0.5).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let c = render_curve(&xs, &ys, &style(), 0, true).unwrap();
    assert_eq!(c.line_kind, LineKind::Smoothed);
    assert_eq!(c.line.len(), SMOOTH_SAMPLES);
    assert_eq!(c.line.first().unwrap().0, 0.0);
    assert_eq!(c.line.last().unwrap().0, 9.5);
}

#[test]
fn smooth_curve_passes_through_the_data() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys = [1.0, 3.0, 2.0, 5.0, 4.0];
    let c = render_curve(&xs, &ys, &style(), 0, false).unwrap();
    assert_eq!(c.line_kind, LineKind::Smoothed);
    let first = c.line.first().unwrap();
    let last = c.line.last().unwrap();
    assert!((first.1 - 1.0).abs() < 1e-9);
    assert!((last.1 - 4.0).abs() < 1e-9);
}

#[test]
fn markers_are_decimated() {
    let xs: Vec<f64> = (0..500).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let c = render_curve(&xs, &ys, &style(), 0, true).unwrap();
    assert_eq!(c.markers.len(), MAX_MARKERS);
    assert_eq!(c.markers[1], (10.0, 100.0));

    // n = 120 -> k = 2 -> ceil(120 / 2)
    let c = render_curve(&xs[..120], &ys[..120], &style(), 0, true).unwrap();
    assert_eq!(c.markers.len(), 60);

    // n < 50 keeps every point
    let c = render_curve(&xs[..7], &ys[..7], &style(), 0, true).unwrap();
    assert_eq!(c.markers.len(), 7);
}

#[test]
fn disabled_markers_leave_no_marker_in_the_legend() {
    let c = render_curve(&[0.0, 1.0], &[0.0, 1.0], &style(), 4, false).unwrap();
    assert!(c.markers.is_empty());
    assert_eq!(c.legend.marker, None);
    assert_eq!(c.legend.label, "Series 5");
}

#[test]
fn custom_names_reach_the_legend() {
    let s = style().with_name("Specimen A");
    let c = render_curve(&[0.0], &[1.0], &s, 0, true).unwrap();
    assert_eq!(c.legend.label, "Specimen A");
    assert_eq!(c.legend.color, s.color);
    assert_eq!(c.legend.marker, Some(s.marker));
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(
        render_curve(&[0.0, 1.0], &[0.0], &style(), 0, true),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        render_curve(&[0.0, f64::NAN], &[0.0, 1.0], &style(), 0, true),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn empty_series_renders_nothing() {
    let c = render_curve(&[], &[], &style(), 0, true).unwrap();
    assert!(c.line.is_empty());
    assert!(c.markers.is_empty());
}

#[test]
fn crowded_knots_fall_back_to_the_sorted_points() {
    let xs = [3.0, 1e-13, 1.0, 0.0, 2.0];
    let ys = [4.0, 1.0, 2.0, 0.0, 3.0];
    let c = render_curve(&xs, &ys, &style(), 0, true).unwrap();
    assert_eq!(c.line_kind, LineKind::Fallback);
    assert_eq!(
        c.line,
        vec![(0.0, 0.0), (1e-13, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)]
    );
    assert_eq!(c.markers.len(), 5);
}
