//! Interpolating cubic spline with not-a-knot end conditions.
//!
//! The curve passes through every knot (no smoothing residual), is C2 between
//! knots and has a continuous third derivative at the second and second-to-last
//! knot. Cubic polynomials are reproduced exactly.

/// Number of distinct knots required before a fit is attempted.
pub const MIN_KNOTS: usize = 4;

/// Relative spacing below which neighbouring knots are treated as degenerate.
const MIN_REL_SPACING: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at the knots.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through strictly increasing `xs`.
    ///
    /// Returns `None` when the input is not well-formed (too few knots,
    /// non-finite values, non-increasing or nearly coincident knots) or when
    /// the linear system turns out singular.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if !is_well_formed(xs, ys) {
            return None;
        }
        let m = second_derivatives(xs, ys)?;
        if m.iter().any(|v| !v.is_finite()) {
            return None;
        }
        Some(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Evaluate at `x`. Outside the knot range the end cubics are extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let i = self
            .xs
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(n - 2);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let a = x1 - x;
        let b = x - x0;
        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }

    /// Evaluate at `count` evenly spaced positions over the knot range.
    /// The first and last positions are exactly the end knots.
    pub fn sample(&self, count: usize) -> Vec<(f64, f64)> {
        linspace(self.xs[0], self.xs[self.xs.len() - 1], count)
            .into_iter()
            .map(|x| (x, self.eval(x)))
            .collect()
    }
}

/// Pre-fit predicate: enough finite knots, strictly increasing, not crowded.
pub fn is_well_formed(xs: &[f64], ys: &[f64]) -> bool {
    if xs.len() != ys.len() || xs.len() < MIN_KNOTS {
        return false;
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return false;
    }
    let span = xs[xs.len() - 1] - xs[0];
    if span <= 0.0 {
        return false;
    }
    xs.windows(2).all(|w| w[1] - w[0] > span * MIN_REL_SPACING)
}

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i + 1 == count {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

// Moment equations for the interior knots, with the two not-a-knot rows folded
// into the first and last interior equation so the system stays tridiagonal.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Option<Vec<f64>> {
    let n = xs.len();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = ys
        .windows(2)
        .zip(&h)
        .map(|(w, hi)| (w[1] - w[0]) / hi)
        .collect();

    // Unknowns M[1..=n-2]; row r corresponds to knot r + 1. n >= 4, so k >= 2.
    let k = n - 2;
    let mut sub = vec![0.0; k];
    let mut diag = vec![0.0; k];
    let mut sup = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for r in 0..k {
        let i = r + 1;
        sub[r] = h[i - 1];
        diag[r] = 2.0 * (h[i - 1] + h[i]);
        sup[r] = h[i];
        rhs[r] = 6.0 * (slope[i] - slope[i - 1]);
    }

    // Left: M0 = ((h0 + h1) M1 - h0 M2) / h1
    let (h0, h1) = (h[0], h[1]);
    diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
    sup[0] = (h1 * h1 - h0 * h0) / h1;
    sub[0] = 0.0;

    // Right: M[n-1] = ((a + b) M[n-2] - b M[n-3]) / a, a = h[n-3], b = h[n-2]
    let (a, b) = (h[n - 3], h[n - 2]);
    let last = k - 1;
    diag[last] = (a + b) * (2.0 * a + b) / a;
    sub[last] = (a * a - b * b) / a;
    sup[last] = 0.0;

    let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs)?;

    let mut m = Vec::with_capacity(n);
    m.push(((h0 + h1) * interior[0] - h0 * interior[1]) / h1);
    m.extend_from_slice(&interior);
    m.push(((a + b) * interior[last] - b * interior[last - 1]) / a);
    Some(m)
}

// Thomas algorithm; `None` on a (near) zero pivot.
fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Option<Vec<f64>> {
    let n = diag.len();
    let scale = diag.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    let tiny = scale * f64::EPSILON;

    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];
    let mut pivot = diag[0];
    if pivot.abs() <= tiny {
        return None;
    }
    c[0] = sup[0] / pivot;
    d[0] = rhs[0] / pivot;
    for i in 1..n {
        pivot = diag[i] - sub[i] * c[i - 1];
        if pivot.abs() <= tiny {
            return None;
        }
        c[i] = sup[i] / pivot;
        d[i] = (rhs[i] - sub[i] * d[i - 1]) / pivot;
    }
    let mut x = vec![0.0; n];
    x[n - 1] = d[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d[i] - c[i] * x[i + 1];
    }
    Some(x)
}
