//! Natural cubic spline solver
//!
//! Solves the tridiagonal system for the second derivatives of the
//! interpolating natural cubic spline and expands each segment into power
//! coefficients of the absolute parameter.
//!
//! # See also
//!
//! Pink: `scn_solvespline()` in `mcsplines.c`

use crate::error::{Error, Result};

/// Compute the natural cubic spline through `(t[i], y[i])`.
///
/// Returns one `[c0, c1, c2, c3]` per segment; segment `i` evaluates as
/// `c0 + c1 t + c2 t^2 + c3 t^3` for `t` in `[t[i], t[i+1]]`.
///
/// The second derivative is 0 at both ends. With two points the result is
/// the straight line through them.
///
/// # Errors
///
/// - [`Error::DimensionMismatch`] if `t` and `y` differ in length
/// - [`Error::TooFewPoints`] if there are fewer than 2 points
/// - [`Error::InvalidParameter`] if `t` is not strictly increasing
pub fn solve_natural_spline(t: &[f64], y: &[f64]) -> Result<Vec<[f64; 4]>> {
    let n = t.len();
    if y.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: y.len(),
        });
    }
    if n < 2 {
        return Err(Error::TooFewPoints {
            required: 2,
            actual: n,
        });
    }

    let h: Vec<f64> = t.windows(2).map(|w| w[1] - w[0]).collect();
    if h.iter().any(|&d| d <= 0.0 || !d.is_finite()) {
        return Err(Error::InvalidParameter(
            "spline parameters must be strictly increasing".to_string(),
        ));
    }

    let m = second_derivatives(&h, y);

    let coeffs = (0..n - 1)
        .map(|i| segment_coefficients(t[i], t[i + 1], h[i], y[i], y[i + 1], m[i], m[i + 1]))
        .collect();
    Ok(coeffs)
}

/// Second derivatives at the knots (Thomas algorithm).
///
/// `m[0]` and `m[n-1]` stay 0, so only the interior unknowns are solved.
fn second_derivatives(h: &[f64], y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let mut cp = vec![0.0; n];
    let mut dp = vec![0.0; n];
    for i in 1..n - 1 {
        let sub = h[i - 1];
        let diag = 2.0 * (h[i - 1] + h[i]);
        let sup = h[i];
        let rhs = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);

        // Diagonally dominant, so denom never vanishes.
        let denom = diag - sub * cp[i - 1];
        cp[i] = sup / denom;
        dp[i] = (rhs - sub * dp[i - 1]) / denom;
    }

    m[n - 2] = dp[n - 2];
    for i in (1..n - 2).rev() {
        m[i] = dp[i] - cp[i] * m[i + 1];
    }
    m
}

/// Expand one segment from its second-derivative form
///
/// ```text
/// S(t) = ma (b-t)^3 / 6h + mb (t-a)^3 / 6h
///      + (ya/h - ma h/6) (b-t) + (yb/h - mb h/6) (t-a)
/// ```
///
/// into power coefficients of `t`.
fn segment_coefficients(a: f64, b: f64, h: f64, ya: f64, yb: f64, ma: f64, mb: f64) -> [f64; 4] {
    let ka = ma / (6.0 * h);
    let kb = mb / (6.0 * h);
    let la = ya / h - ma * h / 6.0;
    let lb = yb / h - mb * h / 6.0;

    let c0 = ka * b * b * b - kb * a * a * a + la * b - lb * a;
    let c1 = -3.0 * ka * b * b + 3.0 * kb * a * a - la + lb;
    let c2 = 3.0 * ka * b - 3.0 * kb * a;
    let c3 = kb - ka;
    [c0, c1, c2, c3]
}

/// Evaluate `c0 + c1 t + c2 t^2 + c3 t^3`.
#[inline]
pub(crate) fn eval_cubic(c: &[f64; 4], t: f64) -> f64 {
    ((c[3] * t + c[2]) * t + c[1]) * t + c[0]
}

/// Evaluate the first derivative of the cubic.
#[inline]
pub(crate) fn eval_cubic_derivative(c: &[f64; 4], t: f64) -> f64 {
    (3.0 * c[3] * t + 2.0 * c[2]) * t + c[1]
}

/// Evaluate the second derivative of the cubic.
#[cfg(test)]
#[inline]
pub(crate) fn eval_cubic_second_derivative(c: &[f64; 4], t: f64) -> f64 {
    6.0 * c[3] * t + 2.0 * c[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn params(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_two_points_is_line() {
        let c = solve_natural_spline(&[0.0, 1.0], &[0.0, 2.0]).unwrap();
        assert_eq!(c, vec![[0.0, 2.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_three_points_known_coefficients() {
        // y = 0, 1, 0 gives m1 = -3
        let c = solve_natural_spline(&params(3), &[0.0, 1.0, 0.0]).unwrap();
        let expected = [[0.0, 1.5, 0.0, -0.5], [-1.0, 4.5, -3.0, 0.5]];
        for (seg, exp) in c.iter().zip(expected.iter()) {
            for k in 0..4 {
                assert!((seg[k] - exp[k]).abs() < 1e-12, "{seg:?} vs {exp:?}");
            }
        }
    }

    #[test]
    fn test_collinear_points_have_no_curvature() {
        let y: Vec<f64> = (0..6).map(|i| 2.0 * i as f64 + 1.0).collect();
        let c = solve_natural_spline(&params(6), &y).unwrap();
        for seg in &c {
            assert!((seg[0] - 1.0).abs() < EPS);
            assert!((seg[1] - 2.0).abs() < EPS);
            assert!(seg[2].abs() < EPS);
            assert!(seg[3].abs() < EPS);
        }
    }

    #[test]
    fn test_interpolates_and_is_c2() {
        let t = [0.0, 0.5, 2.0, 3.0, 4.5];
        let y = [1.0, -2.0, 0.5, 4.0, 3.0];
        let c = solve_natural_spline(&t, &y).unwrap();
        assert_eq!(c.len(), 4);

        for i in 0..4 {
            assert!((eval_cubic(&c[i], t[i]) - y[i]).abs() < EPS);
            assert!((eval_cubic(&c[i], t[i + 1]) - y[i + 1]).abs() < EPS);
        }
        for i in 1..4 {
            let (l, r) = (&c[i - 1], &c[i]);
            assert!((eval_cubic_derivative(l, t[i]) - eval_cubic_derivative(r, t[i])).abs() < EPS);
            assert!(
                (eval_cubic_second_derivative(l, t[i]) - eval_cubic_second_derivative(r, t[i]))
                    .abs()
                    < EPS
            );
        }
        // natural end conditions
        assert!(eval_cubic_second_derivative(&c[0], t[0]).abs() < EPS);
        assert!(eval_cubic_second_derivative(&c[3], t[4]).abs() < EPS);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            solve_natural_spline(&[0.0], &[1.0]),
            Err(Error::TooFewPoints { .. })
        ));
        assert!(matches!(
            solve_natural_spline(&[0.0, 1.0], &[1.0]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            solve_natural_spline(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let y = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let a = solve_natural_spline(&params(8), &y).unwrap();
        let b = solve_natural_spline(&params(8), &y).unwrap();
        assert_eq!(a, b);
    }
}
