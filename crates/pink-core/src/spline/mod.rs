//! Spline, SplineSet - Parametric cubic splines
//!
//! A [`Spline`] interpolates a point list with one natural cubic spline per
//! axis, parameterized by the point index (`t_i = i`). Each segment stores
//! power coefficients of the absolute parameter, which is what Pink writes
//! in its `c` / `C` spline files.
//!
//! # See also
//!
//! - Pink: `points2spline.c`, `mcsplines.c`
//! - `drawsplinesorient2.c` (tangent sampling of a spline set)

mod serial;
mod set;
mod solve;

pub use set::SplineSet;
pub use solve::solve_natural_spline;

use crate::error::{Error, Result};
use crate::points::{Dim, ListKind, PointList, VectorList};
use solve::{eval_cubic, eval_cubic_derivative};

/// Spline of a single coordinate axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpline {
    /// Coordinate of every control point on this axis
    control: Vec<f64>,
    /// `[c0, c1, c2, c3]` per segment
    coeffs: Vec<[f64; 4]>,
}

impl AxisSpline {
    /// Create an axis spline from control values and segment coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error unless there are at least 2 control values and
    /// exactly one coefficient set fewer.
    pub fn new(control: Vec<f64>, coeffs: Vec<[f64; 4]>) -> Result<Self> {
        if control.len() < 2 {
            return Err(Error::TooFewPoints {
                required: 2,
                actual: control.len(),
            });
        }
        if coeffs.len() + 1 != control.len() {
            return Err(Error::InvalidParameter(format!(
                "{} control points need {} segments, got {}",
                control.len(),
                control.len() - 1,
                coeffs.len()
            )));
        }
        Ok(Self { control, coeffs })
    }

    pub fn control(&self) -> &[f64] {
        &self.control
    }

    pub fn coeffs(&self) -> &[[f64; 4]] {
        &self.coeffs
    }

    /// Value at parameter `t`, clamped to the spline's range.
    pub fn eval(&self, t: f64) -> f64 {
        let (seg, t) = self.locate(t);
        eval_cubic(&self.coeffs[seg], t)
    }

    /// First derivative at parameter `t`, clamped to the spline's range.
    pub fn derivative(&self, t: f64) -> f64 {
        let (seg, t) = self.locate(t);
        eval_cubic_derivative(&self.coeffs[seg], t)
    }

    fn locate(&self, t: f64) -> (usize, f64) {
        let last = self.coeffs.len() - 1;
        let t = t.clamp(0.0, self.coeffs.len() as f64);
        let seg = (t.floor() as usize).min(last);
        (seg, t)
    }
}

/// Parametric cubic spline in 2D or 3D.
///
/// # See also
///
/// Pink: spline file formats `c` (2D) and `C` (3D)
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    dim: Dim,
    axes: Vec<AxisSpline>,
}

impl Spline {
    /// Assemble a spline from one [`AxisSpline`] per axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of axes doesn't match `dim` or the
    /// axes have different numbers of control points.
    pub fn from_axes(dim: Dim, axes: Vec<AxisSpline>) -> Result<Self> {
        if axes.len() != dim.axes() {
            return Err(Error::DimensionMismatch {
                expected: dim.axes(),
                actual: axes.len(),
            });
        }
        let n = axes[0].control.len();
        if axes.iter().any(|a| a.control.len() != n) {
            return Err(Error::InvalidParameter(
                "all axes must have the same number of control points".to_string(),
            ));
        }
        Ok(Self { dim, axes })
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes[0].control.len()
    }

    /// Always false; a spline has at least 2 control points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of cubic segments (`len() - 1`).
    #[inline]
    pub fn segments(&self) -> usize {
        self.axes[0].coeffs.len()
    }

    /// Spline of one axis (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, axis: usize) -> Option<&AxisSpline> {
        self.axes.get(axis)
    }

    pub fn axes(&self) -> &[AxisSpline] {
        &self.axes
    }

    /// Control points as a binary point list.
    pub fn control_points(&self) -> Result<PointList> {
        PointList::from_axes(self.axes.iter().map(|a| a.control.clone()).collect())
    }

    /// Point on the curve at parameter `t` (`z` is 0 in 2D).
    ///
    /// `t` is clamped to `[0, len() - 1]`.
    pub fn eval(&self, t: f64) -> [f64; 3] {
        let mut p = [0.0; 3];
        for (c, axis) in p.iter_mut().zip(&self.axes) {
            *c = axis.eval(t);
        }
        p
    }

    /// Tangent (first derivative) at parameter `t`.
    pub fn tangent(&self, t: f64) -> [f64; 3] {
        let mut v = [0.0; 3];
        for (c, axis) in v.iter_mut().zip(&self.axes) {
            *c = axis.derivative(t);
        }
        v
    }

    /// Sample `nsamples` points per segment, both segment ends included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `nsamples < 2`.
    pub fn sample_points(&self, nsamples: usize) -> Result<PointList> {
        check_nsamples(nsamples)?;
        let naxes = self.dim.axes();
        let mut list =
            PointList::with_capacity(self.dim, ListKind::Binary, self.segments() * nsamples);
        for seg in 0..self.segments() {
            for t in segment_params(seg, nsamples) {
                list.push(&self.eval(t)[..naxes])?;
            }
        }
        Ok(list)
    }

    /// Unit tangents at `nsamples` parameters per segment.
    ///
    /// A vanishing tangent is reported as the zero vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `nsamples < 2`.
    ///
    /// # See also
    ///
    /// Pink: `ldrawdirtangents3dlist()` in `ldraw.c`
    pub fn sample_tangents(&self, nsamples: usize) -> Result<VectorList> {
        check_nsamples(nsamples)?;
        let mut list = VectorList::new(self.dim);
        for seg in 0..self.segments() {
            for t in segment_params(seg, nsamples) {
                list.push(normalize(self.tangent(t)));
            }
        }
        Ok(list)
    }
}

/// Fit a natural cubic spline through the points of a list.
///
/// The parameter of point `i` is `i`. The value column of valued lists
/// is ignored.
///
/// # Errors
///
/// Returns [`Error::TooFewPoints`] for lists with fewer than 2 points.
///
/// # See also
///
/// Pink: `points2spline.c`
pub fn points2spline(points: &PointList) -> Result<Spline> {
    let n = points.len();
    if n < 2 {
        return Err(Error::TooFewPoints {
            required: 2,
            actual: n,
        });
    }
    let t: Vec<f64> = (0..n).map(|i| i as f64).collect();

    let mut axes = Vec::with_capacity(points.dim().axes());
    for a in 0..points.dim().axes() {
        let y = points.axis(a)?;
        let coeffs = solve_natural_spline(&t, y)?;
        axes.push(AxisSpline::new(y.to_vec(), coeffs)?);
    }
    log::debug!(
        "points2spline: {} control points, {} axes",
        n,
        points.dim().axes()
    );
    Spline::from_axes(points.dim(), axes)
}

fn check_nsamples(nsamples: usize) -> Result<()> {
    if nsamples < 2 {
        return Err(Error::InvalidParameter(format!(
            "nsamples must be >= 2, got {nsamples}"
        )));
    }
    Ok(())
}

/// Equally spaced parameters over segment `seg`, both ends included.
fn segment_params(seg: usize, nsamples: usize) -> impl Iterator<Item = f64> {
    let t1 = seg as f64;
    let step = 1.0 / (nsamples - 1) as f64;
    (0..nsamples).map(move |k| t1 + k as f64 * step)
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if norm == 0.0 {
        [0.0; 3]
    } else {
        [v[0] / norm, v[1] / norm, v[2] / norm]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn list_2d(points: &[(f64, f64)]) -> PointList {
        let mut pl = PointList::new(Dim::Two, ListKind::Binary);
        for &(x, y) in points {
            pl.push(&[x, y]).unwrap();
        }
        pl
    }

    #[test]
    fn test_points2spline_interpolates() {
        let pl = list_2d(&[(0.0, 0.0), (10.0, 5.0), (20.0, -3.0), (25.0, 8.0)]);
        let sp = points2spline(&pl).unwrap();
        assert_eq!(sp.len(), 4);
        assert_eq!(sp.segments(), 3);
        for (i, p) in pl.iter().enumerate() {
            let q = sp.eval(i as f64);
            assert!((q[0] - p.coords[0]).abs() < EPS);
            assert!((q[1] - p.coords[1]).abs() < EPS);
        }
        assert_eq!(sp.control_points().unwrap(), pl);
    }

    #[test]
    fn test_points2spline_3d_line() {
        let mut pl = PointList::new(Dim::Three, ListKind::Binary);
        pl.push(&[1.0, 2.0, 3.0]).unwrap();
        pl.push(&[4.0, 6.0, 8.0]).unwrap();
        let sp = points2spline(&pl).unwrap();
        assert_eq!(sp.axis(0).unwrap().coeffs(), &[[1.0, 3.0, 0.0, 0.0]]);
        assert_eq!(sp.axis(1).unwrap().coeffs(), &[[2.0, 4.0, 0.0, 0.0]]);
        assert_eq!(sp.axis(2).unwrap().coeffs(), &[[3.0, 5.0, 0.0, 0.0]]);
        assert_eq!(sp.control_points().unwrap(), pl);
    }

    #[test]
    fn test_points2spline_ignores_values() {
        let mut valued = PointList::new(Dim::Two, ListKind::Valued);
        valued.push_valued(&[0.0, 0.0], 1.0).unwrap();
        valued.push_valued(&[1.0, 2.0], 99.0).unwrap();
        let a = points2spline(&valued).unwrap();
        let b = points2spline(&valued.to_binary()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_points2spline_too_few() {
        let pl = list_2d(&[(1.0, 1.0)]);
        assert!(matches!(
            points2spline(&pl),
            Err(Error::TooFewPoints {
                required: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_eval_clamps() {
        let sp = points2spline(&list_2d(&[(0.0, 0.0), (2.0, 4.0)])).unwrap();
        assert_eq!(sp.eval(-1.0), [0.0, 0.0, 0.0]);
        assert_eq!(sp.eval(5.0), [2.0, 4.0, 0.0]);
        assert_eq!(sp.eval(0.5), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_sample_tangents_of_line() {
        let sp = points2spline(&list_2d(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)])).unwrap();
        let tangents = sp.sample_tangents(crate::NSAMPLES).unwrap();
        assert_eq!(tangents.len(), 2 * crate::NSAMPLES);
        assert_eq!(tangents.dim(), Dim::Two);
        for v in tangents.vectors() {
            assert!((v[0] - 0.6).abs() < EPS);
            assert!((v[1] - 0.8).abs() < EPS);
            assert_eq!(v[2], 0.0);
        }
        assert!(sp.sample_tangents(1).is_err());
    }

    #[test]
    fn test_sample_points_hits_knots() {
        let pl = list_2d(&[(0.0, 0.0), (1.0, 3.0), (4.0, 1.0)]);
        let sp = points2spline(&pl).unwrap();
        let samples = sp.sample_points(5).unwrap();
        assert_eq!(samples.len(), 10);
        let last = samples.get(9).unwrap();
        assert!((last.coords[0] - 4.0).abs() < EPS);
        assert!((last.coords[1] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_from_axes_validation() {
        let x = AxisSpline::new(vec![0.0, 1.0], vec![[0.0, 1.0, 0.0, 0.0]]).unwrap();
        assert!(Spline::from_axes(Dim::Three, vec![x.clone(), x.clone()]).is_err());
        assert!(AxisSpline::new(vec![0.0, 1.0], vec![]).is_err());
        assert!(AxisSpline::new(vec![0.0], vec![]).is_err());
        let y = AxisSpline::new(
            vec![0.0, 1.0, 2.0],
            vec![[0.0, 1.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]],
        )
        .unwrap();
        assert!(Spline::from_axes(Dim::Two, vec![x, y]).is_err());
    }
}
