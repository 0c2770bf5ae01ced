//! Pink Core - Basic data structures for point lists and splines
//!
//! This crate provides the fundamental data structures used throughout
//! the Pink library:
//!
//! - [`PointList`] - 2D/3D point lists, optionally carrying a value per point
//! - [`Spline`] - Parametric natural cubic spline through a point list
//! - [`SplineSet`] - Several control-point sequences stored in one file
//! - [`VectorList`] - 2D/3D vector lists (e.g. sampled spline tangents)
//!
//! All of them serialize to the plain-text formats used by the Pink
//! command-line tools (`b`, `B`, `n`, `N`, `c`, `C`, `d`, `D`, `v`, `V`).
//!
//! # See also
//!
//! Pink: `mcgeo.h`, `mcsplines.h`, `points2spline.c`

pub mod error;
pub mod points;
pub mod spline;
mod text;

pub use error::{Error, Result};
pub use points::{Dim, ListKind, Point, PointList, VectorList};
pub use spline::{AxisSpline, Spline, SplineSet, points2spline, solve_natural_spline};
pub use text::{MAX_INPUT_SIZE, read_limited};

/// Number of tangent samples per spline segment.
///
/// # See also
///
/// Pink: `NSAMPLES` in `drawsplinesorient2.c`
pub const NSAMPLES: usize = 10;
