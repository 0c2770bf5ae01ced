//! PointList, VectorList - Coordinate lists
//!
//! Lists of 2D or 3D floating-point coordinates, used as spline control
//! points and as the output of tangent sampling.
//!
//! # Storage layout
//!
//! Coordinates are stored as one vector per axis (SoA layout), so a
//! spline solver can take a single axis as a slice.
//!
//! # See also
//!
//! Pink: `mcgeo.h`, list file formats read by `readimage`

mod serial;

use crate::error::{Error, Result};

/// Number of spatial dimensions of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    /// x, y
    Two,
    /// x, y, z
    Three,
}

impl Dim {
    /// Number of coordinate axes.
    #[inline]
    pub fn axes(self) -> usize {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }
}

/// Whether each point carries an extra value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListKind {
    /// Coordinates only (`b`, `B`)
    #[default]
    Binary,
    /// Coordinates followed by a value (`n`, `N`)
    Valued,
}

/// A single point read from a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Coordinates; `z` is 0 for 2D lists
    pub coords: [f64; 3],
    /// Value column of valued lists
    pub value: Option<f64>,
}

/// List of points.
///
/// # See also
///
/// Pink: list formats `b`/`e`, `n`, `B`, `N`
#[derive(Debug, Clone, PartialEq)]
pub struct PointList {
    dim: Dim,
    kind: ListKind,
    /// One coordinate vector per axis
    axes: Vec<Vec<f64>>,
    /// Per-point values, empty for binary lists
    values: Vec<f64>,
}

impl PointList {
    /// Create a new empty list.
    pub fn new(dim: Dim, kind: ListKind) -> Self {
        Self::with_capacity(dim, kind, 0)
    }

    /// Create a list with pre-allocated capacity.
    pub fn with_capacity(dim: Dim, kind: ListKind, capacity: usize) -> Self {
        Self {
            dim,
            kind,
            axes: (0..dim.axes())
                .map(|_| Vec::with_capacity(capacity))
                .collect(),
            values: match kind {
                ListKind::Binary => Vec::new(),
                ListKind::Valued => Vec::with_capacity(capacity),
            },
        }
    }

    /// Create a binary list from per-axis coordinate vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of axes is not 2 or 3, or if the
    /// axes have different lengths.
    pub fn from_axes(axes: Vec<Vec<f64>>) -> Result<Self> {
        let dim = match axes.len() {
            2 => Dim::Two,
            3 => Dim::Three,
            n => {
                return Err(Error::InvalidParameter(format!(
                    "a point list has 2 or 3 axes, got {n}"
                )));
            }
        };
        let n = axes[0].len();
        if axes.iter().any(|a| a.len() != n) {
            return Err(Error::InvalidParameter(
                "axes must have the same length".to_string(),
            ));
        }
        Ok(Self {
            dim,
            kind: ListKind::Binary,
            axes,
            values: Vec::new(),
        })
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline]
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes[0].len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a point to a binary list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `coords` has the wrong length,
    /// or [`Error::InvalidParameter`] if the list is valued.
    pub fn push(&mut self, coords: &[f64]) -> Result<()> {
        if self.kind == ListKind::Valued {
            return Err(Error::InvalidParameter(
                "valued list needs push_valued".to_string(),
            ));
        }
        self.push_coords(coords)
    }

    /// Add a point with its value to a valued list.
    pub fn push_valued(&mut self, coords: &[f64], value: f64) -> Result<()> {
        if self.kind == ListKind::Binary {
            return Err(Error::InvalidParameter(
                "binary list has no value column".to_string(),
            ));
        }
        self.push_coords(coords)?;
        self.values.push(value);
        Ok(())
    }

    fn push_coords(&mut self, coords: &[f64]) -> Result<()> {
        if coords.len() != self.dim.axes() {
            return Err(Error::DimensionMismatch {
                expected: self.dim.axes(),
                actual: coords.len(),
            });
        }
        for (axis, &c) in self.axes.iter_mut().zip(coords) {
            axis.push(c);
        }
        Ok(())
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<Point> {
        (index < self.len()).then(|| self.point_at(index))
    }

    fn point_at(&self, index: usize) -> Point {
        let mut coords = [0.0; 3];
        for (c, axis) in coords.iter_mut().zip(&self.axes) {
            *c = axis[index];
        }
        Point {
            coords,
            value: self.values.get(index).copied(),
        }
    }

    /// Coordinates along one axis (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for an axis the list doesn't have.
    pub fn axis(&self, axis: usize) -> Result<&[f64]> {
        self.axes
            .get(axis)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfBounds {
                index: axis,
                len: self.axes.len(),
            })
    }

    /// Per-point values; empty for binary lists.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over points.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        (0..self.len()).map(move |i| self.point_at(i))
    }

    /// Bounding box as `(min, max)` per axis, or `None` if empty.
    pub fn bounds(&self) -> Option<Vec<(f64, f64)>> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.axes
                .iter()
                .map(|a| {
                    a.iter()
                        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                            (lo.min(v), hi.max(v))
                        })
                })
                .collect(),
        )
    }

    /// Drop the value column, keeping only coordinates.
    pub fn to_binary(&self) -> PointList {
        Self {
            dim: self.dim,
            kind: ListKind::Binary,
            axes: self.axes.clone(),
            values: Vec::new(),
        }
    }
}

/// List of vectors (`v` / `V` format).
///
/// # See also
///
/// Pink: vector list written by `drawsplinesorient2`
#[derive(Debug, Clone, PartialEq)]
pub struct VectorList {
    dim: Dim,
    vectors: Vec<[f64; 3]>,
}

impl VectorList {
    pub fn new(dim: Dim) -> Self {
        Self {
            dim,
            vectors: Vec::new(),
        }
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Add a vector; for 2D lists the z component is ignored and stored as 0.
    pub fn push(&mut self, v: [f64; 3]) {
        let v = match self.dim {
            Dim::Two => [v[0], v[1], 0.0],
            Dim::Three => v,
        };
        self.vectors.push(v);
    }

    pub fn get(&self, index: usize) -> Option<[f64; 3]> {
        self.vectors.get(index).copied()
    }

    pub fn vectors(&self) -> &[[f64; 3]] {
        &self.vectors
    }

    /// Append all vectors of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn extend_from(&mut self, other: &VectorList) -> Result<()> {
        if other.dim != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim.axes(),
                actual: other.dim.axes(),
            });
        }
        self.vectors.extend_from_slice(&other.vectors);
        Ok(())
    }
}
