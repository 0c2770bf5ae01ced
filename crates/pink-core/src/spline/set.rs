//! SplineSet - several control-point sequences in one file
//!
//! # Format
//!
//! ```text
//! d M                                   (D for 3D)
//! k1  x11 y11 [z11]  x12 y12 [z12] ...
//! k2  x21 y21 [z21] ...
//! ...
//! ```
//!
//! # See also
//!
//! Pink: `drawsplinesorient2.c`

use crate::error::{Error, Result};
use crate::points::{Dim, ListKind, PointList, VectorList};
use crate::spline::{Spline, points2spline};
use crate::text::{Tokens, read_limited, write_record};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Set of splines, each given by its control points.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSet {
    dim: Dim,
    splines: Vec<PointList>,
}

impl SplineSet {
    pub fn new(dim: Dim) -> Self {
        Self {
            dim,
            splines: Vec::new(),
        }
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    /// Number of splines.
    #[inline]
    pub fn len(&self) -> usize {
        self.splines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.splines.is_empty()
    }

    /// Add the control points of one spline.
    ///
    /// Valued lists are stored without their value column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn push(&mut self, points: PointList) -> Result<()> {
        if points.dim() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim.axes(),
                actual: points.dim().axes(),
            });
        }
        let points = match points.kind() {
            ListKind::Binary => points,
            ListKind::Valued => points.to_binary(),
        };
        self.splines.push(points);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&PointList> {
        self.splines.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointList> {
        self.splines.iter()
    }

    /// Fit every spline of the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewPoints`] if a spline has fewer than 2 points.
    pub fn fit(&self) -> Result<Vec<Spline>> {
        self.splines.iter().map(points2spline).collect()
    }

    /// Unit tangents of all splines, `nsamples` per segment, concatenated
    /// in file order.
    ///
    /// # See also
    ///
    /// Pink: `drawsplinesorient2.c`
    pub fn orientations(&self, nsamples: usize) -> Result<VectorList> {
        let mut out = VectorList::new(self.dim);
        for (i, spline) in self.fit()?.iter().enumerate() {
            let tangents = spline.sample_tangents(nsamples)?;
            log::debug!("spline {}: {} tangent samples", i, tangents.len());
            out.extend_from(&tangents)?;
        }
        Ok(out)
    }

    pub fn dim_of_tag(tag: char) -> Option<Dim> {
        match tag {
            'd' => Some(Dim::Two),
            'D' => Some(Dim::Three),
            _ => None,
        }
    }

    pub fn tag(&self) -> char {
        match self.dim {
            Dim::Two => 'd',
            Dim::Three => 'D',
        }
    }

    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let buf = read_limited(reader)?;
        Self::read_from_bytes(&buf)
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::read_from_reader(&mut BufReader::new(file))
    }

    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        let mut tokens = Tokens::new(data)?;
        let (tag, m) = tokens.header()?;
        let dim = Self::dim_of_tag(tag)
            .ok_or_else(|| Error::DecodeError(format!("bad spline set type: '{tag}'")))?;

        let mut set = Self::new(dim);
        for _ in 0..m {
            let k = tokens.count()?;
            let mut points = PointList::with_capacity(dim, ListKind::Binary, k);
            for _ in 0..k {
                points.push(&tokens.reals(dim.axes())?)?;
            }
            set.splines.push(points);
        }
        tokens.finish()?;
        Ok(set)
    }

    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{} {}", self.tag(), self.len())?;
        let naxes = self.dim.axes();
        for points in &self.splines {
            write!(writer, "{} ", points.len())?;
            let record: Vec<f64> = points
                .iter()
                .flat_map(|p| p.coords.into_iter().take(naxes))
                .collect();
            write_record(writer, &record)?;
        }
        Ok(())
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}
