//! Serialization for Spline
//!
//! # Format
//!
//! ```text
//! c N                                  (C for 3D)
//! x0 y0 [z0]                           N control points
//! ...
//! C0X C0Y [C0Z] C1X C1Y [C1Z] C2X C2Y [C2Z] C3X C3Y [C3Z]
//! ...                                  N-1 segments
//! ```
//!
//! # See also
//!
//! Pink: output of `points2spline.c`

use crate::error::{Error, Result};
use crate::points::Dim;
use crate::spline::{AxisSpline, Spline};
use crate::text::{Tokens, read_limited, write_record};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

impl Spline {
    /// Map a file type tag to the spline dimension.
    pub fn dim_of_tag(tag: char) -> Option<Dim> {
        match tag {
            'c' => Some(Dim::Two),
            'C' => Some(Dim::Three),
            _ => None,
        }
    }

    pub fn tag(&self) -> char {
        match self.dim() {
            Dim::Two => 'c',
            Dim::Three => 'C',
        }
    }

    /// Read a spline from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let buf = read_limited(reader)?;
        Self::read_from_bytes(&buf)
    }

    /// Read a spline from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::read_from_reader(&mut BufReader::new(file))
    }

    /// Read a spline from a byte slice.
    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        let mut tokens = Tokens::new(data)?;
        let (tag, n) = tokens.header()?;
        let dim = Self::dim_of_tag(tag)
            .ok_or_else(|| Error::DecodeError(format!("bad spline type: '{tag}'")))?;
        if n < 2 {
            return Err(Error::DecodeError(format!(
                "a spline needs at least 2 control points, got {n}"
            )));
        }
        let naxes = dim.axes();

        let mut control = vec![Vec::with_capacity(n); naxes];
        for _ in 0..n {
            for axis in control.iter_mut() {
                axis.push(tokens.real()?);
            }
        }

        let mut coeffs = vec![Vec::with_capacity(n - 1); naxes];
        for _ in 0..n - 1 {
            let mut seg = vec![[0.0; 4]; naxes];
            for k in 0..4 {
                for c in seg.iter_mut() {
                    c[k] = tokens.real()?;
                }
            }
            for (axis, c) in coeffs.iter_mut().zip(seg) {
                axis.push(c);
            }
        }
        tokens.finish()?;

        let axes = control
            .into_iter()
            .zip(coeffs)
            .map(|(ctrl, co)| AxisSpline::new(ctrl, co))
            .collect::<Result<Vec<_>>>()?;
        Self::from_axes(dim, axes)
    }

    /// Write a spline to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{} {}", self.tag(), self.len())?;
        let axes = self.axes();
        let mut record = Vec::with_capacity(4 * axes.len());
        for i in 0..self.len() {
            record.clear();
            record.extend(axes.iter().map(|a| a.control()[i]));
            write_record(writer, &record)?;
        }
        for seg in 0..self.segments() {
            record.clear();
            for k in 0..4 {
                record.extend(axes.iter().map(|a| a.coeffs()[seg][k]));
            }
            write_record(writer, &record)?;
        }
        Ok(())
    }

    /// Write a spline to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a spline to a byte vector.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::{ListKind, PointList};
    use crate::spline::points2spline;

    #[test]
    fn test_write_2d_line() {
        let mut pl = PointList::new(Dim::Two, ListKind::Binary);
        pl.push(&[0.0, 0.0]).unwrap();
        pl.push(&[2.0, 4.0]).unwrap();
        let sp = points2spline(&pl).unwrap();
        let text = String::from_utf8(sp.write_to_bytes().unwrap()).unwrap();
        assert_eq!(text, "c 2\n0 0\n2 4\n0 0 2 4 0 0 0 0\n");
    }

    #[test]
    fn test_read_3d_coefficient_order() {
        let sp = Spline::read_from_bytes(b"C 2\n1 2 3\n4 6 8\n1 2 3 3 4 5 0 0 0 0 0 0\n").unwrap();
        assert_eq!(sp.dim(), Dim::Three);
        assert_eq!(sp.axis(0).unwrap().coeffs(), &[[1.0, 3.0, 0.0, 0.0]]);
        assert_eq!(sp.axis(1).unwrap().coeffs(), &[[2.0, 4.0, 0.0, 0.0]]);
        assert_eq!(sp.axis(2).unwrap().coeffs(), &[[3.0, 5.0, 0.0, 0.0]]);
        assert_eq!(sp.axis(2).unwrap().control(), &[3.0, 8.0]);
    }

    #[test]
    fn test_fitted_spline_reads_back_identical() {
        let mut pl = PointList::new(Dim::Three, ListKind::Binary);
        for (x, y, z) in [
            (0.0, 0.0, 0.0),
            (10.0, 3.0, 1.0),
            (17.0, 11.0, 4.0),
            (19.0, 25.0, 9.0),
            (12.0, 30.0, 16.0),
        ] {
            pl.push(&[x, y, z]).unwrap();
        }
        let sp = points2spline(&pl).unwrap();
        let restored = Spline::read_from_bytes(&sp.write_to_bytes().unwrap()).unwrap();
        assert_eq!(restored, sp);
    }

    #[test]
    fn test_read_rejects_short_or_truncated() {
        assert!(Spline::read_from_bytes(b"c 1\n0 0\n").is_err());
        // missing coefficient line
        assert!(Spline::read_from_bytes(b"c 2\n0 0\n2 4\n").is_err());
        assert!(Spline::read_from_bytes(b"b 2\n0 0\n2 4\n").is_err());
    }
}
