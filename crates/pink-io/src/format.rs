//! File format detection
//!
//! Pink text files start with a one-character type tag; the format is
//! detected from the first non-whitespace byte.

use crate::{IoError, IoResult};
use pink_core::{Dim, ListKind, PointList, Spline, SplineSet, VectorList};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of data held by a Pink text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// `b`/`e`, `n`, `B`, `N`
    PointList(Dim, ListKind),
    /// `c`, `C`
    Spline(Dim),
    /// `d`, `D`
    SplineSet(Dim),
    /// `v`, `V`
    VectorList(Dim),
}

impl FileFormat {
    /// Format announced by a header tag.
    pub fn from_tag(tag: char) -> Option<Self> {
        if let Some((dim, kind)) = PointList::format_of_tag(tag) {
            return Some(Self::PointList(dim, kind));
        }
        Spline::dim_of_tag(tag)
            .map(Self::Spline)
            .or_else(|| SplineSet::dim_of_tag(tag).map(Self::SplineSet))
            .or_else(|| VectorList::dim_of_tag(tag).map(Self::VectorList))
    }

    /// Dimension of the data.
    pub fn dim(self) -> Dim {
        match self {
            Self::PointList(dim, _)
            | Self::Spline(dim)
            | Self::SplineSet(dim)
            | Self::VectorList(dim) => dim,
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::PointList(..) | Self::VectorList(_) => "list",
            Self::Spline(_) => "spline",
            Self::SplineSet(_) => "splines",
        }
    }
}

/// Number of header bytes examined for detection.
const HEADER_PROBE: usize = 64;

/// Detect the file format from a file path.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<FileFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; HEADER_PROBE];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the file format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<FileFormat> {
    let first = data
        .iter()
        .copied()
        .find(|b| !b.is_ascii_whitespace())
        .ok_or_else(|| IoError::InvalidData("empty file".to_string()))?;
    FileFormat::from_tag(first as char).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("unknown type tag '{}'", first.escape_ascii()))
    })
}
