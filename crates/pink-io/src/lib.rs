//! pink-io - File I/O for Pink
//!
//! Reads and writes the Pink text formats through a single
//! [`PinkImage`] value, the way Pink's `readimage` / `writeimage` hand
//! back whatever the file contains.
//!
//! # Example
//!
//! ```no_run
//! use pink_io::{points2spline, read_image, write_image};
//!
//! let points = read_image("l2points1.list")?;
//! let spline = points2spline(&points)?;
//! write_image(&spline, "l2points1.spline")?;
//! # Ok::<(), pink_io::IoError>(())
//! ```

mod error;
pub mod format;

pub use error::{IoError, IoResult};
pub use format::{FileFormat, detect_format, detect_format_from_bytes};

use pink_core::{PointList, Spline, SplineSet, VectorList, read_limited};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// In-memory representation of any Pink text file.
///
/// Equality is structural and exact on every coordinate and coefficient.
#[derive(Debug, Clone, PartialEq)]
pub enum PinkImage {
    Points(PointList),
    Spline(Spline),
    SplineSet(SplineSet),
    Vectors(VectorList),
}

impl PinkImage {
    /// Format this value is written in.
    pub fn format(&self) -> FileFormat {
        match self {
            PinkImage::Points(p) => FileFormat::PointList(p.dim(), p.kind()),
            PinkImage::Spline(s) => FileFormat::Spline(s.dim()),
            PinkImage::SplineSet(s) => FileFormat::SplineSet(s.dim()),
            PinkImage::Vectors(v) => FileFormat::VectorList(v.dim()),
        }
    }

    pub fn as_points(&self) -> Option<&PointList> {
        match self {
            PinkImage::Points(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_spline(&self) -> Option<&Spline> {
        match self {
            PinkImage::Spline(s) => Some(s),
            _ => None,
        }
    }
}

impl From<PointList> for PinkImage {
    fn from(p: PointList) -> Self {
        PinkImage::Points(p)
    }
}

impl From<Spline> for PinkImage {
    fn from(s: Spline) -> Self {
        PinkImage::Spline(s)
    }
}

impl From<SplineSet> for PinkImage {
    fn from(s: SplineSet) -> Self {
        PinkImage::SplineSet(s)
    }
}

impl From<VectorList> for PinkImage {
    fn from(v: VectorList) -> Self {
        PinkImage::Vectors(v)
    }
}

/// Read a Pink file, detecting its format from the header tag.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PinkImage> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let data = read_limited(&mut BufReader::new(file))?;
    let image = read_image_mem(&data)?;
    log::debug!("read {:?} from {}", image.format(), path.display());
    Ok(image)
}

/// Read a Pink file from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<PinkImage> {
    let image = match detect_format_from_bytes(data)? {
        FileFormat::PointList(..) => PinkImage::Points(PointList::read_from_bytes(data)?),
        FileFormat::Spline(_) => PinkImage::Spline(Spline::read_from_bytes(data)?),
        FileFormat::SplineSet(_) => PinkImage::SplineSet(SplineSet::read_from_bytes(data)?),
        FileFormat::VectorList(_) => PinkImage::Vectors(VectorList::read_from_bytes(data)?),
    };
    Ok(image)
}

/// Write a Pink file in the format matching the value.
pub fn write_image<P: AsRef<Path>>(image: &PinkImage, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&write_image_mem(image)?)?;
    writer.flush()?;
    log::debug!("wrote {:?} to {}", image.format(), path.display());
    Ok(())
}

/// Serialize a Pink value to memory.
pub fn write_image_mem(image: &PinkImage) -> IoResult<Vec<u8>> {
    let data = match image {
        PinkImage::Points(p) => p.write_to_bytes()?,
        PinkImage::Spline(s) => s.write_to_bytes()?,
        PinkImage::SplineSet(s) => s.write_to_bytes()?,
        PinkImage::Vectors(v) => v.write_to_bytes()?,
    };
    Ok(data)
}

/// Fit a spline through a point list image.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if `image` is not a point list,
/// or the core error if it has fewer than 2 points.
///
/// # See also
///
/// Pink: `points2spline.c`
pub fn points2spline(image: &PinkImage) -> IoResult<PinkImage> {
    let points = image.as_points().ok_or_else(|| {
        IoError::UnsupportedFormat(format!(
            "points2spline needs a point list, got {:?}",
            image.format()
        ))
    })?;
    Ok(PinkImage::Spline(pink_core::points2spline(points)?))
}
