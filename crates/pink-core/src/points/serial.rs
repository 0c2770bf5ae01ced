//! Serialization for PointList and VectorList
//!
//! Text-based serialization format compatible with Pink.
//!
//! # PointList format
//!
//! ```text
//! b N          (2D; `e` is accepted as an alias on read)
//! x0 y0
//! ...
//! n N          (2D valued)
//! x0 y0 v0
//! B N          (3D)
//! x0 y0 z0
//! N N          (3D valued)
//! x0 y0 z0 v0
//! ```
//!
//! # VectorList format
//!
//! ```text
//! v N          (2D) / V N (3D)
//! vx0 vy0 [vz0]
//! ...
//! ```

use crate::error::{Error, Result};
use crate::points::{Dim, ListKind, PointList, VectorList};
use crate::text::{Tokens, read_limited, write_record};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

impl PointList {
    /// Map a file type tag to its dimension and kind.
    pub fn format_of_tag(tag: char) -> Option<(Dim, ListKind)> {
        match tag {
            'b' => Some((Dim::Two, ListKind::Binary)),
            'n' => Some((Dim::Two, ListKind::Valued)),
            'B' => Some((Dim::Three, ListKind::Binary)),
            'N' => Some((Dim::Three, ListKind::Valued)),
            _ => None,
        }
    }

    /// Type tag written in the file header.
    pub fn tag(&self) -> char {
        match (self.dim(), self.kind()) {
            (Dim::Two, ListKind::Binary) => 'b',
            (Dim::Two, ListKind::Valued) => 'n',
            (Dim::Three, ListKind::Binary) => 'B',
            (Dim::Three, ListKind::Valued) => 'N',
        }
    }

    /// Read a point list from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let buf = read_limited(reader)?;
        Self::read_from_bytes(&buf)
    }

    /// Read a point list from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::read_from_reader(&mut BufReader::new(file))
    }

    /// Read a point list from a byte slice.
    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        let mut tokens = Tokens::new(data)?;
        let (tag, n) = tokens.header()?;
        let (dim, kind) = Self::format_of_tag(tag)
            .ok_or_else(|| Error::DecodeError(format!("bad point list type: '{tag}'")))?;

        let mut list = Self::with_capacity(dim, kind, n);
        for _ in 0..n {
            let coords = tokens.reals(dim.axes())?;
            match kind {
                ListKind::Binary => list.push(&coords)?,
                ListKind::Valued => {
                    let value = tokens.real()?;
                    list.push_valued(&coords, value)?;
                }
            }
        }
        tokens.finish()?;
        Ok(list)
    }

    /// Write a point list to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{} {}", self.tag(), self.len())?;
        let naxes = self.dim().axes();
        let mut record = Vec::with_capacity(4);
        for p in self.iter() {
            record.clear();
            record.extend_from_slice(&p.coords[..naxes]);
            record.extend(p.value);
            write_record(writer, &record)?;
        }
        Ok(())
    }

    /// Write a point list to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a point list to a byte vector.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

impl VectorList {
    /// Map a file type tag to its dimension.
    pub fn dim_of_tag(tag: char) -> Option<Dim> {
        match tag {
            'v' => Some(Dim::Two),
            'V' => Some(Dim::Three),
            _ => None,
        }
    }

    pub fn tag(&self) -> char {
        match self.dim() {
            Dim::Two => 'v',
            Dim::Three => 'V',
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
        let (tag, n) = tokens.header()?;
        let dim = Self::dim_of_tag(tag)
            .ok_or_else(|| Error::DecodeError(format!("bad vector list type: '{tag}'")))?;

        let mut list = Self::new(dim);
        for _ in 0..n {
            let mut v = [0.0; 3];
            for c in v.iter_mut().take(dim.axes()) {
                *c = tokens.real()?;
            }
            list.push(v);
        }
        tokens.finish()?;
        Ok(list)
    }

    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{} {}", self.tag(), self.len())?;
        let naxes = self.dim().axes();
        for v in self.vectors() {
            write_record(writer, &v[..naxes])?;
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
