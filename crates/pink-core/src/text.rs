//! Shared helpers for the Pink text formats
//!
//! Every Pink text file is a whitespace-separated token stream that starts
//! with a one-character type tag followed by a record count.

use crate::error::{Error, Result};
use std::io::{Read, Write};

/// Maximum input size in bytes to prevent unbounded memory growth.
pub const MAX_INPUT_SIZE: usize = 100_000_000;

/// Maximum number of records announced by a header.
pub(crate) const MAX_RECORDS: usize = 50_000_000;

/// Read from a reader with a size limit.
///
/// Fails with [`Error::DecodeError`] once more than [`MAX_INPUT_SIZE`]
/// bytes are available.
pub fn read_limited(reader: &mut impl Read) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((MAX_INPUT_SIZE + 1) as u64)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_INPUT_SIZE {
        return Err(Error::DecodeError(format!(
            "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
        )));
    }
    Ok(buf)
}

/// Whitespace tokenizer over a decoded text buffer.
pub(crate) struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::DecodeError(format!("invalid UTF-8: {e}")))?;
        Ok(Self {
            inner: text.split_ascii_whitespace(),
        })
    }

    /// Read the `<tag> <count>` header.
    ///
    /// The tag may be glued to the count (`b3`), as `fscanf("%c %d")`
    /// accepts both.
    pub(crate) fn header(&mut self) -> Result<(char, usize)> {
        let first = self
            .inner
            .next()
            .ok_or_else(|| Error::DecodeError("empty input".to_string()))?;
        let mut chars = first.chars();
        let tag = chars
            .next()
            .ok_or_else(|| Error::DecodeError("missing type tag".to_string()))?;
        let rest = chars.as_str();
        let count = if rest.is_empty() {
            self.count()?
        } else {
            parse_count(rest)?
        };
        Ok((tag, count))
    }

    /// Read a non-negative record count.
    pub(crate) fn count(&mut self) -> Result<usize> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| Error::DecodeError("missing count".to_string()))?;
        parse_count(token)
    }

    /// Read a floating-point value.
    pub(crate) fn real(&mut self) -> Result<f64> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| Error::DecodeError("unexpected end of data".to_string()))?;
        let v = token
            .parse::<f64>()
            .map_err(|e| Error::DecodeError(format!("invalid number '{token}': {e}")))?;
        if !v.is_finite() {
            return Err(Error::DecodeError(format!("non-finite number '{token}'")));
        }
        Ok(v)
    }

    /// Read `n` floating-point values.
    pub(crate) fn reals(&mut self, n: usize) -> Result<Vec<f64>> {
        (0..n).map(|_| self.real()).collect()
    }

    /// Fail if any token is left.
    pub(crate) fn finish(mut self) -> Result<()> {
        match self.inner.next() {
            None => Ok(()),
            Some(token) => Err(Error::DecodeError(format!(
                "trailing data after last record: '{token}'"
            ))),
        }
    }
}

fn parse_count(token: &str) -> Result<usize> {
    let n: i64 = token
        .parse()
        .map_err(|e| Error::DecodeError(format!("invalid count '{token}': {e}")))?;
    if n < 0 {
        return Err(Error::DecodeError(format!("invalid count: {n}")));
    }
    let n = n as usize;
    if n > MAX_RECORDS {
        return Err(Error::DecodeError(format!("too many records: {n}")));
    }
    Ok(n)
}

/// Write one record as space-separated values.
///
/// `f64` `Display` is the shortest representation that parses back to the
/// same bits, so a written file reads back identical.
pub(crate) fn write_record(writer: &mut impl Write, values: &[f64]) -> Result<()> {
    let mut first = true;
    for v in values {
        if !v.is_finite() {
            return Err(Error::EncodeError(format!("non-finite value: {v}")));
        }
        if first {
            write!(writer, "{v}")?;
            first = false;
        } else {
            write!(writer, " {v}")?;
        }
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_separate_and_glued() {
        let mut t = Tokens::new(b"b 3\n").unwrap();
        assert_eq!(t.header().unwrap(), ('b', 3));

        let mut t = Tokens::new(b"C12 ").unwrap();
        assert_eq!(t.header().unwrap(), ('C', 12));
    }

    #[test]
    fn test_header_rejects_negative_count() {
        let mut t = Tokens::new(b"b -1").unwrap();
        assert!(t.header().is_err());
    }

    #[test]
    fn test_finish_detects_trailing_tokens() {
        let mut t = Tokens::new(b"1 2 3").unwrap();
        assert_eq!(t.reals(2).unwrap(), vec![1.0, 2.0]);
        assert!(t.finish().is_err());
    }

    #[test]
    fn test_write_record_shortest_form() {
        let mut buf = Vec::new();
        write_record(&mut buf, &[1.0, -0.5, 0.1]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 -0.5 0.1\n");
    }

    #[test]
    fn test_write_record_rejects_nan() {
        let mut buf = Vec::new();
        assert!(write_record(&mut buf, &[f64::NAN]).is_err());
    }
}
