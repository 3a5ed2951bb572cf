//! Sequential byte cursor
//!
//! Thin reader/writer over a byte stream. All multi-byte primitives are
//! big-endian; strings are a 2-byte byte-count prefix followed by UTF-8.
//! A short read surfaces as `TruncatedStream` rather than a bare IO error,
//! and the whole load aborts on the first failure — there is no
//! resynchronization in this format.

use std::io::{self, Read, Write};

use crate::error::{ProjectError, Result};

/// Longest string the 2-byte length prefix can describe, in UTF-8 bytes.
pub const MAX_UTF_LEN: usize = u16::MAX as usize;

/// Sequential big-endian reader over any `Read` source.
pub struct ByteReader<R: Read> {
    inner: R,
}

impl<R: Read> ByteReader<R> {
    /// Wrap a byte source.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Fill `buf` exactly, translating stream errors into the codec taxonomy.
    fn fill(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        self.inner.read_exact(buf).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => ProjectError::TruncatedStream(format!(
                "unexpected end of stream while reading {}",
                what
            )),
            // A corrupt gzip wrapper surfaces from the decoder as invalid data.
            io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
                ProjectError::Decode(format!("while reading {}: {}", what, e))
            }
            _ => ProjectError::Io(e),
        })
    }

    /// Read one boolean byte. Any nonzero value is `true`.
    pub fn read_bool(&mut self, what: &str) -> Result<bool> {
        Ok(self.read_u8(what)? != 0)
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self, what: &str) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf, what)?;
        Ok(buf[0])
    }

    /// Read one signed byte.
    pub fn read_i8(&mut self, what: &str) -> Result<i8> {
        Ok(self.read_u8(what)? as i8)
    }

    /// Read a big-endian 32-bit signed integer.
    pub fn read_i32(&mut self, what: &str) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, what)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a 4-byte count that must be non-negative.
    pub fn read_len(&mut self, what: &str) -> Result<usize> {
        let n = self.read_i32(what)?;
        if n < 0 {
            return Err(ProjectError::Decode(format!(
                "negative length {} for {}",
                n, what
            )));
        }
        Ok(n as usize)
    }

    /// Read a big-endian 16-bit value.
    pub fn read_u16(&mut self, what: &str) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf, what)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read one UTF-16 code unit as a `char`.
    ///
    /// Surrogate code units cannot stand alone and are a decode error.
    pub fn read_char(&mut self, what: &str) -> Result<char> {
        let unit = self.read_u16(what)?;
        char::from_u32(unit as u32).ok_or_else(|| {
            ProjectError::Decode(format!(
                "surrogate code unit 0x{:04x} for {}",
                unit, what
            ))
        })
    }

    /// Read a length-prefixed UTF-8 string (2-byte byte count + bytes).
    pub fn read_utf(&mut self, what: &str) -> Result<String> {
        let len = self.read_u16(what)? as usize;
        let mut buf = vec![0u8; len];
        self.fill(&mut buf, what)?;
        String::from_utf8(buf)
            .map_err(|e| ProjectError::Decode(format!("invalid UTF-8 in {}: {}", what, e)))
    }

    /// Read `len` raw bytes with no prefix.
    ///
    /// Reads through `take` so a lying length fails as truncation instead of
    /// a giant upfront allocation.
    pub fn read_blob(&mut self, len: usize, what: &str) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let got = (&mut self.inner)
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| match e.kind() {
                // A truncated gzip member reports eof from inside the decoder.
                io::ErrorKind::UnexpectedEof => ProjectError::TruncatedStream(format!(
                    "unexpected end of stream while reading {}",
                    what
                )),
                io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput => {
                    ProjectError::Decode(format!("while reading {}: {}", what, e))
                }
                _ => ProjectError::Io(e),
            })?;
        if got < len {
            return Err(ProjectError::TruncatedStream(format!(
                "{}: expected {} bytes, got {}",
                what, len, got
            )));
        }
        Ok(buf)
    }
}

/// Sequential big-endian writer over any `Write` sink.
pub struct ByteWriter<W: Write> {
    inner: W,
}

impl<W: Write> ByteWriter<W> {
    /// Wrap a byte sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write a boolean as exactly 0 or 1.
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_u8(v as u8)
    }

    /// Write one unsigned byte.
    pub fn write_u8(&mut self, v: u8) -> Result<()> {
        self.inner.write_all(&[v])?;
        Ok(())
    }

    /// Write a big-endian 32-bit signed integer.
    pub fn write_i32(&mut self, v: i32) -> Result<()> {
        self.inner.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    /// Write a `char` as one UTF-16 code unit.
    ///
    /// Code points above U+FFFF need two units and cannot be represented;
    /// passing one is a caller error.
    pub fn write_char(&mut self, c: char) -> Result<()> {
        let code = c as u32;
        if code > u16::MAX as u32 {
            return Err(ProjectError::Encode(format!(
                "character U+{:X} does not fit a single UTF-16 code unit",
                code
            )));
        }
        self.inner.write_all(&(code as u16).to_be_bytes())?;
        Ok(())
    }

    /// Write a length-prefixed UTF-8 string (2-byte byte count + bytes).
    pub fn write_utf(&mut self, s: &str) -> Result<()> {
        let bytes = s.as_bytes();
        if bytes.len() > MAX_UTF_LEN {
            return Err(ProjectError::Encode(format!(
                "string of {} bytes exceeds the {}-byte length prefix limit",
                bytes.len(),
                MAX_UTF_LEN
            )));
        }
        self.inner.write_all(&(bytes.len() as u16).to_be_bytes())?;
        self.inner.write_all(bytes)?;
        Ok(())
    }

    /// Write raw bytes with no prefix.
    pub fn write_blob(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
