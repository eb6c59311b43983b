//! Pass-through readers and writers that checksum the bytes they move.
//!
//! These let a CRC ride along with an existing I/O pipeline: wrap the
//! reader or writer, move the data as usual, then read the checksum.
//!
//! ```
//! use oxicrc_core::io::ChecksumWriter;
//! use oxicrc_core::{Crc, CrcParams};
//! use std::io::Write;
//!
//! let crc = Crc::new(CrcParams::new(8, 0x07)).unwrap();
//! let mut writer = ChecksumWriter::new(Vec::new(), crc);
//! writer.write_all(b"123456789").unwrap();
//! assert_eq!(writer.checksum(), 0xF4);
//! let (bytes, _crc) = writer.into_parts();
//! assert_eq!(bytes, b"123456789");
//! ```

use crate::error::Result;
use crate::traits::Checksum;
use std::io::{self, BufRead, Read, Write};

/// Default buffer size when draining a reader (32KB).
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// A reader that checksums every byte read through it.
#[derive(Debug)]
pub struct ChecksumReader<R, C> {
    inner: R,
    checksum: C,
    bytes: u64,
}

impl<R: Read, C: Checksum> ChecksumReader<R, C> {
    /// Wrap `inner`, feeding everything read into `checksum`.
    pub fn new(inner: R, checksum: C) -> Self {
        Self {
            inner,
            checksum,
            bytes: 0,
        }
    }

    /// Checksum of all bytes read so far.
    pub fn checksum(&self) -> u64 {
        self.checksum.checksum()
    }

    /// Number of bytes read so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes
    }

    /// Get a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the wrapper and return the reader and checksum state.
    pub fn into_parts(self) -> (R, C) {
        (self.inner, self.checksum)
    }
}

impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.checksum.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }
}

/// A writer that checksums every byte accepted by the inner writer.
#[derive(Debug)]
pub struct ChecksumWriter<W, C> {
    inner: W,
    checksum: C,
    bytes: u64,
}

impl<W: Write, C: Checksum> ChecksumWriter<W, C> {
    /// Wrap `inner`, feeding everything written into `checksum`.
    pub fn new(inner: W, checksum: C) -> Self {
        Self {
            inner,
            checksum,
            bytes: 0,
        }
    }

    /// Checksum of all bytes written so far.
    pub fn checksum(&self) -> u64 {
        self.checksum.checksum()
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the wrapper and return the writer and checksum state.
    pub fn into_parts(self) -> (W, C) {
        (self.inner, self.checksum)
    }
}

impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Only the bytes the inner writer accepted count
        let n = self.inner.write(buf)?;
        self.checksum.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Drain `reader` into `checksum` and return the final checksum.
///
/// The checksum is not reset first, so this continues any computation
/// already in progress.
///
/// # Errors
///
/// Returns [`CrcError::Io`](crate::CrcError::Io) if reading fails.
pub fn checksum_reader<R, C>(reader: R, checksum: &mut C) -> Result<u64>
where
    R: Read,
    C: Checksum + ?Sized,
{
    let mut reader = io::BufReader::with_capacity(DEFAULT_BUFFER_SIZE, reader);
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if chunk.is_empty() {
            break;
        }
        let n = chunk.len();
        checksum.update(chunk);
        reader.consume(n);
    }
    Ok(checksum.checksum())
}
