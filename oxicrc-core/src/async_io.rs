//! Async I/O support for OxiCRC.
//!
//! Drains a Tokio [`AsyncRead`] into any [`Checksum`]. The engine itself is
//! synchronous and never yields; only the reads are awaited.
//!
//! # Example
//!
//! ```rust,ignore
//! use oxicrc_core::async_io::checksum_async;
//! use oxicrc_core::{Crc, CrcParams};
//!
//! let mut crc = Crc::new(CrcParams::new(8, 0x07))?;
//! let file = tokio::fs::File::open("payload.bin").await?;
//! let value = checksum_async(file, &mut crc).await?;
//! ```
//!
//! # Feature Flag
//!
//! This module is only available when the `async-io` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! oxicrc-core = { version = "0.1.0", features = ["async-io"] }
//! ```

use crate::error::{CrcError, Result};
use crate::io::DEFAULT_BUFFER_SIZE;
use crate::traits::Checksum;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Drain `reader` into `checksum` and return the final checksum.
///
/// # Errors
///
/// Returns [`CrcError::Io`] if reading fails.
pub async fn checksum_async<R, C>(reader: R, checksum: &mut C) -> Result<u64>
where
    R: AsyncRead + Unpin,
    C: Checksum + ?Sized,
{
    checksum_async_with_buffer(reader, checksum, DEFAULT_BUFFER_SIZE).await
}

/// Like [`checksum_async`] with a custom read buffer size.
///
/// A `buffer_size` of zero is treated as one byte.
///
/// # Errors
///
/// Returns [`CrcError::Io`] if reading fails.
pub async fn checksum_async_with_buffer<R, C>(
    mut reader: R,
    checksum: &mut C,
    buffer_size: usize,
) -> Result<u64>
where
    R: AsyncRead + Unpin,
    C: Checksum + ?Sized,
{
    let mut buffer = vec![0u8; buffer_size.max(1)];
    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        checksum.update(&buffer[..n]);
    }
    Ok(checksum.checksum())
}

/// Checksum several streams concurrently, one engine per stream.
///
/// Results are returned in completion order, each paired with the index of
/// its input in `operations`.
pub async fn checksum_concurrent<C, R>(operations: Vec<(C, R)>) -> Vec<(usize, Result<u64>)>
where
    C: Checksum + Send + 'static,
    R: AsyncRead + Unpin + Send + 'static,
{
    use tokio::task::JoinSet;

    let mut join_set = JoinSet::new();

    for (index, (mut checksum, reader)) in operations.into_iter().enumerate() {
        join_set.spawn(async move { (index, checksum_async(reader, &mut checksum).await) });
    }

    let mut results = Vec::new();
    while let Some(result) = join_set.join_next().await {
        match result {
            Ok(inner_result) => results.push(inner_result),
            Err(e) => {
                tracing::debug!(error = %e, "checksum task failed to join");
                results.push((
                    usize::MAX,
                    Err(CrcError::Io(std::io::Error::other(e.to_string()))),
                ));
            }
        }
    }

    results
}
