//! Error types for OxiCRC operations.
//!
//! Only construction of an engine can fail. Updating, resetting and reading
//! a checksum are infallible once a [`Crc`](crate::Crc) exists. The I/O
//! adapters add a pass-through variant for errors raised by the wrapped
//! reader or writer.

use std::io;
use thiserror::Error;

/// The main error type for OxiCRC operations.
#[derive(Debug, Error)]
pub enum CrcError {
    /// Register width outside the supported range.
    #[error("Invalid CRC width: {width} bits (supported: {min}..={max})")]
    InvalidWidth {
        /// The rejected width.
        width: u8,
        /// Smallest supported width.
        min: u8,
        /// Largest supported width.
        max: u8,
    },

    /// A required construction parameter was not supplied.
    #[error("Missing required CRC parameter: {name}")]
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
    },

    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for OxiCRC operations.
pub type Result<T> = std::result::Result<T, CrcError>;

impl CrcError {
    /// Create an invalid width error.
    pub fn invalid_width(width: u8) -> Self {
        Self::InvalidWidth {
            width,
            min: crate::width::MIN_WIDTH,
            max: crate::width::MAX_WIDTH,
        }
    }

    /// Create a missing parameter error.
    pub fn missing_parameter(name: &'static str) -> Self {
        Self::MissingParameter { name }
    }
}
