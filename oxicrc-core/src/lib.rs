//! # OxiCRC Core
//!
//! A runtime-configurable CRC engine covering CRC-1 through CRC-64.
//!
//! Every CRC variant is described by six parameters (see [`CrcParams`]):
//! width, polynomial, initial remainder, final XOR, and the input/output
//! reflection flags. One engine type, [`Crc`], computes any of them:
//!
//! - [`width`]: validated register widths, masking and bit reflection
//! - [`params`]: parameter sets and the parameter builder
//! - [`table`]: bit-serial reference step and byte lookup tables
//! - [`engine`]: the streaming [`Crc`] engine
//! - [`traits`]: the [`Checksum`] trait
//! - [`io`]: checksumming reader/writer adapters
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust
//! use oxicrc_core::{Crc, CrcParams};
//!
//! // CRC-32 (ISO-HDLC), as used by ZIP, GZIP and PNG
//! let params = CrcParams::new(32, 0x04C1_1DB7)
//!     .with_initial_remainder(0xFFFF_FFFF)
//!     .with_final_xor(0xFFFF_FFFF)
//!     .with_reflect_input(true)
//!     .with_reflect_output(true);
//!
//! let mut crc = Crc::new(params).unwrap();
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.checksum(), 0xCBF43926);
//!
//! // CRC-8, one-shot
//! assert_eq!(Crc::compute(CrcParams::new(8, 0x07), b"123456789").unwrap(), 0xF4);
//! ```
//!
//! ## Concurrency
//!
//! A [`Crc`] is plain data: `Send`, `Sync` and `Clone`, with no internal
//! locking. Use one engine per stream; share one across threads only behind
//! your own lock.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod error;
pub mod io;
pub mod params;
pub mod table;
pub mod traits;
pub mod width;

#[cfg(feature = "async-io")]
pub mod async_io;

// Re-exports for convenience
pub use engine::Crc;
pub use error::{CrcError, Result};
pub use io::{ChecksumReader, ChecksumWriter, checksum_reader};
pub use params::{CrcParams, CrcParamsBuilder};
pub use traits::Checksum;
pub use width::{MAX_WIDTH, MIN_WIDTH, Width, mask, reflect};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::Crc;
    pub use crate::error::{CrcError, Result};
    pub use crate::params::CrcParams;
    pub use crate::traits::Checksum;
    pub use crate::width::Width;
}
