//! Width-correct arithmetic for CRC registers.
//!
//! Every register, polynomial and mask lives in a `u64`, which holds any
//! width from 1 to 64 bits. A [`Width`] is only obtainable through
//! validation, so the helpers here never see a zero or oversized width and
//! never overflow a shift.
//!
//! Reflection is used at two call sites with different bit counts: input
//! bytes are reflected at width 8 ([`Width::BYTE`]) and the final register
//! at the engine's own width.

use crate::error::{CrcError, Result};
use std::fmt;

/// Smallest supported register width in bits.
pub const MIN_WIDTH: u8 = 1;

/// Largest supported register width in bits.
pub const MAX_WIDTH: u8 = 64;

/// A validated CRC register width (1..=64 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Width(u8);

impl Width {
    /// Width of a single input byte.
    pub const BYTE: Self = Self(8);

    /// Validate a bit count.
    ///
    /// # Errors
    ///
    /// Returns [`CrcError::InvalidWidth`] unless `1 <= bits <= 64`.
    pub fn new(bits: u8) -> Result<Self> {
        if (MIN_WIDTH..=MAX_WIDTH).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(CrcError::invalid_width(bits))
        }
    }

    /// Number of bits.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// All-ones mask covering the low `bits` bits.
    #[inline(always)]
    pub const fn mask(self) -> u64 {
        u64::MAX >> (64 - self.0 as u32)
    }

    /// The most significant bit of a register of this width.
    #[inline(always)]
    pub const fn top_bit(self) -> u64 {
        1 << (self.0 as u32 - 1)
    }

    /// Truncate `value` to this width.
    #[inline(always)]
    pub const fn truncate(self, value: u64) -> u64 {
        value & self.mask()
    }

    /// Bit-reverse the low `bits` bits of `value`. Higher bits are ignored.
    #[inline(always)]
    pub const fn reflect(self, value: u64) -> u64 {
        value.reverse_bits() >> (64 - self.0 as u32)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

impl TryFrom<u8> for Width {
    type Error = CrcError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<Width> for u8 {
    fn from(width: Width) -> Self {
        width.0
    }
}

/// `(1 << width) - 1`, without overflow at 64 bits.
#[inline(always)]
pub const fn mask(width: Width) -> u64 {
    width.mask()
}

/// Bit-reversal of the low `width` bits of `value`.
#[inline(always)]
pub const fn reflect(value: u64, width: Width) -> u64 {
    width.reflect(value)
}

/// Reflect a single input byte.
#[inline(always)]
pub const fn reflect_byte(byte: u8) -> u8 {
    Width::BYTE.reflect(byte as u64) as u8
}
