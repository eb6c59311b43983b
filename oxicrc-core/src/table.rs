//! Bit-serial CRC step and the byte lookup table derived from it.
//!
//! The bit-serial form is the reference: it handles every width from 1 to
//! 64 and is what the table is generated from. For registers of at least
//! 8 bits a 256-entry table lets [`Crc`](crate::Crc) fold a whole byte per
//! lookup with identical results.
//!
//! Both forms are MSB-first over a non-reflected register. Input
//! reflection is applied to each byte by the caller beforehand, and output
//! reflection happens only when the checksum is read, so one table serves
//! all four reflection combinations.

use crate::width::Width;

/// Number of entries in a byte table.
pub const TABLE_SIZE: usize = 256;

/// Smallest width the table-driven path supports.
pub const MIN_TABLE_WIDTH: u8 = 8;

/// Fold one byte into `register`, one bit at a time, MSB first.
///
/// `register` and `polynomial` must already be truncated to `width`.
#[inline]
pub fn update_byte_bitwise(register: u64, byte: u8, polynomial: u64, width: Width) -> u64 {
    let top = width.top_bit();
    let mask = width.mask();
    let mut reg = register;

    for shift in (0..8).rev() {
        let bit = (byte >> shift) & 1;
        let feedback = (reg & top != 0) ^ (bit != 0);
        reg = (reg << 1) & mask;
        if feedback {
            reg ^= polynomial;
        }
    }

    reg
}

/// Byte lookup table for one polynomial at one width.
#[derive(Clone)]
pub struct CrcTable {
    entries: Box<[u64; TABLE_SIZE]>,
    width: Width,
}

impl CrcTable {
    /// Build the table, or `None` when `width` is below 8 bits.
    ///
    /// Entry `i` is the register after feeding byte `i` into a register
    /// holding `i` in its top byte and zeros elsewhere, i.e. the bit-serial
    /// result for a zero register and input byte `i`.
    pub fn new(polynomial: u64, width: Width) -> Option<Self> {
        if width.bits() < MIN_TABLE_WIDTH {
            return None;
        }

        let polynomial = width.truncate(polynomial);
        let mut entries = Box::new([0u64; TABLE_SIZE]);
        for (byte, entry) in entries.iter_mut().enumerate() {
            *entry = update_byte_bitwise(0, byte as u8, polynomial, width);
        }

        Some(Self { entries, width })
    }

    /// Table entry for `index`.
    #[inline(always)]
    pub fn entry(&self, index: u8) -> u64 {
        self.entries[index as usize]
    }

    /// Fold one byte into `register` with a single lookup.
    #[inline(always)]
    pub fn update_byte(&self, register: u64, byte: u8) -> u64 {
        let shift = self.width.bits() as u32 - 8;
        let index = ((register >> shift) as u8) ^ byte;
        ((register << 8) & self.width.mask()) ^ self.entries[index as usize]
    }

    /// Width this table was built for.
    pub fn width(&self) -> Width {
        self.width
    }
}

impl std::fmt::Debug for CrcTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrcTable")
            .field("width", &self.width.bits())
            .field("entry_1", &format_args!("{:#x}", self.entries[1]))
            .finish_non_exhaustive()
    }
}
