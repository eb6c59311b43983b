//! The runtime-configurable CRC engine.
//!
//! One [`Crc`] type covers every width from 1 to 64 bits. The register is a
//! `u64` kept truncated to the configured width; the width itself is data,
//! not a type parameter.
//!
//! ## Update paths
//!
//! - **Table-driven** (default for width >= 8): a 256-entry table built at
//!   construction, one lookup per input byte.
//! - **Bit-serial**: eight shift/XOR steps per byte. Always used for widths
//!   below 8, and available for any width via [`Crc::bitwise`].
//!
//! Both paths produce identical checksums.

use crate::error::Result;
use crate::params::CrcParams;
use crate::table::{CrcTable, update_byte_bitwise};
use crate::traits::Checksum;
use crate::width::{Width, reflect_byte};
use std::io;

/// Configurable CRC calculator.
///
/// # Example
///
/// ```
/// use oxicrc_core::{Crc, CrcParams};
///
/// // CRC-16/CCITT-FALSE
/// let params = CrcParams::new(16, 0x1021).with_initial_remainder(0xFFFF);
/// let mut crc = Crc::new(params).unwrap();
/// crc.update(b"12345");
/// crc.update(b"6789");
/// assert_eq!(crc.checksum(), 0x29B1);
///
/// crc.reset();
/// assert_eq!(crc.checksum(), 0xFFFF);
/// ```
#[derive(Debug, Clone)]
pub struct Crc {
    params: CrcParams,
    width: Width,
    table: Option<CrcTable>,
    register: u64,
}

impl Crc {
    /// Create a CRC calculator, table-driven when the width allows it.
    ///
    /// `polynomial`, `initial_remainder` and `final_xor` are truncated to
    /// `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`CrcError::InvalidWidth`](crate::CrcError::InvalidWidth) if
    /// `params.width` is outside 1..=64.
    pub fn new(params: CrcParams) -> Result<Self> {
        Self::build(params, true)
    }

    /// Create a CRC calculator that always uses the bit-serial update.
    ///
    /// # Errors
    ///
    /// Returns [`CrcError::InvalidWidth`](crate::CrcError::InvalidWidth) if
    /// `params.width` is outside 1..=64.
    pub fn bitwise(params: CrcParams) -> Result<Self> {
        Self::build(params, false)
    }

    fn build(params: CrcParams, use_table: bool) -> Result<Self> {
        let (width, params) = params.normalize()?;
        let table = if use_table {
            CrcTable::new(params.polynomial, width)
        } else {
            None
        };

        tracing::debug!(
            width = width.bits(),
            polynomial = format_args!("{:#x}", params.polynomial),
            reflect_input = params.reflect_input,
            reflect_output = params.reflect_output,
            table_driven = table.is_some(),
            "constructed CRC engine"
        );

        Ok(Self {
            params,
            width,
            table,
            register: params.initial_remainder,
        })
    }

    /// Compute the checksum of `data` in one call.
    ///
    /// # Errors
    ///
    /// Returns [`CrcError::InvalidWidth`](crate::CrcError::InvalidWidth) if
    /// `params.width` is outside 1..=64.
    pub fn compute(params: CrcParams, data: &[u8]) -> Result<u64> {
        let mut crc = Self::new(params)?;
        crc.update(data);
        Ok(crc.checksum())
    }

    /// Reset the register to the initial remainder.
    pub fn reset(&mut self) {
        tracing::trace!(width = self.width.bits(), "resetting CRC register");
        self.register = self.params.initial_remainder;
    }

    /// Update the CRC with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        let reflect_input = self.params.reflect_input;
        let mut reg = self.register;

        match &self.table {
            Some(table) => {
                for &byte in data {
                    let byte = if reflect_input { reflect_byte(byte) } else { byte };
                    reg = table.update_byte(reg, byte);
                }
            }
            None => {
                let polynomial = self.params.polynomial;
                for &byte in data {
                    let byte = if reflect_input { reflect_byte(byte) } else { byte };
                    reg = update_byte_bitwise(reg, byte, polynomial, self.width);
                }
            }
        }

        self.register = reg;
    }

    /// Get the finalized checksum of everything processed since the last reset.
    ///
    /// Applies output reflection and the final XOR to a copy of the
    /// register; the running state is untouched.
    #[inline]
    pub fn checksum(&self) -> u64 {
        let reg = if self.params.reflect_output {
            self.width.reflect(self.register)
        } else {
            self.register
        };
        self.width.truncate(reg ^ self.params.final_xor)
    }

    /// Raw register contents, before output reflection and final XOR.
    #[inline(always)]
    pub fn register(&self) -> u64 {
        self.register
    }

    /// The normalized (truncated) parameters in use.
    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    /// Register width.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Whether updates go through the byte lookup table.
    pub fn is_table_driven(&self) -> bool {
        self.table.is_some()
    }
}

impl Checksum for Crc {
    fn reset(&mut self) {
        Crc::reset(self);
    }

    fn update(&mut self, data: &[u8]) {
        Crc::update(self, data);
    }

    fn checksum(&self) -> u64 {
        Crc::checksum(self)
    }

    fn width(&self) -> u8 {
        self.width.bits()
    }
}

impl io::Write for Crc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CrcError;

    const CHECK: &[u8] = b"123456789";

    fn crc32_params() -> CrcParams {
        CrcParams::new(32, 0x04C1_1DB7)
            .with_initial_remainder(0xFFFF_FFFF)
            .with_final_xor(0xFFFF_FFFF)
            .with_reflect_input(true)
            .with_reflect_output(true)
    }

    fn ccitt_false_params() -> CrcParams {
        CrcParams::new(16, 0x1021).with_initial_remainder(0xFFFF)
    }

    #[test]
    fn test_crc32_check() {
        assert_eq!(Crc::compute(crc32_params(), CHECK).unwrap(), 0xCBF4_3926);
    }

    #[test]
    fn test_crc16_ccitt_false_check() {
        assert_eq!(Crc::compute(ccitt_false_params(), CHECK).unwrap(), 0x29B1);
    }

    #[test]
    fn test_crc8_check() {
        assert_eq!(Crc::compute(CrcParams::new(8, 0x07), CHECK).unwrap(), 0xF4);
    }

    #[test]
    fn test_crc32_hello_world() {
        assert_eq!(
            Crc::compute(crc32_params(), b"Hello, World!").unwrap(),
            0xEC4A_C3D0
        );
    }

    #[test]
    fn test_crc32_incremental() {
        let mut crc = Crc::new(crc32_params()).unwrap();
        crc.update(b"Hello");
        crc.update(b", ");
        crc.update(b"World!");
        assert_eq!(crc.checksum(), 0xEC4A_C3D0);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut crc = Crc::new(crc32_params()).unwrap();
        crc.update(b"1234");
        let before = crc.register();
        crc.update(b"");
        assert_eq!(crc.register(), before);
        crc.update(b"56789");
        assert_eq!(crc.checksum(), 0xCBF4_3926);
    }

    #[test]
    fn test_empty_input_checksum() {
        // Reflected init then final XOR: reflect(0xFFFFFFFF) ^ 0xFFFFFFFF = 0
        assert_eq!(Crc::new(crc32_params()).unwrap().checksum(), 0);
        assert_eq!(Crc::new(ccitt_false_params()).unwrap().checksum(), 0xFFFF);

        let params = CrcParams::new(16, 0x1021)
            .with_initial_remainder(0x0001)
            .with_final_xor(0x00F0)
            .with_reflect_output(true);
        assert_eq!(Crc::new(params).unwrap().checksum(), 0x8000 ^ 0x00F0);
    }

    #[test]
    fn test_checksum_does_not_mutate() {
        let mut crc = Crc::new(crc32_params()).unwrap();
        crc.update(b"12345");
        let first = crc.checksum();
        assert_eq!(crc.checksum(), first);
        crc.update(b"6789");
        assert_eq!(crc.checksum(), 0xCBF4_3926);
    }

    #[test]
    fn test_reset() {
        let mut crc = Crc::new(ccitt_false_params()).unwrap();
        crc.update(b"garbage that must be discarded");
        crc.reset();
        assert_eq!(crc.register(), 0xFFFF);
        crc.update(CHECK);
        assert_eq!(crc.checksum(), 0x29B1);
    }

    #[test]
    fn test_invalid_width() {
        for width in [0u8, 65, 128, 255] {
            let err = Crc::new(CrcParams::new(width, 0x07)).unwrap_err();
            assert!(
                matches!(err, CrcError::InvalidWidth { width: w, .. } if w == width),
                "width {width}"
            );
            assert!(Crc::bitwise(CrcParams::new(width, 0x07)).is_err());
            assert!(Crc::compute(CrcParams::new(width, 0x07), CHECK).is_err());
        }
    }

    #[test]
    fn test_params_truncated_at_construction() {
        let crc = Crc::new(
            CrcParams::new(8, 0xFF07)
                .with_initial_remainder(0x1FF)
                .with_final_xor(0x100),
        )
        .unwrap();
        assert_eq!(crc.params().polynomial, 0x07);
        assert_eq!(crc.params().initial_remainder, 0xFF);
        assert_eq!(crc.params().final_xor, 0x00);
        assert_eq!(crc.register(), 0xFF);

        // Truncated parameters behave exactly like in-range ones
        let wide = Crc::compute(CrcParams::new(8, 0xABCD_0007), CHECK).unwrap();
        assert_eq!(wide, 0xF4);
    }

    #[test]
    fn test_table_selection() {
        assert!(Crc::new(CrcParams::new(8, 0x07)).unwrap().is_table_driven());
        assert!(Crc::new(CrcParams::new(64, 0x1B)).unwrap().is_table_driven());
        assert!(!Crc::new(CrcParams::new(7, 0x09)).unwrap().is_table_driven());
        assert!(!Crc::bitwise(CrcParams::new(32, 0x1B)).unwrap().is_table_driven());
    }

    #[test]
    fn test_bitwise_matches_table() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        for params in [
            crc32_params(),
            ccitt_false_params(),
            CrcParams::new(8, 0x07),
            CrcParams::new(24, 0x86_4CFB).with_initial_remainder(0xB7_04CE),
            CrcParams::new(12, 0x80F).with_reflect_output(true),
        ] {
            let mut table = Crc::new(params).unwrap();
            let mut bitwise = Crc::bitwise(params).unwrap();
            table.update(&data);
            bitwise.update(&data);
            assert_eq!(table.checksum(), bitwise.checksum(), "{params:?}");
        }
    }

    #[test]
    fn test_io_write() {
        use std::io::Write;

        let mut crc = Crc::new(crc32_params()).unwrap();
        crc.write_all(b"1234").unwrap();
        write!(crc, "56789").unwrap();
        crc.flush().unwrap();
        assert_eq!(crc.checksum(), 0xCBF4_3926);
    }

    #[test]
    fn test_io_copy() {
        let mut crc = Crc::new(crc32_params()).unwrap();
        let mut input = std::io::Cursor::new(CHECK);
        let copied = std::io::copy(&mut input, &mut crc).unwrap();
        assert_eq!(copied, 9);
        assert_eq!(crc.checksum(), 0xCBF4_3926);
    }

    #[test]
    fn test_checksum_trait() {
        let mut crc: Box<dyn Checksum> = Box::new(Crc::new(CrcParams::new(8, 0x07)).unwrap());
        assert_eq!(crc.width(), 8);
        assert_eq!(crc.checksum_of(CHECK), 0xF4);
        // checksum_of resets first
        assert_eq!(crc.checksum_of(CHECK), 0xF4);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Crc::new(crc32_params()).unwrap();
        a.update(b"1234");
        let mut b = a.clone();
        a.update(b"56789");
        b.update(b"xxxxx");
        assert_eq!(a.checksum(), 0xCBF4_3926);
        assert_eq!(
            b.checksum(),
            Crc::compute(crc32_params(), b"1234xxxxx").unwrap()
        );
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Crc>();
    }
}
