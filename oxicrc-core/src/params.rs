//! CRC parameter sets.
//!
//! A [`CrcParams`] captures everything that distinguishes one CRC variant
//! from another, following the Rocksoft model used by the CRC catalogue:
//!
//! | Field               | Meaning                                              |
//! |---------------------|------------------------------------------------------|
//! | `width`             | Register width in bits (1..=64)                      |
//! | `polynomial`        | Generator polynomial without its implicit top bit    |
//! | `initial_remainder` | Register value before the first byte                 |
//! | `final_xor`         | XORed into the register when reading the checksum    |
//! | `reflect_input`     | Process each input byte least-significant bit first  |
//! | `reflect_output`    | Bit-reverse the register before `final_xor`          |
//!
//! Values wider than `width` are accepted here and truncated when the
//! engine is built. `width` and `polynomial` are the only required fields;
//! the rest default to zero / `false`.

use crate::error::{CrcError, Result};
use crate::width::Width;

/// CRC algorithm parameters.
///
/// # Example
///
/// ```
/// use oxicrc_core::CrcParams;
///
/// // CRC-32 (ISO-HDLC)
/// let params = CrcParams::new(32, 0x04C1_1DB7)
///     .with_initial_remainder(0xFFFF_FFFF)
///     .with_final_xor(0xFFFF_FFFF)
///     .with_reflect_input(true)
///     .with_reflect_output(true);
/// assert_eq!(params.width, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrcParams {
    /// Register width in bits.
    pub width: u8,
    /// Generator polynomial (without the implicit high bit).
    pub polynomial: u64,
    /// Initial register value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_remainder: u64,
    /// Value XORed into the final register.
    #[cfg_attr(feature = "serde", serde(default))]
    pub final_xor: u64,
    /// Reflect each input byte before processing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reflect_input: bool,
    /// Reflect the register before applying `final_xor`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reflect_output: bool,
}

impl CrcParams {
    /// Create parameters with the required fields; everything else zero/`false`.
    pub const fn new(width: u8, polynomial: u64) -> Self {
        Self {
            width,
            polynomial,
            initial_remainder: 0,
            final_xor: 0,
            reflect_input: false,
            reflect_output: false,
        }
    }

    /// Set the initial register value.
    pub const fn with_initial_remainder(mut self, initial_remainder: u64) -> Self {
        self.initial_remainder = initial_remainder;
        self
    }

    /// Set the final XOR value.
    pub const fn with_final_xor(mut self, final_xor: u64) -> Self {
        self.final_xor = final_xor;
        self
    }

    /// Set input reflection.
    pub const fn with_reflect_input(mut self, reflect_input: bool) -> Self {
        self.reflect_input = reflect_input;
        self
    }

    /// Set output reflection.
    pub const fn with_reflect_output(mut self, reflect_output: bool) -> Self {
        self.reflect_output = reflect_output;
        self
    }

    /// Validate the width and truncate every integer field to it.
    ///
    /// Returns the validated width alongside the normalized copy.
    ///
    /// # Errors
    ///
    /// Returns [`CrcError::InvalidWidth`] if `width` is outside 1..=64.
    pub fn normalize(&self) -> Result<(Width, Self)> {
        let width = Width::new(self.width)?;
        let normalized = Self {
            width: self.width,
            polynomial: width.truncate(self.polynomial),
            initial_remainder: width.truncate(self.initial_remainder),
            final_xor: width.truncate(self.final_xor),
            reflect_input: self.reflect_input,
            reflect_output: self.reflect_output,
        };

        if normalized != *self {
            tracing::debug!(
                width = self.width,
                polynomial = format_args!("{:#x}", self.polynomial),
                initial_remainder = format_args!("{:#x}", self.initial_remainder),
                final_xor = format_args!("{:#x}", self.final_xor),
                "truncating CRC parameters to register width"
            );
        }

        Ok((width, normalized))
    }

    /// Start a [`CrcParamsBuilder`].
    pub fn builder() -> CrcParamsBuilder {
        CrcParamsBuilder::default()
    }
}

/// Collects CRC parameters one at a time.
///
/// Useful when parameters arrive from a loosely structured source (command
/// arguments, a foreign binding). [`build`](Self::build) reports which
/// required parameter is missing instead of silently defaulting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrcParamsBuilder {
    width: Option<u8>,
    polynomial: Option<u64>,
    initial_remainder: Option<u64>,
    final_xor: Option<u64>,
    reflect_input: Option<bool>,
    reflect_output: Option<bool>,
}

impl CrcParamsBuilder {
    /// Register width in bits (required).
    pub fn width(mut self, width: u8) -> Self {
        self.width = Some(width);
        self
    }

    /// Generator polynomial (required).
    pub fn polynomial(mut self, polynomial: u64) -> Self {
        self.polynomial = Some(polynomial);
        self
    }

    /// Initial register value (default 0).
    pub fn initial_remainder(mut self, initial_remainder: u64) -> Self {
        self.initial_remainder = Some(initial_remainder);
        self
    }

    /// Final XOR value (default 0).
    pub fn final_xor(mut self, final_xor: u64) -> Self {
        self.final_xor = Some(final_xor);
        self
    }

    /// Input reflection (default `false`).
    pub fn reflect_input(mut self, reflect_input: bool) -> Self {
        self.reflect_input = Some(reflect_input);
        self
    }

    /// Output reflection (default `false`).
    pub fn reflect_output(mut self, reflect_output: bool) -> Self {
        self.reflect_output = Some(reflect_output);
        self
    }

    /// Finish the parameter set.
    ///
    /// The width is not range-checked here; that happens when an engine is
    /// constructed.
    ///
    /// # Errors
    ///
    /// Returns [`CrcError::MissingParameter`] if `width` or `polynomial`
    /// was never set.
    pub fn build(self) -> Result<CrcParams> {
        let width = self.width.ok_or(CrcError::missing_parameter("width"))?;
        let polynomial = self
            .polynomial
            .ok_or(CrcError::missing_parameter("polynomial"))?;

        Ok(CrcParams {
            width,
            polynomial,
            initial_remainder: self.initial_remainder.unwrap_or(0),
            final_xor: self.final_xor.unwrap_or(0),
            reflect_input: self.reflect_input.unwrap_or(false),
            reflect_output: self.reflect_output.unwrap_or(false),
        })
    }
}
