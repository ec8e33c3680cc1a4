//! DPT 1.xxx - Boolean (1-bit)
//!
//! The single-bit datapoint value carried by switching telegrams
//! (on/off, true/false). Wire format is one byte whose LSB holds the bit;
//! the upper bits must be zero.

use crate::dpt::DptValue;
use crate::error::{GateError, Result};

/// Single-bit datapoint value (DPT 1.xxx).
///
/// Wraps exactly one bit. Construction rejects any raw value outside `{0,1}`,
/// so every instance decodes to a `bool` without failure.
///
/// # Examples
///
/// ```
/// use knx_gate::DptBinary;
///
/// let on = DptBinary::encode(true);
/// assert_eq!(on.raw(), 1);
/// assert!(on.decode()?);
///
/// assert!(DptBinary::new(2).is_err());
/// # Ok::<(), knx_gate::GateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DptBinary {
    raw: u8,
}

impl DptBinary {
    /// The `0` (off/false) value.
    pub const OFF: Self = Self { raw: 0 };
    /// The `1` (on/true) value.
    pub const ON: Self = Self { raw: 1 };

    /// Create a binary value from its raw bit.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidDptValue` for any raw value outside `{0,1}`.
    pub fn new(raw: u8) -> Result<Self> {
        if raw > 1 {
            return Err(GateError::InvalidDptValue);
        }
        Ok(Self { raw })
    }

    /// Encode an application bool (`true` → 1, `false` → 0).
    #[inline(always)]
    pub const fn encode(value: bool) -> Self {
        if value { Self::ON } else { Self::OFF }
    }

    /// Decode back to an application bool.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidDptValue` for a raw value outside `{0,1}`.
    /// Construction already rejects those, so this is total over instances
    /// built through the public API; the error arm states the codec contract.
    pub fn decode(self) -> Result<bool> {
        match self.raw {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(GateError::InvalidDptValue),
        }
    }

    /// Get the raw bit (0 or 1).
    #[inline(always)]
    pub const fn raw(self) -> u8 {
        self.raw
    }
}

impl DptValue for DptBinary {
    const WIRE_LEN: usize = 1;

    fn encode_into(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Err(GateError::BufferTooSmall);
        }
        buf[0] = self.raw;
        Ok(Self::WIRE_LEN)
    }

    /// Decode from the wire. A set upper bit is a domain error, not masked.
    fn from_wire(buf: &[u8]) -> Result<Self> {
        match buf {
            [] => Err(GateError::InvalidDptValue),
            [byte, ..] => Self::new(*byte),
        }
    }
}
