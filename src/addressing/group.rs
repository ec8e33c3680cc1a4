//! KNX Group Address implementation.
//!
//! Group addresses are three-level hierarchical destinations
//! (`main/middle/sub`, e.g. `1/2/3`) used to address a set of bus devices.
//!
//! Internally stored as 16 bits:
//! - Main: 5 bits (0-31)
//! - Middle: 3 bits (0-7)
//! - Sub: 8 bits (0-255)

use crate::error::{GateError, Result};
use core::fmt;

/// KNX group address.
///
/// Immutable value type; equality and hashing are based on the packed
/// 16-bit representation. Parsing and formatting round-trip:
/// `s.parse::<GroupAddress>()?.to_string() == s` for every canonical string.
///
/// # Examples
///
/// ```
/// use knx_gate::GroupAddress;
///
/// let addr = GroupAddress::new(1, 2, 3)?;
/// assert_eq!(addr.to_string(), "1/2/3");
///
/// let addr: GroupAddress = "1/2/3".parse()?;
/// assert_eq!(u16::from(addr), 0x0A03);
///
/// let addr = GroupAddress::from(0x0A03u16);
/// assert_eq!((addr.main(), addr.middle(), addr.sub()), (1, 2, 3));
/// # Ok::<(), knx_gate::GateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupAddress {
    raw: u16,
}

impl GroupAddress {
    /// Maximum main group value (5 bits)
    pub const MAX_MAIN: u8 = 31;
    /// Maximum middle group value (3 bits)
    pub const MAX_MIDDLE: u8 = 7;
    /// Maximum sub group value (8 bits)
    pub const MAX_SUB: u8 = 255;

    /// Create a new group address from its three components.
    ///
    /// # Errors
    ///
    /// Returns `GateError::AddressOutOfRange` if `main` or `middle` exceeds
    /// its bit range (`sub` is a `u8` and always fits).
    pub fn new(main: u8, middle: u8, sub: u8) -> Result<Self> {
        if main > Self::MAX_MAIN || middle > Self::MAX_MIDDLE {
            return Err(GateError::AddressOutOfRange);
        }

        let raw = (u16::from(main) << 11) | (u16::from(middle) << 8) | u16::from(sub);
        Ok(Self { raw })
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the main group component (0-31).
    #[inline(always)]
    pub const fn main(self) -> u8 {
        ((self.raw >> 11) & 0x1F) as u8
    }

    /// Get the middle group component (0-7).
    #[inline(always)]
    pub const fn middle(self) -> u8 {
        ((self.raw >> 8) & 0x07) as u8
    }

    /// Get the sub group component (0-255).
    #[inline(always)]
    pub const fn sub(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Format as the canonical `main/middle/sub` string.
    pub fn canonical(&self) -> heapless::String<16> {
        use core::fmt::Write;
        let mut s = heapless::String::new();
        let _ = write!(s, "{}/{}/{}", self.main(), self.middle(), self.sub());
        s
    }

    /// Encode the address into a byte buffer (big-endian).
    ///
    /// # Errors
    ///
    /// Returns `GateError::BufferTooSmall` if `buf` is shorter than 2 bytes.
    #[inline]
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < 2 {
            return Err(GateError::BufferTooSmall);
        }
        buf[0..2].copy_from_slice(&self.raw.to_be_bytes());
        Ok(2)
    }

    /// Decode an address from a byte buffer (big-endian).
    ///
    /// # Errors
    ///
    /// Returns `GateError::BufferTooSmall` if `buf` is shorter than 2 bytes.
    #[inline]
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < 2 {
            return Err(GateError::BufferTooSmall);
        }
        let raw = u16::from_be_bytes([buf[0], buf[1]]);
        Ok(Self { raw })
    }
}

impl From<u16> for GroupAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<GroupAddress> for u16 {
    #[inline(always)]
    fn from(addr: GroupAddress) -> u16 {
        addr.raw
    }
}

impl fmt::Display for GroupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.main(), self.middle(), self.sub())
    }
}

impl core::str::FromStr for GroupAddress {
    type Err = GateError;

    /// Parse a `main/middle/sub` string.
    ///
    /// Exactly three `/`-separated decimal components are accepted. A wrong
    /// number of parts or a non-numeric part is `InvalidGroupAddress`; a
    /// numeric component beyond its bit range is `AddressOutOfRange`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('/');
        let (Some(main), Some(middle), Some(sub), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(GateError::InvalidGroupAddress);
        };

        let parse_part =
            |part: &str| part.parse::<u16>().map_err(|_| GateError::InvalidGroupAddress);
        let (main, middle, sub) = (parse_part(main)?, parse_part(middle)?, parse_part(sub)?);

        if main > u16::from(Self::MAX_MAIN)
            || middle > u16::from(Self::MAX_MIDDLE)
            || sub > u16::from(Self::MAX_SUB)
        {
            return Err(GateError::AddressOutOfRange);
        }

        Self::new(main as u8, middle as u8, sub as u8)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GroupAddress {
    /// Serialize as the canonical `main/middle/sub` string.
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GroupAddress {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AddressVisitor;

        impl serde::de::Visitor<'_> for AddressVisitor {
            type Value = GroupAddress;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a group address string of the form main/middle/sub")
            }

            fn visit_str<E>(self, v: &str) -> core::result::Result<GroupAddress, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}
