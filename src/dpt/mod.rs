//! KNX Datapoint Types (DPT).
//!
//! DPTs define how to interpret the application value carried in a telegram
//! payload. This core ships the single-bit family (DPT 1.xxx) only; the wider
//! catalog (dimming, percentages, temperatures, ...) lives behind the
//! [`DptValue`] seam and plugs in from outside.

use crate::error::Result;

pub mod dpt1;

#[doc(inline)]
pub use dpt1::DptBinary;

/// Wire codec seam shared by all datapoint values.
///
/// A datapoint value is a validated application value together with its
/// fixed-size wire representation. Construction of an implementor must reject
/// raw data outside the value domain, so decoding a constructed instance is
/// total.
pub trait DptValue: Sized {
    /// Number of bytes this value occupies on the wire.
    const WIRE_LEN: usize;

    /// Encode the value into a byte buffer.
    ///
    /// Returns the number of bytes written.
    fn encode_into(&self, buf: &mut [u8]) -> Result<usize>;

    /// Decode a value from a byte buffer, validating the value domain.
    fn from_wire(buf: &[u8]) -> Result<Self>;
}
