//! Error types for gateway-core operations.
//!
//! A single crate-wide error enum keeps the `?` chains flat across the
//! addressing, codec, queue and device layers. All variants are local
//! precondition violations. Nothing here is retried internally; retry and
//! backoff policy belongs to the transport collaborator.

use core::fmt;

/// Result type alias for gateway-core operations.
pub type Result<T> = core::result::Result<T, GateError>;

/// Gateway protocol error.
///
/// Returned by every fallible operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateError {
    /// Group address string does not have the `main/middle/sub` shape.
    InvalidGroupAddress,
    /// A group address component exceeds its 5/3/8-bit range.
    AddressOutOfRange,
    /// Datapoint raw value lies outside the representable domain.
    InvalidDptValue,
    /// Pop attempted on an empty dispatch queue. Expected condition for
    /// pollers, not a systemic fault.
    QueueEmpty,
    /// Non-suspending push attempted on a dispatch queue with no free slot.
    QueueFull,
    /// Action token not recognized by the device.
    UnknownAction,
    /// Observer list reached its fixed capacity.
    ObserverListFull,
    /// Device registry reached its fixed capacity.
    RegistryFull,
    /// Wire codec target buffer is too short.
    BufferTooSmall,
}

impl GateError {
    /// Check whether this is an address error (shape or range).
    pub const fn is_address_error(&self) -> bool {
        matches!(
            self,
            GateError::InvalidGroupAddress | GateError::AddressOutOfRange
        )
    }

    /// Check whether this is the empty-queue condition.
    pub const fn is_queue_empty(&self) -> bool {
        matches!(self, GateError::QueueEmpty)
    }

    /// Check whether this is a capacity limit of a bounded collection.
    pub const fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            GateError::QueueFull | GateError::ObserverListFull | GateError::RegistryFull
        )
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::InvalidGroupAddress => write!(f, "invalid group address string"),
            GateError::AddressOutOfRange => write!(f, "group address component out of range"),
            GateError::InvalidDptValue => write!(f, "datapoint value outside representable domain"),
            GateError::QueueEmpty => write!(f, "dispatch queue is empty"),
            GateError::QueueFull => write!(f, "dispatch queue is full"),
            GateError::UnknownAction => write!(f, "unknown device action"),
            GateError::ObserverListFull => write!(f, "observer list is full"),
            GateError::RegistryFull => write!(f, "device registry is full"),
            GateError::BufferTooSmall => write!(f, "target buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GateError {}
