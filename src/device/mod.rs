//! Bus devices.
//!
//! A device is a stateful entity bound to one or two group addresses. It
//! follows a synchronize-then-track protocol: `sync` asks the bus for the
//! current value, `process` applies inbound telegrams to local state, and the
//! action operations enqueue outbound write telegrams. Local state is never
//! mutated optimistically: the bus is the single source of truth.
//!
//! [`Switch`] is the one concrete device type of this core; further device
//! classes implement [`Device`] the same way.

use crate::addressing::GroupAddress;
use crate::error::Result;
use crate::telegram::Telegram;

pub mod registry;
pub mod switch;

pub use registry::DeviceRegistry;
pub use switch::Switch;

/// Maximum number of observers one device can hold.
pub const MAX_OBSERVERS: usize = 8;

/// The inbound seam every device type implements.
///
/// Object-safe on purpose: the [`DeviceRegistry`] fans inbound telegrams out
/// over `&mut dyn Device`. The outbound operations (`sync`, actions) stay on
/// the concrete types, which suspend on the queue and have device-specific
/// surfaces.
pub trait Device {
    /// Free-form identifier of this device.
    fn name(&self) -> &str;

    /// Whether an inbound telegram for `address` concerns this device.
    fn listens_to(&self, address: GroupAddress) -> bool;

    /// Apply an inbound telegram to local state.
    ///
    /// Must be a silent no-op for telegrams that carry no payload or are
    /// addressed elsewhere. Not safe for unserialized concurrent calls on the
    /// same device; the `&mut` receiver enforces single ownership.
    fn process(&mut self, telegram: &Telegram) -> Result<()>;
}

/// Observer of device state changes.
///
/// Registered observers are invoked synchronously, in registration order,
/// every time `process` tracks a new state, including repeats of the same
/// value. Panics in an observer propagate to the caller of `process`;
/// isolating observer failures is the dispatcher's concern.
pub trait Observer<D> {
    /// Called with the device whose tracked state was just overwritten.
    fn device_updated(&self, device: &D);
}
