//! Device registry.
//!
//! Ordered collection of devices belonging to one gateway context. The
//! transport's inbound loop hands every received telegram to
//! [`DeviceRegistry::dispatch`], which forwards it to the devices whose
//! address filter matches.

use crate::device::Device;
use crate::error::{GateError, Result};
use crate::telegram::Telegram;

/// Default registry capacity.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 16;

/// Ordered set of devices for inbound telegram fan-out.
///
/// The registry borrows its devices mutably for its own lifetime; loops that
/// both dispatch inbound telegrams and drive device actions access the
/// devices through [`get_mut`].
///
/// [`get_mut`]: Self::get_mut
pub struct DeviceRegistry<'a, const MAX: usize = DEFAULT_REGISTRY_CAPACITY> {
    devices: heapless::Vec<&'a mut dyn Device, MAX>,
}

impl<'a, const MAX: usize> DeviceRegistry<'a, MAX> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            devices: heapless::Vec::new(),
        }
    }

    /// Add a device at the end of the dispatch order.
    ///
    /// # Errors
    ///
    /// Returns `GateError::RegistryFull` when `MAX` devices are registered.
    pub fn add(&mut self, device: &'a mut dyn Device) -> Result<()> {
        self.devices.push(device).map_err(|_| GateError::RegistryFull)
    }

    /// Forward an inbound telegram to every matching device, in registration
    /// order.
    ///
    /// Returns the number of devices that received the telegram. A telegram
    /// matching no device is silent success with count zero.
    pub fn dispatch(&mut self, telegram: &Telegram) -> Result<usize> {
        let mut handled = 0;
        for device in self.devices.iter_mut() {
            if device.listens_to(telegram.destination()) {
                device.process(telegram)?;
                handled += 1;
            }
        }
        crate::gate_log!(
            trace,
            "dispatched telegram for {} to {} device(s)",
            telegram.destination(),
            handled
        );
        Ok(handled)
    }

    /// Look up a device by name.
    pub fn get(&self, name: &str) -> Option<&dyn Device> {
        self.devices
            .iter()
            .find(|device| device.name() == name)
            .map(|device| &**device as &dyn Device)
    }

    /// Look up a device by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Device> {
        self.devices
            .iter_mut()
            .find(|device| device.name() == name)
            .map(|device| &mut **device as &mut dyn Device)
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry holds no device.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl<'a, const MAX: usize> Default for DeviceRegistry<'a, MAX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const MAX: usize> core::fmt::Debug for DeviceRegistry<'a, MAX> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("devices", &self.devices.len())
            .field("capacity", &MAX)
            .finish()
    }
}
