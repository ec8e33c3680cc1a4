//! Binary switch device.
//!
//! A switch is bound to a command address and optionally a separate
//! state-read address. Actions (`set_on`, `set_off`) enqueue write telegrams;
//! the tracked state only changes when the bus answers through [`process`].
//!
//! [`process`]: Device::process

use crate::addressing::GroupAddress;
use crate::device::{Device, Observer, MAX_OBSERVERS};
use crate::dpt::DptBinary;
use crate::error::{GateError, Result};
use crate::gateway::Gateway;
use crate::queue::DEFAULT_QUEUE_DEPTH;
use crate::telegram::Telegram;

/// Binary switch bound to a gateway context.
///
/// # Examples
///
/// ```
/// use knx_gate::{Device, DptBinary, Gateway, Switch, Telegram, ga};
///
/// static GATEWAY: Gateway = Gateway::new();
///
/// # embassy_futures::block_on(async {
/// let mut light = Switch::new(&GATEWAY, "Living room", ga!(1/2/3));
/// light.set_on().await?;
///
/// // The transport drains the queue; state follows the bus answer.
/// assert!(!light.state());
/// light.process(&Telegram::write(ga!(1/2/3), DptBinary::ON))?;
/// assert!(light.state());
/// # Ok::<(), knx_gate::GateError>(())
/// # }).unwrap();
/// ```
pub struct Switch<'a, const N: usize = DEFAULT_QUEUE_DEPTH> {
    gateway: &'a Gateway<N>,
    name: &'a str,
    command_address: GroupAddress,
    state_address: Option<GroupAddress>,
    state: bool,
    observers: heapless::Vec<&'a dyn Observer<Switch<'a, N>>, MAX_OBSERVERS>,
}

impl<'a, const N: usize> Switch<'a, N> {
    /// Create a switch commanded and read through one group address.
    pub fn new(gateway: &'a Gateway<N>, name: &'a str, command_address: GroupAddress) -> Self {
        Self {
            gateway,
            name,
            command_address,
            state_address: None,
            state: false,
            observers: heapless::Vec::new(),
        }
    }

    /// Create a switch with a separate state-read address.
    pub fn with_state_address(
        gateway: &'a Gateway<N>,
        name: &'a str,
        command_address: GroupAddress,
        state_address: GroupAddress,
    ) -> Self {
        Self {
            state_address: Some(state_address),
            ..Self::new(gateway, name, command_address)
        }
    }

    /// Create a switch from configuration strings.
    ///
    /// The seam for the external configuration-loading collaborator: address
    /// strings are parsed fail-fast, so a device with a malformed address is
    /// never constructed.
    ///
    /// # Errors
    ///
    /// Returns the address parse error of the first malformed string.
    pub fn from_config(
        gateway: &'a Gateway<N>,
        name: &'a str,
        command_address: &str,
        state_address: Option<&str>,
    ) -> Result<Self> {
        let command_address = command_address.parse()?;
        let state_address = state_address.map(str::parse).transpose()?;
        Ok(Self {
            state_address,
            ..Self::new(gateway, name, command_address)
        })
    }

    /// The address write telegrams are sent to.
    #[inline(always)]
    pub const fn command_address(&self) -> GroupAddress {
        self.command_address
    }

    /// The separate state-read address, if configured.
    #[inline(always)]
    pub const fn state_address(&self) -> Option<GroupAddress> {
        self.state_address
    }

    /// The address read requests resolve to: the state address when
    /// configured, the command address otherwise.
    #[inline]
    pub fn read_address(&self) -> GroupAddress {
        self.state_address.unwrap_or(self.command_address)
    }

    /// Last state learned from the bus. Starts `false` until the first
    /// inbound telegram is processed.
    #[inline(always)]
    pub const fn state(&self) -> bool {
        self.state
    }

    /// Request the current state from the bus.
    ///
    /// Enqueues exactly one read-request telegram to [`read_address`] and
    /// returns once the push completes. Local state is untouched; it updates
    /// when the answer telegram arrives via `process`.
    ///
    /// [`read_address`]: Self::read_address
    pub async fn sync(&self) -> Result<()> {
        let telegram = Telegram::read_request(self.read_address());
        self.gateway.telegrams().push(telegram).await;
        Ok(())
    }

    /// Command the switch on.
    ///
    /// Enqueues one write telegram; does not touch local state.
    pub async fn set_on(&self) -> Result<()> {
        self.send_switch(true).await
    }

    /// Command the switch off.
    ///
    /// Enqueues one write telegram; does not touch local state.
    pub async fn set_off(&self) -> Result<()> {
        self.send_switch(false).await
    }

    /// Dispatch a string action token: `"on"` or `"off"`.
    ///
    /// # Errors
    ///
    /// Returns `GateError::UnknownAction` for any other token, with no side
    /// effects.
    pub async fn do_action(&self, action: &str) -> Result<()> {
        match action {
            "on" => self.set_on().await,
            "off" => self.set_off().await,
            _ => {
                crate::gate_log!(warn, "switch '{}': unknown action", self.name);
                Err(GateError::UnknownAction)
            }
        }
    }

    /// Register an observer. Observers are invoked in registration order.
    ///
    /// # Errors
    ///
    /// Returns `GateError::ObserverListFull` when [`MAX_OBSERVERS`] are
    /// already registered.
    pub fn register_observer(&mut self, observer: &'a dyn Observer<Switch<'a, N>>) -> Result<()> {
        self.observers
            .push(observer)
            .map_err(|_| GateError::ObserverListFull)
    }

    /// Deregister an observer by referent identity.
    ///
    /// Returns whether an entry was removed.
    pub fn deregister_observer(&mut self, observer: &dyn Observer<Switch<'a, N>>) -> bool {
        let target = (observer as *const dyn Observer<Switch<'a, N>>).cast::<()>();
        let position = self
            .observers
            .iter()
            .position(|cb| core::ptr::eq((*cb as *const dyn Observer<Switch<'a, N>>).cast(), target));
        match position {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    async fn send_switch(&self, value: bool) -> Result<()> {
        let telegram = Telegram::write(self.command_address, DptBinary::encode(value));
        self.gateway.telegrams().push(telegram).await;
        Ok(())
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.device_updated(self);
        }
    }
}

impl<'a, const N: usize> Device for Switch<'a, N> {
    fn name(&self) -> &str {
        self.name
    }

    fn listens_to(&self, address: GroupAddress) -> bool {
        address == self.command_address || Some(address) == self.state_address
    }

    /// Apply an inbound telegram.
    ///
    /// No-op for telegrams without payload (a bare read echoed back) and for
    /// destinations matching neither address. Otherwise the payload bit
    /// unconditionally overwrites the tracked state (no edge-triggering, no
    /// deduplication of repeated values) and every registered observer is
    /// invoked synchronously, in registration order.
    fn process(&mut self, telegram: &Telegram) -> Result<()> {
        let Some(payload) = telegram.payload() else {
            return Ok(());
        };
        if !self.listens_to(telegram.destination()) {
            return Ok(());
        }

        self.state = payload.decode()?;
        crate::gate_log!(debug, "switch '{}' tracked state {}", self.name, self.state);
        self.notify_observers();
        Ok(())
    }
}

impl<'a, const N: usize> core::fmt::Debug for Switch<'a, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Switch")
            .field("name", &self.name)
            .field("command_address", &self.command_address)
            .field("state_address", &self.state_address)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga;
    use core::cell::Cell;
    use embassy_futures::block_on;

    /// Counts invocations and remembers the state it last saw.
    struct RecordingObserver {
        calls: Cell<usize>,
        last_state: Cell<bool>,
    }

    impl RecordingObserver {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                last_state: Cell::new(false),
            }
        }
    }

    impl<'a, const N: usize> Observer<Switch<'a, N>> for RecordingObserver {
        fn device_updated(&self, device: &Switch<'a, N>) {
            self.calls.set(self.calls.get() + 1);
            self.last_state.set(device.state());
        }
    }

    #[test]
    fn test_read_address_resolution() {
        let gateway: Gateway = Gateway::new();

        let plain = Switch::new(&gateway, "plain", ga!(1/2/3));
        assert_eq!(plain.read_address(), ga!(1/2/3));

        let split = Switch::with_state_address(&gateway, "split", ga!(1/2/3), ga!(1/2/4));
        assert_eq!(split.read_address(), ga!(1/2/4));
        assert_eq!(split.command_address(), ga!(1/2/3));
    }

    #[test]
    fn test_from_config_parses_fail_fast() {
        let gateway: Gateway = Gateway::new();

        let switch = Switch::from_config(&gateway, "outlet", "1/2/3", Some("1/2/4")).unwrap();
        assert_eq!(switch.command_address(), ga!(1/2/3));
        assert_eq!(switch.state_address(), Some(ga!(1/2/4)));

        assert!(Switch::from_config(&gateway, "bad", "1/2", None)
            .unwrap_err()
            .is_address_error());
        assert!(Switch::from_config(&gateway, "bad", "1/2/3", Some("32/0/0"))
            .unwrap_err()
            .is_address_error());
    }

    #[test]
    fn test_process_overwrites_state_unconditionally() {
        let gateway: Gateway = Gateway::new();
        let mut switch = Switch::new(&gateway, "outlet", ga!(1/2/3));
        assert!(!switch.state());

        switch
            .process(&Telegram::write(ga!(1/2/3), DptBinary::ON))
            .unwrap();
        assert!(switch.state());

        // Repeated value is tracked again, not edge-filtered.
        switch
            .process(&Telegram::write(ga!(1/2/3), DptBinary::ON))
            .unwrap();
        assert!(switch.state());

        switch
            .process(&Telegram::write(ga!(1/2/3), DptBinary::OFF))
            .unwrap();
        assert!(!switch.state());
    }

    #[test]
    fn test_process_ignores_irrelevant_telegrams() {
        let gateway: Gateway = Gateway::new();
        let mut switch = Switch::new(&gateway, "outlet", ga!(1/2/3));

        // Payload-less read echo: silent success, no state change.
        switch.process(&Telegram::read_request(ga!(1/2/3))).unwrap();
        assert!(!switch.state());

        // Foreign destination: silent success.
        switch
            .process(&Telegram::write(ga!(4/4/4), DptBinary::ON))
            .unwrap();
        assert!(!switch.state());
    }

    #[test]
    fn test_process_accepts_state_address() {
        let gateway: Gateway = Gateway::new();
        let mut switch = Switch::with_state_address(&gateway, "outlet", ga!(1/2/3), ga!(1/2/4));

        switch
            .process(&Telegram::write(ga!(1/2/4), DptBinary::ON))
            .unwrap();
        assert!(switch.state());
    }

    #[test]
    fn test_observers_invoked_per_transition() {
        let gateway: Gateway = Gateway::new();
        let observer = RecordingObserver::new();
        let mut switch = Switch::new(&gateway, "outlet", ga!(1/2/3));
        switch.register_observer(&observer).unwrap();

        switch
            .process(&Telegram::write(ga!(1/2/3), DptBinary::ON))
            .unwrap();
        assert_eq!(observer.calls.get(), 1);
        assert!(observer.last_state.get());

        switch
            .process(&Telegram::write(ga!(1/2/3), DptBinary::OFF))
            .unwrap();
        assert_eq!(observer.calls.get(), 2);
        assert!(!observer.last_state.get());

        // Ignored telegrams never notify.
        switch.process(&Telegram::read_request(ga!(1/2/3))).unwrap();
        assert_eq!(observer.calls.get(), 2);
    }

    #[test]
    fn test_deregister_observer() {
        let gateway: Gateway = Gateway::new();
        let first = RecordingObserver::new();
        let second = RecordingObserver::new();
        let mut switch = Switch::new(&gateway, "outlet", ga!(1/2/3));
        switch.register_observer(&first).unwrap();
        switch.register_observer(&second).unwrap();

        assert!(switch.deregister_observer(&first));
        assert!(!switch.deregister_observer(&first));

        switch
            .process(&Telegram::write(ga!(1/2/3), DptBinary::ON))
            .unwrap();
        assert_eq!(first.calls.get(), 0);
        assert_eq!(second.calls.get(), 1);
    }

    #[test]
    fn test_actions_enqueue_without_state_change() {
        let gateway: Gateway = Gateway::new();
        let switch = Switch::new(&gateway, "outlet", ga!(1/2/3));

        block_on(switch.set_on()).unwrap();
        assert_eq!(gateway.telegrams().len(), 1);
        assert_eq!(
            gateway.telegrams().pop_front().unwrap(),
            Telegram::write(ga!(1/2/3), DptBinary::ON)
        );
        assert!(!switch.state());

        block_on(switch.set_off()).unwrap();
        assert_eq!(
            gateway.telegrams().pop_front().unwrap(),
            Telegram::write(ga!(1/2/3), DptBinary::OFF)
        );
    }

    #[test]
    fn test_do_action_unknown_token() {
        let gateway: Gateway = Gateway::new();
        let switch = Switch::new(&gateway, "outlet", ga!(1/2/3));

        let result = block_on(switch.do_action("toggle"));
        assert_eq!(result.unwrap_err(), GateError::UnknownAction);
        // No partial side effects.
        assert!(gateway.telegrams().is_empty());
    }
}
