//! Gateway context.
//!
//! One [`Gateway`] per bus session owns the outbound telegram queue. Devices
//! receive a reference at construction time (dependency injection, no ambient
//! global state), so multiple independent gateway sessions can coexist in one
//! process and tests can run against a private context.

use crate::queue::{TelegramQueue, DEFAULT_QUEUE_DEPTH};

/// Process-wide context for one bus gateway session.
///
/// # Examples
///
/// ```
/// use knx_gate::{Gateway, Switch, ga};
///
/// static GATEWAY: Gateway = Gateway::new();
///
/// let light = Switch::new(&GATEWAY, "Living room", ga!(1/2/3));
/// ```
pub struct Gateway<const N: usize = DEFAULT_QUEUE_DEPTH> {
    telegrams: TelegramQueue<N>,
}

impl<const N: usize> Gateway<N> {
    /// Create a new gateway context with an empty outbound queue.
    pub const fn new() -> Self {
        Self {
            telegrams: TelegramQueue::new(),
        }
    }

    /// The outbound dispatch queue of this context.
    pub const fn telegrams(&self) -> &TelegramQueue<N> {
        &self.telegrams
    }
}

impl<const N: usize> Default for Gateway<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for Gateway<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gateway")
            .field("telegrams", &self.telegrams)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga;
    use crate::telegram::Telegram;

    #[test]
    fn test_contexts_are_independent() {
        let first: Gateway = Gateway::new();
        let second: Gateway = Gateway::new();

        first
            .telegrams()
            .try_push(Telegram::read_request(ga!(1/2/3)))
            .unwrap();

        assert_eq!(first.telegrams().len(), 1);
        assert!(second.telegrams().is_empty());
    }
}
