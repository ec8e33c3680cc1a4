//! Outbound telegram dispatch queue.
//!
//! The one shared mutable resource of a gateway context: devices push
//! telegrams, the transport collaborator drains them and puts them on the
//! physical bus. Backed by an [`embassy_sync::channel::Channel`] over a
//! critical-section mutex, so pushes from concurrent producers are atomic and
//! FIFO order is preserved; the single consumer sees telegrams exactly in
//! push order.

use crate::error::{GateError, Result};
use crate::telegram::Telegram;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Default queue depth used by [`Gateway`](crate::gateway::Gateway).
pub const DEFAULT_QUEUE_DEPTH: usize = 32;

/// FIFO queue of outbound telegrams.
///
/// `new()` is const, so a queue can live in a `static` and be shared across
/// executor tasks:
///
/// ```
/// use knx_gate::TelegramQueue;
///
/// static TELEGRAMS: TelegramQueue = TelegramQueue::new();
/// ```
///
/// A pushed telegram is not revocable; there is no cancel or remove
/// operation.
pub struct TelegramQueue<const N: usize = DEFAULT_QUEUE_DEPTH> {
    channel: Channel<CriticalSectionRawMutex, Telegram, N>,
}

impl<const N: usize> TelegramQueue<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Append a telegram at the tail.
    ///
    /// Never fails. Completes immediately while a slot is free and otherwise
    /// suspends on the channel's own cooperative primitive until the consumer
    /// makes room; it never blocks a thread and never waits indefinitely
    /// under a live consumer.
    pub async fn push(&self, telegram: Telegram) {
        self.channel.send(telegram).await;
    }

    /// Non-suspending push for callers that cannot await.
    ///
    /// # Errors
    ///
    /// Returns `GateError::QueueFull` if no slot is free.
    pub fn try_push(&self, telegram: Telegram) -> Result<()> {
        self.channel
            .try_send(telegram)
            .map_err(|_| GateError::QueueFull)
    }

    /// Remove and return the head telegram.
    ///
    /// # Errors
    ///
    /// Returns `GateError::QueueEmpty` if the queue holds no telegram, the
    /// normal condition for a polling consumer rather than a fault.
    pub fn pop_front(&self) -> Result<Telegram> {
        self.channel
            .try_receive()
            .map_err(|_| GateError::QueueEmpty)
    }

    /// Suspend until a telegram is available, then remove and return it.
    ///
    /// The drain primitive for the transport's outbound loop.
    pub async fn receive(&self) -> Telegram {
        self.channel.receive().await
    }

    /// Number of queued telegrams.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    /// Whether the queue holds no telegram.
    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    /// Fixed capacity of the queue.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for TelegramQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for TelegramQueue<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TelegramQueue")
            .field("len", &self.len())
            .field("capacity", &N)
            .finish()
    }
}
