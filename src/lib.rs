#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # knx-gate
//!
//! Protocol core of a KNX building-automation bus gateway.
//!
//! This crate provides the `no_std` heart of a gateway: group addressing,
//! the binary datapoint codec, the telegram envelope, the shared outbound
//! dispatch queue and the device synchronize-then-track protocol. The
//! physical bus transport (serial or IP tunneling) and configuration loading
//! are external collaborators: the transport drains
//! [`TelegramQueue`] and feeds received telegrams back through
//! [`Device::process`].
//!
//! ## Example
//!
//! ```
//! use knx_gate::{Device, DptBinary, Gateway, Switch, Telegram, ga};
//!
//! static GATEWAY: Gateway = Gateway::new();
//!
//! # embassy_futures::block_on(async {
//! let mut light = Switch::new(&GATEWAY, "Living room", ga!(1/2/3));
//!
//! // Ask the bus for the current state, then command the light on.
//! light.sync().await?;
//! light.set_on().await?;
//! assert_eq!(GATEWAY.telegrams().len(), 2);
//!
//! // The transport answers; state tracks the bus.
//! light.process(&Telegram::write(ga!(1/2/3), DptBinary::ON))?;
//! assert!(light.state());
//! # Ok::<(), knx_gate::GateError>(())
//! # }).unwrap();
//! ```

pub mod addressing;
pub mod device;
pub mod dpt;
pub mod error;
pub mod gateway;
pub mod queue;
pub mod telegram;

// Macro modules (must be declared before use)
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::GroupAddress;
#[doc(inline)]
pub use device::{Device, DeviceRegistry, Observer, Switch};
#[doc(inline)]
pub use dpt::{DptBinary, DptValue};
#[doc(inline)]
pub use error::{GateError, Result};
#[doc(inline)]
pub use gateway::Gateway;
#[doc(inline)]
pub use queue::{TelegramQueue, DEFAULT_QUEUE_DEPTH};
#[doc(inline)]
pub use telegram::{Telegram, TelegramKind};
