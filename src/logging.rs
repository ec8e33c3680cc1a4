//! Unified logging macros.
//!
//! This module provides one logging interface that selects the backend from
//! the active feature flags, so library code logs the same way on an embedded
//! target and on a host.
//!
//! # Usage
//!
//! ```ignore
//! crate::gate_log!(info, "connection established");
//! crate::gate_log!(debug, "received {} bytes", n);
//! ```
//!
//! # Feature Flags
//!
//! - `log` - uses the `log::` crate (host / USB serial debugging)
//! - `defmt` - uses `defmt::` (more efficient for embedded targets)
//! - neither - statements compile to nothing

/// Unified logging macro - selects `log::` or `defmt::` based on features.
#[macro_export]
#[cfg(feature = "log")]
macro_rules! gate_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! gate_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! gate_log {
    ($level:ident, $($arg:tt)*) => {{}};
}
