//! KNX addressing.
//!
//! Telegrams in this core are addressed to group addresses only: logical
//! three-level destinations (`main/middle/sub`) that identify a set of bus
//! devices rather than a single physical one.

pub mod group;

pub use group::GroupAddress;
