//! Domain models for address inspection.
//!
//! This module contains the core value types:
//! - [`Address`] - a single IPv4 or IPv6 address tagged with its [`Family`]
//! - [`Network`] - a CIDR block built on an [`Address`]
//! - [`Flags`] - classification results (private, loopback, ...)

mod address;
mod classify;
mod network;

// Re-export public types
pub use address::{Address, Family};
pub use classify::Flags;
pub use network::{AddressCount, Network};
