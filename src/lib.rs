//! Inspect IPv4/IPv6 addresses, networks and ranges.
//!
//! The kernel is [`models`] (addresses, networks, classification),
//! [`processing`] (range summarization) and [`output`] (renderings and
//! reports). [`cli`] is the thin shell the binary drives.

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Error, Result};
pub use models::{Address, AddressCount, Family, Flags, Network};
pub use processing::summarize_range;
