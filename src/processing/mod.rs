//! Address range processing.
//!
//! - [`summarize`] - splitting an address range into CIDR blocks

mod summarize;

pub use summarize::summarize_range;
