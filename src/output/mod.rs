//! Output formatting.
//!
//! This module renders kernel values for people:
//! - [`format`] - binary/hex grouping and number renderings
//! - [`report`] - the per-command reports

mod format;
mod report;

pub use format::{
    count_forms, group_thousands, number_forms, prefix_forms, to_binary_grouped, to_hex_grouped,
};
pub use report::{range_lines, AddressForms, AddressReport, NetworkReport};
