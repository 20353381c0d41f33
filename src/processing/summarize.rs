//! Range to CIDR summarization.
//!
//! Splits an arbitrary inclusive address range into the fewest CIDR blocks
//! that cover it exactly.

use crate::error::{Error, Result};
use crate::models::{Address, Network};

/// Summarize the inclusive range between two addresses of one family.
///
/// The arguments may be given in either order. Blocks come back in
/// ascending order, disjoint, and their union is exactly the range.
///
/// # Examples
/// ```
/// use ipinfo::models::Address;
/// use ipinfo::processing::summarize_range;
/// let first = Address::parse("192.168.0.1").unwrap();
/// let last = Address::parse("192.168.0.4").unwrap();
/// let blocks: Vec<String> = summarize_range(first, last)
///     .unwrap()
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(blocks, ["192.168.0.1/32", "192.168.0.2/31", "192.168.0.4/32"]);
/// ```
pub fn summarize_range(first: Address, last: Address) -> Result<Vec<Network>> {
    if first.family() != last.family() {
        return Err(Error::FamilyMismatch {
            first: first.to_string(),
            second: last.to_string(),
        });
    }

    let family = first.family();
    let width = family.width();
    let (lo, hi) = if first <= last {
        (first, last)
    } else {
        (last, first)
    };
    log::debug!("summarize_range({lo} .. {hi})");

    let mut low = lo.to_integer();
    let high = hi.to_integer();
    let mut blocks = Vec::new();

    loop {
        let bits = block_bits(low, high, width);
        let block = Network::new(Address::new(family, low)?, width - bits)?;
        log::trace!("  block {block}");
        blocks.push(block);

        // A block of `width` bits is the whole address space.
        if bits == width {
            break;
        }
        match low.checked_add(1u128 << bits) {
            Some(next) if next <= high => low = next,
            _ => break,
        }
    }

    log::debug!("summarize_range -> {} block(s)", blocks.len());
    Ok(blocks)
}

/// Host bits of the largest block that starts at `low`, is aligned on its
/// own size, and ends at or before `high`.
fn block_bits(low: u128, high: u128, width: u8) -> u8 {
    let align = if low == 0 {
        width as u32
    } else {
        low.trailing_zeros().min(width as u32)
    };
    let span = match (high - low).checked_add(1) {
        Some(count) => 127 - count.leading_zeros(),
        None => 128,
    };
    align.min(span) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    fn blocks(a: &str, b: &str) -> Vec<String> {
        summarize_range(addr(a), addr(b))
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_single_block() {
        assert_eq!(blocks("192.168.0.0", "192.168.0.255"), ["192.168.0.0/24"]);
    }

    #[test]
    fn test_split_range() {
        assert_eq!(
            blocks("192.168.0.1", "192.168.0.4"),
            ["192.168.0.1/32", "192.168.0.2/31", "192.168.0.4/32"]
        );
    }

    #[test]
    fn test_reversed_arguments() {
        assert_eq!(
            blocks("192.168.0.4", "192.168.0.1"),
            blocks("192.168.0.1", "192.168.0.4")
        );
    }

    #[test]
    fn test_single_host() {
        assert_eq!(blocks("10.0.0.7", "10.0.0.7"), ["10.0.0.7/32"]);
        assert_eq!(blocks("::1", "::1"), ["::1/128"]);
    }

    #[test]
    fn test_whole_spaces() {
        assert_eq!(blocks("0.0.0.0", "255.255.255.255"), ["0.0.0.0/0"]);
        assert_eq!(
            blocks("::", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            ["::/0"]
        );
    }

    #[test]
    fn test_top_of_space() {
        assert_eq!(
            blocks("255.255.255.254", "255.255.255.255"),
            ["255.255.255.254/31"]
        );
        assert_eq!(
            blocks("255.255.255.253", "255.255.255.255"),
            ["255.255.255.253/32", "255.255.255.254/31"]
        );
        assert_eq!(
            blocks("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            ["ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128"]
        );
        assert_eq!(blocks("128.0.0.0", "255.255.255.255"), ["128.0.0.0/1"]);
    }

    #[test]
    fn test_ipv6_range() {
        assert_eq!(
            blocks("2001:db8::", "2001:db8::1:0"),
            ["2001:db8::/112", "2001:db8::1:0/128"]
        );
    }

    #[test]
    fn test_family_mismatch() {
        let err = summarize_range(addr("10.0.0.1"), addr("::1")).unwrap_err();
        assert_eq!(
            err,
            Error::FamilyMismatch {
                first: "10.0.0.1".to_string(),
                second: "::1".to_string()
            }
        );
    }

    #[test]
    fn test_block_bits() {
        assert_eq!(block_bits(0, u32::MAX as u128, 32), 32);
        assert_eq!(block_bits(0, u128::MAX, 128), 128);
        assert_eq!(block_bits(1, 4, 32), 0);
        assert_eq!(block_bits(2, 4, 32), 1);
        assert_eq!(block_bits(16, 255, 32), 4);
    }
}
