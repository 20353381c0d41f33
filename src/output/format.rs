//! Display-only renderings of addresses and numbers.

use crate::models::{Address, AddressCount, Family};
use itertools::Itertools;

/// IPv4: four 8-bit groups joined by `.`; IPv6: eight 16-bit groups joined by `:`.
///
/// # Examples
/// ```
/// use ipinfo::models::Address;
/// use ipinfo::output::to_binary_grouped;
/// let addr = Address::parse("192.168.1.1").unwrap();
/// assert_eq!(to_binary_grouped(&addr), "11000000.10101000.00000001.00000001");
/// ```
pub fn to_binary_grouped(addr: &Address) -> String {
    let bytes = addr.to_bytes();
    match addr.family() {
        Family::V4 => bytes.iter().map(|b| format!("{b:08b}")).join("."),
        Family::V6 => bytes
            .chunks(2)
            .map(|pair| format!("{:08b}{:08b}", pair[0], pair[1]))
            .join(":"),
    }
}

/// IPv4: four 2-digit hex octets joined by `.`; IPv6: the exploded form.
pub fn to_hex_grouped(addr: &Address) -> String {
    match addr.family() {
        Family::V4 => addr.to_bytes().iter().map(|b| format!("{b:02x}")).join("."),
        Family::V6 => addr.exploded(),
    }
}

/// Insert `,` every three digits from the right.
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let head = chars.len() % 3;
    let mut groups: Vec<String> = Vec::new();
    if head > 0 {
        groups.push(chars[..head].iter().collect());
    }
    groups.extend(chars[head..].chunks(3).map(|c| c.iter().collect::<String>()));
    groups.join(",")
}

/// `decimal   0xhex   0bbinary`, the layout used for counts and prefix lengths.
pub fn number_forms(decimal: &str, hex: &str, binary: &str) -> String {
    format!("{}   0x{hex}   0b{binary}", group_thousands(decimal))
}

pub fn prefix_forms(prefix: u8) -> String {
    number_forms(
        &prefix.to_string(),
        &format!("{prefix:02x}"),
        &format!("{prefix:b}"),
    )
}

pub fn count_forms(count: &AddressCount) -> String {
    number_forms(&count.to_string(), &count.to_hex(), &count.to_binary())
}
