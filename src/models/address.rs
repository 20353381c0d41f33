//! IPv4/IPv6 address model.
//!
//! An [`Address`] is an integer plus a [`Family`] tag. Every operation
//! matches on the tag, so the same code path serves both families.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Bit width of an address, which is also the maximum prefix length.
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Largest integer value an address of this family can hold.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    /// IP version number, 4 or 6.
    pub const fn version(self) -> u8 {
        match self {
            Family::V4 => 4,
            Family::V6 => 6,
        }
    }

    /// Reverse DNS zone all pointers of this family live under.
    pub const fn arpa_zone(self) -> &'static str {
        match self {
            Family::V4 => "in-addr.arpa",
            Family::V6 => "ip6.arpa",
        }
    }

    /// Integer with the leading `prefix` bits set.
    pub fn netmask_bits(self, prefix: u8) -> u128 {
        if prefix == 0 {
            return 0;
        }
        let host_bits = self.width() - prefix.min(self.width());
        (self.max_value() >> host_bits) << host_bits
    }

    /// Integer with the trailing `width - prefix` bits set.
    pub fn hostmask_bits(self, prefix: u8) -> u128 {
        self.max_value() ^ self.netmask_bits(prefix)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IPv{}", self.version())
    }
}

lazy_static! {
    static ref LEADING_ZERO_OCTET: Regex = Regex::new(r"(^|\.)0[0-9]").expect("Invalid Regex?");
}

/// A single IPv4 or IPv6 address.
///
/// Ordering is by family first (all IPv4 before IPv6), then numerically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    /// Build an address from a raw integer, rejecting values wider than the family.
    pub fn new(family: Family, value: u128) -> Result<Address> {
        if value > family.max_value() {
            return Err(Error::out_of_range(
                format!("{value:#x}"),
                format!("does not fit in {} bits", family.width()),
            ));
        }
        Ok(Address { family, value })
    }

    pub const fn v4(value: u32) -> Address {
        Address {
            family: Family::V4,
            value: value as u128,
        }
    }

    pub const fn v6(value: u128) -> Address {
        Address {
            family: Family::V6,
            value,
        }
    }

    /// Parse dotted-quad IPv4 or colon-hex IPv6 text.
    ///
    /// Whitespace around the address is rejected rather than trimmed, and
    /// IPv4 octets with leading zeros are rejected so `010` is never read
    /// as octal.
    pub fn parse(text: &str) -> Result<Address> {
        if text.is_empty() {
            return Err(Error::address(text, "address cannot be empty"));
        }
        if text.trim() != text {
            return Err(Error::address(
                text,
                "leading or trailing whitespace is not allowed",
            ));
        }
        if text.contains('%') {
            return Err(Error::address(text, "zone identifiers are not supported"));
        }

        if text.contains(':') {
            let ip = Ipv6Addr::from_str(text)
                .map_err(|_| Error::address(text, "invalid IPv6 address syntax"))?;
            log::trace!("parse({text}) -> IPv6 {ip}");
            return Ok(Address::from(ip));
        }

        if LEADING_ZERO_OCTET.is_match(text) {
            return Err(Error::address(
                text,
                "leading zeros are not permitted in an octet",
            ));
        }
        let ip = Ipv4Addr::from_str(text).map_err(|_| {
            Error::address(text, "expected 4 decimal octets in the range 0-255")
        })?;
        log::trace!("parse({text}) -> IPv4 {ip}");
        Ok(Address::from(ip))
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn version(&self) -> u8 {
        self.family.version()
    }

    pub fn max_prefix_len(&self) -> u8 {
        self.family.width()
    }

    pub fn to_integer(&self) -> u128 {
        self.value
    }

    /// Big-endian bytes: 4 for IPv4, 16 for IPv6.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.family {
            Family::V4 => (self.value as u32).to_be_bytes().to_vec(),
            Family::V6 => self.value.to_be_bytes().to_vec(),
        }
    }

    /// Add `n`, failing past the top of the address space.
    pub fn checked_add(&self, n: u128) -> Result<Address> {
        self.value
            .checked_add(n)
            .filter(|v| *v <= self.family.max_value())
            .map(|value| Address {
                family: self.family,
                value,
            })
            .ok_or_else(|| {
                Error::out_of_range(self, format!("adding {n} overflows the {} space", self.family))
            })
    }

    /// Subtract `n`, failing below zero.
    pub fn checked_sub(&self, n: u128) -> Result<Address> {
        self.value
            .checked_sub(n)
            .map(|value| Address {
                family: self.family,
                value,
            })
            .ok_or_else(|| {
                Error::out_of_range(self, format!("subtracting {n} underflows the {} space", self.family))
            })
    }

    pub fn successor(&self) -> Result<Address> {
        self.checked_add(1)
    }

    pub fn predecessor(&self) -> Result<Address> {
        self.checked_sub(1)
    }

    /// The embedded IPv4 address of an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`).
    pub fn ipv4_mapped(&self) -> Option<Address> {
        match self.family {
            Family::V6 if self.value >> 32 == 0xffff => Some(Address::v4(self.value as u32)),
            _ => None,
        }
    }

    /// Fully expanded form: dotted decimal for IPv4, eight 4-digit hextets for IPv6.
    pub fn exploded(&self) -> String {
        match self.family {
            Family::V4 => Ipv4Addr::from(self.value as u32).to_string(),
            Family::V6 => self
                .to_bytes()
                .chunks(2)
                .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
                .collect::<Vec<String>>()
                .join(":"),
        }
    }

    /// Canonical shortest form (RFC 5952 for IPv6).
    pub fn compressed(&self) -> String {
        IpAddr::from(*self).to_string()
    }

    /// Reverse DNS label, e.g. `1.1.168.192.in-addr.arpa`.
    pub fn reverse_pointer(&self) -> String {
        let labels = self.reverse_labels();
        format!("{}.{}", labels.join("."), self.family.arpa_zone())
    }

    /// Octets (IPv4) or nibbles (IPv6), most significant first.
    pub(crate) fn dns_labels(&self) -> Vec<String> {
        match self.family {
            Family::V4 => self.to_bytes().iter().map(|o| o.to_string()).collect(),
            Family::V6 => format!("{:032x}", self.value)
                .chars()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    fn reverse_labels(&self) -> Vec<String> {
        let mut labels = self.dns_labels();
        labels.reverse();
        labels
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::v4(u32::from(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::v6(u128::from(ip))
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(addr.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(addr.value)),
        }
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.compressed())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.compressed())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
