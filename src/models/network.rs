//! CIDR network model.
//!
//! A [`Network`] is a base [`Address`] with host bits clear plus a prefix
//! length. Masks, broadcast address and address count are derived.

use super::address::{Address, Family};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref PREFIX_DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// 2^128 does not fit in a u128.
const TWO_POW_128: &str = "340282366920938463463374607431768211456";

/// Number of addresses in a network. Always a power of two, kept as the
/// exponent so a whole IPv6 space (2^128) stays exact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressCount {
    exponent: u8,
}

impl AddressCount {
    pub fn from_exponent(exponent: u8) -> AddressCount {
        AddressCount { exponent }
    }

    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    /// `None` only for 2^128.
    pub fn to_u128(&self) -> Option<u128> {
        1u128.checked_shl(self.exponent as u32)
    }

    pub fn to_hex(&self) -> String {
        let lead = 1u8 << (self.exponent % 4);
        format!("{lead:x}{}", "0".repeat(self.exponent as usize / 4))
    }

    pub fn to_binary(&self) -> String {
        format!("1{}", "0".repeat(self.exponent as usize))
    }
}

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_u128() {
            Some(n) => write!(f, "{n}"),
            None => f.write_str(TWO_POW_128),
        }
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// An IPv4 or IPv6 network in CIDR form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Network {
    address: Address,
    prefix: u8,
}

impl Network {
    /// Build a network, rejecting addresses with host bits set.
    pub fn new(address: Address, prefix: u8) -> Result<Network> {
        let network = Network::truncating(address, prefix)?;
        if network.address != address {
            return Err(Error::HostBitsSet {
                input: format!("{address}/{prefix}"),
            });
        }
        Ok(network)
    }

    /// Build a network, clearing any host bits of `address`.
    pub fn truncating(address: Address, prefix: u8) -> Result<Network> {
        let family = address.family();
        if prefix > family.width() {
            return Err(Error::prefix(
                &format!("{address}/{prefix}"),
                format!("{prefix} is larger than {}", family.width()),
            ));
        }
        let base = Address::new(family, address.to_integer() & family.netmask_bits(prefix))?;
        Ok(Network {
            address: base,
            prefix,
        })
    }

    /// Parse `address`, `address/prefixlen` or (IPv4 only) `address/netmask`
    /// and `address/hostmask`. Host bits must be clear.
    pub fn parse(text: &str) -> Result<Network> {
        Network::parse_with(text, true)
    }

    /// Like [`Network::parse`] but host bits are masked off.
    pub fn parse_truncating(text: &str) -> Result<Network> {
        Network::parse_with(text, false)
    }

    fn parse_with(text: &str, strict: bool) -> Result<Network> {
        let (addr_text, prefix_text) = match text.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (text, None),
        };

        let address = Address::parse(addr_text).map_err(|e| match e {
            Error::Parse { reason, .. } => Error::network(text, reason),
            other => other,
        })?;
        let family = address.family();
        let prefix = match prefix_text {
            None => family.width(),
            Some(p) => parse_prefix(text, p, family)?,
        };

        let network = Network::truncating(address, prefix)?;
        if strict && network.address != address {
            return Err(Error::HostBitsSet {
                input: text.to_string(),
            });
        }
        if network.address != address {
            log::debug!("{text} truncated to {network}");
        }
        Ok(network)
    }

    pub fn family(&self) -> Family {
        self.address.family()
    }

    pub fn version(&self) -> u8 {
        self.address.version()
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    pub fn max_prefix_len(&self) -> u8 {
        self.family().width()
    }

    pub fn network_address(&self) -> Address {
        self.address
    }

    /// Highest address of the network, host bits all set.
    pub fn broadcast_address(&self) -> Address {
        let family = self.family();
        Address::new(
            family,
            self.address.to_integer() | family.hostmask_bits(self.prefix),
        )
        .unwrap_or(self.address)
    }

    /// Same as [`Network::broadcast_address`]; the IPv6 name for it.
    pub fn last_address(&self) -> Address {
        self.broadcast_address()
    }

    /// First host address.
    ///
    /// One-address networks return that address; two-address networks use
    /// both addresses as hosts; larger ones skip the network address.
    pub fn first_usable(&self) -> Result<Address> {
        if self.prefix >= self.max_prefix_len() - 1 {
            Ok(self.network_address())
        } else {
            self.network_address().successor()
        }
    }

    /// Last host address, mirroring [`Network::first_usable`].
    pub fn last_usable(&self) -> Result<Address> {
        if self.prefix >= self.max_prefix_len() - 1 {
            Ok(self.broadcast_address())
        } else {
            self.broadcast_address().predecessor()
        }
    }

    pub fn netmask(&self) -> Address {
        let family = self.family();
        Address::new(family, family.netmask_bits(self.prefix)).unwrap_or(self.address)
    }

    pub fn hostmask(&self) -> Address {
        let family = self.family();
        Address::new(family, family.hostmask_bits(self.prefix)).unwrap_or(self.address)
    }

    pub fn num_addresses(&self) -> AddressCount {
        AddressCount::from_exponent(self.max_prefix_len() - self.prefix)
    }

    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family()
            && addr.to_integer() & self.family().netmask_bits(self.prefix)
                == self.address.to_integer()
    }

    pub fn with_prefixlen(&self) -> String {
        format!("{}/{}", self.address, self.prefix)
    }

    pub fn with_netmask(&self) -> String {
        format!("{}/{}", self.address, self.netmask())
    }

    pub fn with_hostmask(&self) -> String {
        format!("{}/{}", self.address, self.hostmask())
    }

    pub fn exploded(&self) -> String {
        format!("{}/{}", self.address.exploded(), self.prefix)
    }

    pub fn compressed(&self) -> String {
        format!("{}/{}", self.address.compressed(), self.prefix)
    }

    /// Reverse DNS zone of the network: the octets (IPv4) or nibbles (IPv6)
    /// covered by the prefix, rounded up.
    pub fn reverse_pointer(&self) -> String {
        let label_bits: u8 = match self.family() {
            Family::V4 => 8,
            Family::V6 => 4,
        };
        let covered = self.prefix.div_ceil(label_bits) as usize;
        let mut labels: Vec<String> = self
            .address
            .dns_labels()
            .into_iter()
            .take(covered)
            .collect();
        labels.reverse();
        labels.push(self.family().arpa_zone().to_string());
        labels.join(".")
    }

    // Classification looks at the base address only.

    pub fn is_global(&self) -> bool {
        self.address.is_global()
    }

    pub fn is_private(&self) -> bool {
        self.address.is_private()
    }

    pub fn is_reserved(&self) -> bool {
        self.address.is_reserved()
    }

    pub fn is_loopback(&self) -> bool {
        self.address.is_loopback()
    }

    pub fn is_multicast(&self) -> bool {
        self.address.is_multicast()
    }

    pub fn is_link_local(&self) -> bool {
        self.address.is_link_local()
    }

    pub fn is_unspecified(&self) -> bool {
        self.address.is_unspecified()
    }
}

/// Parse the part after `/`: a decimal prefix length, or for IPv4 a
/// dotted netmask or hostmask.
fn parse_prefix(input: &str, prefix: &str, family: Family) -> Result<u8> {
    if PREFIX_DIGITS.is_match(prefix) {
        return match prefix.parse::<u8>() {
            Ok(len) if len <= family.width() => Ok(len),
            _ => Err(Error::prefix(
                input,
                format!("{prefix} is not between 0 and {}", family.width()),
            )),
        };
    }

    if family == Family::V4 {
        if let Ok(mask) = Address::parse(prefix) {
            if mask.family() == Family::V4 {
                let bits = mask.to_integer() as u32;
                if let Some(len) = prefix_from_netmask(bits) {
                    return Ok(len);
                }
                if let Some(len) = prefix_from_netmask(!bits) {
                    return Ok(len);
                }
            }
            return Err(Error::prefix(
                input,
                format!("{prefix} is not a valid netmask or hostmask"),
            ));
        }
    }

    Err(Error::prefix(
        input,
        format!("'{prefix}' is not a valid prefix length"),
    ))
}

/// Prefix length of a contiguous netmask, `None` for anything else.
fn prefix_from_netmask(bits: u32) -> Option<u8> {
    let len = bits.leading_ones();
    let expected = u32::MAX.checked_shl(32 - len).unwrap_or(0);
    (bits == expected).then_some(len as u8)
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Network::parse(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.with_prefixlen())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::parse(&s).map_err(de::Error::custom)
    }
}
