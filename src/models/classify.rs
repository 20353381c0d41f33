//! Address classification against the IANA special-purpose registries.
//!
//! Each category is tested on its own, so an address can be both loopback
//! and private. An address is global only when no other category applies.

use super::address::{Address, Family};
use super::network::Network;
use lazy_static::lazy_static;
use serde::Serialize;

fn table(cidrs: &[&str]) -> Vec<Network> {
    cidrs
        .iter()
        .map(|cidr| Network::parse(cidr).expect("Invalid reserved-range table entry?"))
        .collect()
}

lazy_static! {
    static ref V4_LOOPBACK: Network = Network::parse("127.0.0.0/8").expect("Invalid Network?");
    static ref V4_LINK_LOCAL: Network =
        Network::parse("169.254.0.0/16").expect("Invalid Network?");
    static ref V4_MULTICAST: Network = Network::parse("224.0.0.0/4").expect("Invalid Network?");
    static ref V4_RESERVED: Network = Network::parse("240.0.0.0/4").expect("Invalid Network?");
    static ref V4_PRIVATE: Vec<Network> = table(&[
        "0.0.0.0/8",
        "10.0.0.0/8",
        "100.64.0.0/10", // shared address space, RFC 6598
        "127.0.0.0/8",
        "169.254.0.0/16",
        "172.16.0.0/12",
        "192.0.0.0/24",
        "192.0.2.0/24",
        "192.168.0.0/16",
        "198.18.0.0/15",
        "198.51.100.0/24",
        "203.0.113.0/24",
        "240.0.0.0/4",
        "255.255.255.255/32",
    ]);
    // Inside 192.0.0.0/24 but globally reachable.
    static ref V4_PRIVATE_EXCEPTIONS: Vec<Network> = table(&["192.0.0.9/32", "192.0.0.10/32"]);
    static ref V6_LINK_LOCAL: Network = Network::parse("fe80::/10").expect("Invalid Network?");
    static ref V6_MULTICAST: Network = Network::parse("ff00::/8").expect("Invalid Network?");
    static ref V6_RESERVED: Vec<Network> = table(&[
        "::/8", "100::/8", "200::/7", "400::/6", "800::/5", "1000::/4", "4000::/3", "6000::/3",
        "8000::/3", "a000::/3", "c000::/3", "e000::/4", "f000::/5", "f800::/6", "fe00::/9",
    ]);
    static ref V6_PRIVATE: Vec<Network> = table(&[
        "::1/128",
        "::/128",
        "::ffff:0:0/96",
        "64:ff9b:1::/48",
        "100::/64",
        "2001::/23",
        "2001:db8::/32",
        "2002::/16",
        "3fff::/20",
        "fc00::/7",
        "fe80::/10",
    ]);
    static ref V6_PRIVATE_EXCEPTIONS: Vec<Network> = table(&[
        "2001:1::1/128",
        "2001:1::2/128",
        "2001:3::/32",
        "2001:4:112::/48",
        "2001:20::/28",
        "2001:30::/28",
    ]);
}

fn in_any(networks: &[Network], addr: &Address) -> bool {
    networks.iter().any(|net| net.contains(addr))
}

impl Address {
    pub fn is_unspecified(&self) -> bool {
        self.to_integer() == 0
    }

    pub fn is_loopback(&self) -> bool {
        match self.family() {
            Family::V4 => V4_LOOPBACK.contains(self),
            Family::V6 => self.to_integer() == 1,
        }
    }

    pub fn is_link_local(&self) -> bool {
        match self.family() {
            Family::V4 => V4_LINK_LOCAL.contains(self),
            Family::V6 => V6_LINK_LOCAL.contains(self),
        }
    }

    pub fn is_multicast(&self) -> bool {
        match self.family() {
            Family::V4 => V4_MULTICAST.contains(self),
            Family::V6 => V6_MULTICAST.contains(self),
        }
    }

    /// IETF reserved space. For IPv6 this covers every block not yet
    /// allocated for unicast use, so `::1` is also reserved.
    pub fn is_reserved(&self) -> bool {
        match self.family() {
            Family::V4 => V4_RESERVED.contains(self),
            Family::V6 => in_any(&V6_RESERVED, self),
        }
    }

    /// Not globally reachable per the special-purpose registries.
    ///
    /// IPv4-mapped IPv6 addresses take the answer of their IPv4 address.
    pub fn is_private(&self) -> bool {
        match self.family() {
            Family::V4 => {
                in_any(&V4_PRIVATE, self) && !in_any(&V4_PRIVATE_EXCEPTIONS, self)
            }
            Family::V6 => match self.ipv4_mapped() {
                Some(v4) => v4.is_private(),
                None => in_any(&V6_PRIVATE, self) && !in_any(&V6_PRIVATE_EXCEPTIONS, self),
            },
        }
    }

    pub fn is_global(&self) -> bool {
        !(self.is_private()
            || self.is_loopback()
            || self.is_multicast()
            || self.is_link_local()
            || self.is_reserved()
            || self.is_unspecified())
    }

    pub fn flags(&self) -> Flags {
        Flags {
            global: self.is_global(),
            private: self.is_private(),
            reserved: self.is_reserved(),
            loopback: self.is_loopback(),
            multicast: self.is_multicast(),
            link_local: self.is_link_local(),
            unspecified: self.is_unspecified(),
        }
    }
}

/// All classification results for one address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub global: bool,
    pub private: bool,
    pub reserved: bool,
    pub loopback: bool,
    pub multicast: bool,
    pub link_local: bool,
    pub unspecified: bool,
}
