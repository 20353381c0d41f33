//! Reports printed by the `ip`, `nw` and `range` commands.
//!
//! Each report is a plain struct of already-rendered values, so the same
//! data backs the text layout and the `--json` output.

use super::format::{count_forms, prefix_forms, to_binary_grouped, to_hex_grouped};
use crate::error::Result;
use crate::models::{Address, Flags, Network};
use serde::Serialize;

const LABEL_WIDTH: usize = 19;

/// One address with its hex and binary renderings.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddressForms {
    pub address: String,
    pub hex: String,
    pub binary: String,
}

impl AddressForms {
    pub fn new(addr: &Address) -> Self {
        AddressForms {
            address: addr.to_string(),
            hex: to_hex_grouped(addr),
            binary: to_binary_grouped(addr),
        }
    }

    fn lines(&self, label: &str) -> [String; 2] {
        [
            labelled(label, &format!("{}   {}", self.address, self.hex)),
            format!("{:width$}{}", "", self.binary, width = LABEL_WIDTH + 3),
        ]
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AddressReport {
    pub exploded: String,
    pub compressed: String,
    pub hex: String,
    pub binary: String,
    pub max_prefix_length: u8,
    pub reverse_pointer: String,
    pub version: u8,
    pub is: Flags,
}

impl AddressReport {
    pub fn new(addr: &Address) -> Self {
        AddressReport {
            exploded: addr.exploded(),
            compressed: addr.compressed(),
            hex: to_hex_grouped(addr),
            binary: to_binary_grouped(addr),
            max_prefix_length: addr.max_prefix_len(),
            reverse_pointer: addr.reverse_pointer(),
            version: addr.version(),
            is: addr.flags(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let binary = format!("{:width$}{}", "", self.binary, width = LABEL_WIDTH + 3);
        vec![
            labelled("Exploded", &format!("{}   {}", self.exploded, self.hex)),
            binary.clone(),
            labelled("Compressed", &format!("{}   {}", self.compressed, self.hex)),
            binary,
            labelled("Max prefix length", &prefix_forms(self.max_prefix_length)),
            labelled("Reverse PTR", &self.reverse_pointer),
            labelled("IP version", &self.version.to_string()),
            String::new(),
            "Is:".to_string(),
            flags_line(&self.is),
        ]
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkReport {
    pub network_address: AddressForms,
    pub first: AddressForms,
    pub last: AddressForms,
    pub broadcast: AddressForms,
    pub netmask: AddressForms,
    pub hostmask: AddressForms,
    pub exploded: String,
    pub compressed: String,
    pub prefix_length: u8,
    pub max_prefix_length: u8,
    pub num_addresses: String,
    #[serde(skip)]
    pub num_addresses_forms: String,
    pub reverse_pointer: String,
    pub version: u8,
    pub with_hostmask: String,
    pub with_netmask: String,
    pub with_prefixlen: String,
    pub is: Flags,
}

impl NetworkReport {
    pub fn new(net: &Network) -> Result<Self> {
        let count = net.num_addresses();
        Ok(NetworkReport {
            network_address: AddressForms::new(&net.network_address()),
            first: AddressForms::new(&net.first_usable()?),
            last: AddressForms::new(&net.last_usable()?),
            broadcast: AddressForms::new(&net.broadcast_address()),
            netmask: AddressForms::new(&net.netmask()),
            hostmask: AddressForms::new(&net.hostmask()),
            exploded: net.exploded(),
            compressed: net.compressed(),
            prefix_length: net.prefix_len(),
            max_prefix_length: net.max_prefix_len(),
            num_addresses: count.to_string(),
            num_addresses_forms: count_forms(&count),
            reverse_pointer: net.reverse_pointer(),
            version: net.version(),
            with_hostmask: net.with_hostmask(),
            with_netmask: net.with_netmask(),
            with_prefixlen: net.with_prefixlen(),
            is: net.network_address().flags(),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (label, forms) in [
            ("Network address", &self.network_address),
            ("First", &self.first),
            ("Last", &self.last),
            ("Broadcast", &self.broadcast),
            ("Netmask", &self.netmask),
            ("Hostmask", &self.hostmask),
        ] {
            lines.extend(forms.lines(label));
        }
        lines.extend([
            labelled("Exploded", &self.exploded),
            labelled("Compressed", &self.compressed),
            labelled("Prefix length", &prefix_forms(self.prefix_length)),
            labelled("Max prefix length", &prefix_forms(self.max_prefix_length)),
            labelled("Number of addresses", &self.num_addresses_forms),
            labelled("Reverse PTR", &self.reverse_pointer),
            labelled("IP version", &self.version.to_string()),
            String::new(),
            "With:".to_string(),
            format!("   Hostmask: {}", self.with_hostmask),
            format!("    Netmask: {}", self.with_netmask),
            format!("  Prefixlen: {}", self.with_prefixlen),
            "Is:".to_string(),
            flags_line(&self.is),
        ]);
        lines
    }
}

/// One CIDR block per line, ascending.
pub fn range_lines(blocks: &[Network]) -> Vec<String> {
    blocks.iter().map(|b| b.with_prefixlen()).collect()
}

fn labelled(label: &str, value: &str) -> String {
    format!("{label:>width$}:  {value}", width = LABEL_WIDTH)
}

fn flags_line(flags: &Flags) -> String {
    format!(
        "  Global: {}  Private: {}  Reserved: {}  Loopback: {}  Multicast: {}  Link local: {}  Unspecified: {}",
        flags.global,
        flags.private,
        flags.reserved,
        flags.loopback,
        flags.multicast,
        flags.link_local,
        flags.unspecified
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_report() {
        let report = AddressReport::new(&Address::parse("192.168.1.1").unwrap());
        assert_eq!(report.exploded, "192.168.1.1");
        assert_eq!(report.hex, "c0.a8.01.01");
        assert_eq!(report.binary, "11000000.10101000.00000001.00000001");
        assert!(report.is.private);
        assert!(!report.is.global);

        let lines = report.lines();
        assert_eq!(lines[0], "           Exploded:  192.168.1.1   c0.a8.01.01");
        assert_eq!(
            lines[1],
            "                      11000000.10101000.00000001.00000001"
        );
        assert_eq!(lines[4], "  Max prefix length:  32   0x20   0b100000");
        assert_eq!(lines[5], "        Reverse PTR:  1.1.168.192.in-addr.arpa");
        assert_eq!(lines[6], "         IP version:  4");
        assert!(lines[9].starts_with("  Global: false  Private: true"));
    }

    #[test]
    fn test_network_report() {
        let net = Network::parse("192.168.0.0/24").unwrap();
        let report = NetworkReport::new(&net).unwrap();
        assert_eq!(report.network_address.address, "192.168.0.0");
        assert_eq!(report.first.address, "192.168.0.1");
        assert_eq!(report.last.address, "192.168.0.254");
        assert_eq!(report.broadcast.address, "192.168.0.255");
        assert_eq!(report.netmask.address, "255.255.255.0");
        assert_eq!(report.netmask.hex, "ff.ff.ff.00");
        assert_eq!(report.num_addresses, "256");

        let lines = report.lines();
        assert_eq!(lines[0], "    Network address:  192.168.0.0   c0.a8.00.00");
        assert_eq!(lines[2], "              First:  192.168.0.1   c0.a8.00.01");
        assert!(lines.contains(&"Number of addresses:  256   0x100   0b100000000".to_string()));
        assert!(lines.contains(&"        Reverse PTR:  0.168.192.in-addr.arpa".to_string()));
        assert!(lines.contains(&"    Netmask: 192.168.0.0/255.255.255.0".to_string()));
    }

    #[test]
    fn test_network_report_json() {
        let net = Network::parse("2001:db8::/32").unwrap();
        let report = NetworkReport::new(&net).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["num_addresses"], "79228162514264337593543950336");
        assert_eq!(json["with_prefixlen"], "2001:db8::/32");
        assert_eq!(json["is"]["private"], true);
        assert!(json.get("num_addresses_forms").is_none());
    }

    #[test]
    fn test_range_lines() {
        let blocks = vec![
            Network::parse("10.0.0.1/32").unwrap(),
            Network::parse("10.0.0.2/31").unwrap(),
        ];
        assert_eq!(range_lines(&blocks), ["10.0.0.1/32", "10.0.0.2/31"]);
    }
}
