//! Integration tests for ipinfo
//!
//! These tests drive the public kernel API the same way the commands do.

use ipinfo::output::{to_binary_grouped, to_hex_grouped, AddressReport, NetworkReport};
use ipinfo::{summarize_range, Address, Error, Family, Network};

#[test]
fn test_ip_scenario() {
    let addr = Address::parse("192.168.1.1").expect("Failed to parse address");
    assert_eq!(addr.exploded(), "192.168.1.1");
    assert_eq!(to_hex_grouped(&addr), "c0.a8.01.01");
    assert_eq!(
        to_binary_grouped(&addr),
        "11000000.10101000.00000001.00000001"
    );
    assert!(addr.is_private());
    assert!(!addr.is_global());
}

#[test]
fn test_nw_scenario() {
    let net = Network::parse("192.168.0.0/24").expect("Failed to parse network");
    assert_eq!(net.network_address().to_string(), "192.168.0.0");
    assert_eq!(net.first_usable().unwrap().to_string(), "192.168.0.1");
    assert_eq!(net.last_usable().unwrap().to_string(), "192.168.0.254");
    assert_eq!(net.broadcast_address().to_string(), "192.168.0.255");
    assert_eq!(net.netmask().to_string(), "255.255.255.0");
    assert_eq!(net.num_addresses().to_u128(), Some(256));
}

#[test]
fn test_range_scenarios() {
    let a = Address::parse("192.168.0.0").unwrap();
    let b = Address::parse("192.168.0.255").unwrap();
    let blocks = summarize_range(a, b).expect("Failed to summarize");
    assert_eq!(blocks, vec![Network::parse("192.168.0.0/24").unwrap()]);

    let a = Address::parse("192.168.0.1").unwrap();
    let b = Address::parse("192.168.0.4").unwrap();
    let blocks: Vec<String> = summarize_range(a, b)
        .unwrap()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(blocks, ["192.168.0.1/32", "192.168.0.2/31", "192.168.0.4/32"]);
}

#[test]
fn test_ip_not_an_address() {
    let err = Address::parse("not-an-address").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(err.input(), "not-an-address");
}

#[test]
fn test_ipv6_network_report() {
    let net = Network::parse("2001:db8::/126").unwrap();
    assert_eq!(net.family(), Family::V6);
    let report = NetworkReport::new(&net).expect("Failed to build report");
    assert_eq!(report.first.address, "2001:db8::1");
    assert_eq!(report.last.address, "2001:db8::2");
    assert_eq!(report.broadcast.address, "2001:db8::3");
    assert_eq!(report.num_addresses, "4");
    assert_eq!(report.version, 6);
}

#[test]
fn test_ipv6_address_report() {
    let report = AddressReport::new(&Address::parse("fe80::1").unwrap());
    assert_eq!(report.exploded, "fe80:0000:0000:0000:0000:0000:0000:0001");
    assert_eq!(report.hex, report.exploded);
    assert_eq!(report.max_prefix_length, 128);
    assert!(report.is.link_local);
    assert!(report.is.private);
    assert!(!report.is.global);
}

#[test]
fn test_summarized_blocks_reparse() {
    let a = Address::parse("10.0.0.3").unwrap();
    let b = Address::parse("10.0.1.200").unwrap();
    for block in summarize_range(a, b).unwrap() {
        let reparsed = Network::parse(&block.to_string()).expect("block should be strict CIDR");
        assert_eq!(reparsed, block);
    }
}
