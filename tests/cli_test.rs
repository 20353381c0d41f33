//! End to end tests of the ipinfo binary.

use std::process::{Command, Output};

fn ipinfo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ipinfo"))
        .args(args)
        .output()
        .expect("Failed to run ipinfo")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("Error converting utf8")
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("Error converting utf8")
}

#[test]
fn test_ip_command() {
    let out = ipinfo(&["ip", "192.168.1.1"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Exploded:  192.168.1.1   c0.a8.01.01"));
    assert!(text.contains("11000000.10101000.00000001.00000001"));
    assert!(text.contains("Global: false  Private: true"));
}

#[test]
fn test_ip_bad_input() {
    let out = ipinfo(&["ip", "not-an-address"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty(), "no partial output expected");
    assert!(stderr(&out).contains("not-an-address"));
}

#[test]
fn test_nw_command() {
    let out = ipinfo(&["nw", "192.168.0.0/24"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Network address:  192.168.0.0"));
    assert!(text.contains("First:  192.168.0.1"));
    assert!(text.contains("Last:  192.168.0.254"));
    assert!(text.contains("Broadcast:  192.168.0.255"));
    assert!(text.contains("Netmask:  255.255.255.0"));
    assert!(text.contains("Number of addresses:  256"));
}

#[test]
fn test_nw_host_bits() {
    let out = ipinfo(&["nw", "192.168.0.1/24"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("192.168.0.1/24"));
}

#[test]
fn test_range_command() {
    let out = ipinfo(&["range", "192.168.0.1", "192.168.0.4"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "192.168.0.1/32\n192.168.0.2/31\n192.168.0.4/32\n"
    );
}

#[test]
fn test_range_family_mismatch() {
    let out = ipinfo(&["range", "10.0.0.1", "::1"]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("10.0.0.1") && err.contains("::1"));
}

#[test]
fn test_missing_argument_hint() {
    for cmd in ["ip", "nw", "range"] {
        let out = ipinfo(&[cmd]);
        assert!(out.status.success(), "{cmd} without argument should exit 0");
        assert_eq!(stdout(&out), format!("See: ipinfo {cmd} --help\n"));
    }
}
