//! Allowlist of the networks Nexmo sends webhook callbacks from.
//!
//! This is an advisory gate: Nexmo does not sign these callbacks, so a source
//! address check is the only provenance signal available.

use std::net::{IpAddr, Ipv4Addr};

/// Published Nexmo callback networks as (network address, prefix length).
const TRUSTED_NETWORKS: [(Ipv4Addr, u8); 4] = [
    (Ipv4Addr::new(174, 37, 245, 32), 29),
    (Ipv4Addr::new(174, 36, 197, 192), 28),
    (Ipv4Addr::new(173, 193, 199, 16), 28),
    (Ipv4Addr::new(119, 81, 44, 0), 28),
];

/// Returns `true` if `ip` parses as an address inside one of Nexmo's networks.
///
/// Unparsable input is never trusted.
pub fn is_trusted_ip(ip: &str) -> bool {
    ip.trim()
        .parse::<IpAddr>()
        .map(is_trusted_addr)
        .unwrap_or(false)
}

/// Returns `true` if `addr` is inside one of Nexmo's networks.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are checked as IPv4.
pub fn is_trusted_addr(addr: IpAddr) -> bool {
    let IpAddr::V4(v4) = addr.to_canonical() else {
        return false;
    };
    TRUSTED_NETWORKS
        .iter()
        .any(|&(network, prefix)| contains(network, prefix, v4))
}

fn contains(network: Ipv4Addr, prefix: u8, addr: Ipv4Addr) -> bool {
    let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
    u32::from(network) & mask == u32::from(addr) & mask
}
