//! Class boundary parent lookup.
//!
//! The parent is the /24, /16 or /8 block the sibling list is drawn from:
//! - `10.10.10.1/30` -> `10.10.10.0/24`
//! - `10.10.10.1/19` -> `10.10.0.0/16`
//! - `10.10.10.1/15` -> `10.0.0.0/8`
//! - `192.168.1.1/15` -> `192.0.0.0/8`

use crate::models::{supernet, Network};
use std::net::Ipv4Addr;

/// Find the class-aligned parent of `net`.
///
/// A network of /8 or wider gets the /8 of its first octet, which is
/// narrower than the network itself when the prefix is below 8.
pub fn get_parent_network(net: Network) -> Network {
    match net.mask {
        25..=32 => supernet_to_prefix(net, 24),
        17..=24 => supernet_to_prefix(net, 16),
        9..=16 => supernet_to_prefix(net, 8),
        _ => Network {
            addr: Ipv4Addr::new(net.addr.octets()[0], 0, 0, 0),
            mask: 8,
        },
    }
}

/// Widen one prefix bit at a time until `target` is reached.
fn supernet_to_prefix(net: Network, target: u8) -> Network {
    let mut current = net;
    while current.mask > target {
        current = match supernet(current) {
            Ok(wider) => wider,
            Err(e) => {
                log::warn!("Stopped widening {net} at {current}: {e}");
                break;
            }
        };
    }
    log::debug!("parent of {net} is {current}");
    current
}
