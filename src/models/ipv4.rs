//! IPv4 network arithmetic.
//!
//! Provides the [`Network`] value type (an address/prefix pair that always
//! points at a network base) and the bit-level helpers used by the parser,
//! the parent resolver, the paginator and the report formatter.

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Wildcard (host) mask for a subnet mask.
pub fn wildcard_mask(mask: u32) -> u32 {
    mask ^ u32::MAX
}

/// Prefix length of a subnet mask, `None` unless the set bits form one
/// contiguous run starting at the top bit.
pub fn prefix_from_mask(mask: u32) -> Option<u8> {
    let len = mask.leading_ones() as u8;
    match get_cidr_mask(len) {
        Ok(expected) if expected == mask => Some(len),
        _ => None,
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | wildcard_mask(mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// Widen a network by one prefix bit.
pub fn supernet(net: Network) -> Result<Network, Box<dyn Error>> {
    if net.mask == 0 {
        return Err(format!("Network {net} has no supernet").into());
    }
    Network::new(net.addr, net.mask - 1)
}

/// Usable host range of a network.
///
/// A /31 or /32 has no distinct usable range, both bounds are then the
/// network address itself.
pub fn host_range(net: Network) -> (Ipv4Addr, Ipv4Addr) {
    if net.num_addresses() > 2 {
        let lo = u32::from(net.addr);
        let hi = u32::from(net.hi());
        (Ipv4Addr::from(lo + 1), Ipv4Addr::from(hi - 1))
    } else {
        (net.addr, net.addr)
    }
}

/// Render a 32-bit value as dotted decimal, e.g. `255.255.255.0`.
pub fn exploded(bits: u32) -> String {
    Ipv4Addr::from(bits).octets().iter().join(".")
}

/// Render a 32-bit value as dotted 8-bit binary octets.
pub fn binary_octets(bits: u32) -> String {
    Ipv4Addr::from(bits)
        .octets()
        .iter()
        .map(|b| format!("{b:08b}"))
        .join(".")
}

// IANA special-purpose blocks that are not globally routable.
const PRIVATE_BLOCKS: [([u8; 4], u8); 14] = [
    ([0, 0, 0, 0], 8),
    ([10, 0, 0, 0], 8),
    ([127, 0, 0, 0], 8),
    ([169, 254, 0, 0], 16),
    ([172, 16, 0, 0], 12),
    ([192, 0, 0, 0], 29),
    ([192, 0, 0, 170], 31),
    ([192, 0, 2, 0], 24),
    ([192, 168, 0, 0], 16),
    ([198, 18, 0, 0], 15),
    ([198, 51, 100, 0], 24),
    ([203, 0, 113, 0], 24),
    ([240, 0, 0, 0], 4),
    ([255, 255, 255, 255], 32),
];

lazy_static! {
    static ref PRIVATE_NETWORKS: Vec<Network> = PRIVATE_BLOCKS
        .iter()
        .map(|(octets, len)| {
            Network::new(Ipv4Addr::from(*octets), *len).expect("Invalid private block")
        })
        .collect();
}

/// True when the whole network sits inside a private (non-global) block.
pub fn is_private(net: Network) -> bool {
    PRIVATE_NETWORKS
        .iter()
        .any(|block| block.contains(net.lo()) && block.contains(net.hi()))
}

/// IPv4 network in CIDR notation.
///
/// `addr` is always the network base: host bits below the prefix are zero.
/// Build it with [`Network::new`], which clears host bits and rejects a
/// prefix above 32. A struct literal skips both checks, and a literal with
/// `mask > 32` makes [`Network::netmask`] and [`Network::hi`] panic.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// The network base address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Network {
    /// Build a network, clearing any host bits in `addr`.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Network, Box<dyn Error>> {
        let addr = cut_addr(addr, mask)?;
        Ok(Network { addr, mask })
    }

    /// Subnet mask as u32.
    pub fn netmask(&self) -> u32 {
        get_cidr_mask(self.mask)
            .unwrap_or_else(|e| panic!("Invalid prefix length for {}: {}", self, e))
    }

    /// Wildcard mask as u32.
    pub fn wildcard(&self) -> u32 {
        wildcard_mask(self.netmask())
    }

    /// Total number of addresses covered, including network and broadcast.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.netmask() == u32::from(self.addr)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
