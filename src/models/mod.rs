//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Network`] - IPv4 network in CIDR notation, plus the address arithmetic
//! - [`SubnetEntry`], [`PageWindow`] and [`SiblingWindow`] - sibling listing records

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    binary_octets, broadcast_addr, cut_addr, exploded, get_cidr_mask, host_range, is_private,
    prefix_from_mask, supernet, wildcard_mask, Network, MAX_LENGTH,
};
pub use subnet::{PageWindow, SiblingWindow, SubnetEntry};
