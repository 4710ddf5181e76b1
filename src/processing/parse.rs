//! Free-form subnet input parsing.
//!
//! Accepts:
//! - CIDR notation: `192.168.1.1/24` (or `192.168.1.1/255.255.255.0`)
//! - address and subnet mask: `192.168.1.1 255.255.255.0`
//! - address and wildcard mask: `192.168.1.1 0.0.0.255`
//! - a bare address, taken as a single host `/32`
//!
//! Host bits are cleared, `10.0.0.5/24` parses as `10.0.0.0/24`.

use crate::error::CalcError;
use crate::models::{prefix_from_mask, wildcard_mask, Network, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

type MaskParser = fn(&str) -> Option<u8>;

/// Mask notations, tried in order until one matches.
const MASK_PARSERS: [(&str, MaskParser); 3] = [
    ("prefix", parse_prefix),
    ("netmask", parse_netmask),
    ("wildcard", parse_wildcard),
];

lazy_static! {
    static ref RE_PREFIX: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").expect("Invalid Regex?");
}

/// Parse user input into a network.
///
/// Every failure collapses into [`CalcError::InvalidInput`].
pub fn parse_input(input: &str) -> Result<Network, CalcError> {
    let input = input.trim();
    if input.is_empty() {
        log::warn!("Rejected empty subnet input");
        return Err(CalcError::InvalidInput);
    }

    let parsed = if input.contains('/') {
        parse_cidr(input)
    } else {
        let tokens: Vec<&str> = RE_WHITESPACE.split(input).collect();
        log::trace!("split tokens={:?}", tokens);
        match tokens.as_slice() {
            [addr, mask] => parse_addr_mask(addr, mask),
            _ => parse_host(input),
        }
    };

    match parsed {
        Some(net) => {
            log::debug!("parse_input({input:?}) = {net}");
            Ok(net)
        }
        None => {
            log::warn!("Rejected subnet input {input:?}");
            Err(CalcError::InvalidInput)
        }
    }
}

fn parse_cidr(input: &str) -> Option<Network> {
    let (addr, mask) = input.split_once('/')?;
    if mask.contains('/') {
        return None;
    }
    parse_addr_mask(addr, mask)
}

fn parse_addr_mask(addr: &str, mask: &str) -> Option<Network> {
    let addr: Ipv4Addr = addr.parse().ok()?;
    let len = MASK_PARSERS.iter().find_map(|(kind, parser)| {
        let len = parser(mask)?;
        log::trace!("mask {mask:?} read as {kind} /{len}");
        Some(len)
    })?;
    Network::new(addr, len).ok()
}

fn parse_host(input: &str) -> Option<Network> {
    let addr: Ipv4Addr = input.parse().ok()?;
    Network::new(addr, MAX_LENGTH).ok()
}

/// Prefix length as plain digits, `0` to `32`.
fn parse_prefix(mask: &str) -> Option<u8> {
    if !RE_PREFIX.is_match(mask) {
        return None;
    }
    mask.parse::<u8>().ok().filter(|len| *len <= MAX_LENGTH)
}

/// Dotted subnet mask with contiguous leading ones, e.g. `255.255.240.0`.
fn parse_netmask(mask: &str) -> Option<u8> {
    let mask: Ipv4Addr = mask.parse().ok()?;
    prefix_from_mask(u32::from(mask))
}

/// Dotted wildcard mask, the complement of a subnet mask, e.g. `0.0.15.255`.
fn parse_wildcard(mask: &str) -> Option<u8> {
    let wildcard: Ipv4Addr = mask.parse().ok()?;
    prefix_from_mask(wildcard_mask(u32::from(wildcard)))
}
