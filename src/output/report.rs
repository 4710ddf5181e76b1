//! Report assembly.
//!
//! Turns a network, its parent and the sibling window into the flat record
//! handed to the renderers. Pure formatting, nothing here can fail.

use crate::config::CalcConfig;
use crate::models::{
    binary_octets, exploded, host_range, is_private, Network, SiblingWindow, SubnetEntry,
};
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything shown for one calculation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub network: String,
    pub host_min: String,
    pub host_max: String,
    pub broadcast: String,
    /// Usable host count, thousands separated.
    pub hosts_usable: String,
    pub netmask: String,
    pub wildcard: String,
    pub binary_mask: String,
    pub ip_class: String,
    pub cidr_full: String,
    /// `Private` or `Public`.
    pub ip_type: String,
    pub binary_id: String,
    pub in_addr: String,
    pub all_nets: Vec<SubnetEntry>,
    pub parent_desc: String,
    pub show_subnet_list: bool,
    /// Plain text copy of the fields above, one `Label: value` per line.
    pub vertical: String,
    pub items_per_page: usize,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_subnets: u64,
    pub window_start_page: u64,
    pub window_end_page: u64,
    pub current_index: u64,
}

pub fn format_report(
    net: Network,
    parent: Network,
    window: SiblingWindow,
    config: &CalcConfig,
) -> SubnetReport {
    let (host_min, host_max) = host_range(net);
    let hosts_usable = group_thousands(net.num_addresses().saturating_sub(2));
    let netmask = exploded(net.netmask());
    let wildcard = exploded(net.wildcard());
    let binary_mask = binary_octets(net.netmask());
    let binary_id = binary_octets(u32::from(net.addr));
    let ip_class = ip_class(net.addr).to_string();
    let ip_type = if is_private(net) { "Private" } else { "Public" }.to_string();
    let in_addr = reverse_dns_name(net.addr);
    let cidr_full = net.to_string();

    let parent_desc = if window.show_subnet_list && window.total_subnets > 1 {
        format!(
            "All {} Possible /{} Networks in {}",
            group_thousands(window.total_subnets),
            net.mask,
            wildcard_network(parent)
        )
    } else {
        format!("Network: {net}")
    };

    let vertical = [
        ("Network Address", net.addr.to_string()),
        ("Binary ID", binary_id.clone()),
        ("Subnet Mask", netmask.clone()),
        ("Binary Subnet Mask", binary_mask.clone()),
        ("Wildcard Mask", wildcard.clone()),
        ("Broadcast Address", net.hi().to_string()),
        ("CIDR Notation", cidr_full.clone()),
        ("Usable Host IP Range", format!("{host_min} - {host_max}")),
        ("Number of Usable Hosts", hosts_usable.clone()),
        ("IP Class", ip_class.clone()),
        ("IP Type", ip_type.clone()),
        ("in-addr.arpa", in_addr.clone()),
    ]
    .iter()
    .map(|(label, value)| format!("{label}: {value}"))
    .join("\n");

    SubnetReport {
        network: net.addr.to_string(),
        host_min: host_min.to_string(),
        host_max: host_max.to_string(),
        broadcast: net.hi().to_string(),
        hosts_usable,
        netmask,
        wildcard,
        binary_mask,
        ip_class,
        cidr_full,
        ip_type,
        binary_id,
        in_addr,
        parent_desc,
        show_subnet_list: window.show_subnet_list,
        vertical,
        items_per_page: config.items_per_page,
        total_pages: window.pages.total_pages,
        current_page: window.pages.current_page,
        total_subnets: window.total_subnets,
        window_start_page: window.pages.window_start_page,
        window_end_page: window.pages.window_end_page,
        current_index: window.current_index,
        all_nets: window.entries,
    }
}

/// Classful address class from the first octet.
pub fn ip_class(addr: Ipv4Addr) -> &'static str {
    match addr.octets()[0] {
        0..=127 => "A",
        128..=191 => "B",
        192..=223 => "C",
        224..=239 => "D",
        _ => "E",
    }
}

/// Reverse lookup name, e.g. `0.1.168.192.in-addr.arpa`.
pub fn reverse_dns_name(addr: Ipv4Addr) -> String {
    format!("{}.in-addr.arpa", addr.octets().iter().rev().join("."))
}

/// Network with every octet not fully covered by the mask shown as `*`,
/// e.g. `10.100.*.*`.
pub fn wildcard_network(net: Network) -> String {
    let mask = Ipv4Addr::from(net.netmask()).octets();
    net.addr
        .octets()
        .iter()
        .zip(mask.iter())
        .map(|(octet, m)| {
            if *m == 255 {
                octet.to_string()
            } else {
                "*".to_string()
            }
        })
        .join(".")
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
}
