//! Windowed sibling subnet listing.
//!
//! Only the pages within `pages_before_after` of the centre page are
//! materialised, never the whole sibling set.

use crate::config::CalcConfig;
use crate::models::{host_range, Network, PageWindow, SiblingWindow, SubnetEntry};
use std::net::Ipv4Addr;
use std::num::IntErrorKind;

/// List the siblings of `net` inside `parent` around the requested page.
///
/// `requested_page` is raw user text. Blank or non-numeric text centres the
/// window on the page holding `net`; numbers are clamped to the page range.
pub fn paginate(
    net: Network,
    parent: Network,
    requested_page: Option<&str>,
    config: &CalcConfig,
) -> SiblingWindow {
    if parent.mask >= net.mask {
        log::debug!("{net} sits on its parent boundary {parent}, no sibling list");
        return single_entry(net);
    }

    let per_page = config.items_per_page.max(1) as u64;
    let radius = config.pages_before_after as u64;

    let total_subnets = 1u64 << (net.mask - parent.mask);
    let total_pages = total_subnets.div_ceil(per_page).max(1);
    let subnet_size = net.num_addresses();
    let current_index = u64::from(u32::from(net.addr) - u32::from(parent.addr)) / subnet_size;
    let own_page = current_index / per_page + 1;

    let center_page = match requested_page.and_then(parse_page) {
        Some(page) => page.clamp(1, total_pages as i64) as u64,
        None => own_page,
    };
    let window_start_page = center_page.saturating_sub(radius).max(1);
    let window_end_page = center_page.saturating_add(radius).min(total_pages);

    let start_index = (window_start_page - 1) * per_page;
    let end_index = total_subnets.min(window_end_page * per_page);
    log::debug!(
        "{total_subnets} x /{} in {parent}: page {center_page}/{total_pages}, indices {start_index}..{end_index}",
        net.mask
    );

    let parent_bits = u32::from(parent.addr);
    let entries = (start_index..end_index)
        .map(|index| {
            let sibling = Network {
                addr: Ipv4Addr::from(parent_bits + (index * subnet_size) as u32),
                mask: net.mask,
            };
            subnet_entry(sibling, sibling == net, index, index / per_page + 1)
        })
        .collect();

    SiblingWindow {
        entries,
        pages: PageWindow {
            current_page: center_page,
            total_pages,
            window_start_page,
            window_end_page,
        },
        total_subnets,
        current_index,
        show_subnet_list: true,
    }
}

/// Page number typed by the user, `None` when blank or not an integer.
///
/// Integers beyond the `i64` range saturate so they still clamp to the
/// first or last page.
fn parse_page(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(page) => Some(page),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Some(i64::MIN),
        Err(e) => {
            log::debug!("Ignoring page {raw:?}: {e}");
            None
        }
    }
}

fn single_entry(net: Network) -> SiblingWindow {
    SiblingWindow {
        entries: vec![subnet_entry(net, true, 0, 1)],
        pages: PageWindow::default(),
        total_subnets: 1,
        current_index: 0,
        show_subnet_list: false,
    }
}

fn subnet_entry(net: Network, is_current: bool, index: u64, page: u64) -> SubnetEntry {
    let (lo, hi) = host_range(net);
    SubnetEntry {
        network: net.addr.to_string(),
        range: format!("{lo} - {hi}"),
        broadcast: net.hi().to_string(),
        is_current,
        index,
        page,
    }
}
