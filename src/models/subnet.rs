//! Sibling subnet listing records.

use serde::Serialize;

/// One row of the sibling subnet list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetEntry {
    /// Network base address.
    pub network: String,
    /// Usable host range, `"{min} - {max}"`.
    pub range: String,
    /// Broadcast address.
    pub broadcast: String,
    /// True for the network the report was asked about.
    pub is_current: bool,
    /// Zero-based ordinal among its siblings.
    pub index: u64,
    /// One-based page this entry is listed on.
    pub page: u64,
}

/// Page numbers around the page being shown.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u64,
    pub total_pages: u64,
    pub window_start_page: u64,
    pub window_end_page: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        PageWindow {
            current_page: 1,
            total_pages: 1,
            window_start_page: 1,
            window_end_page: 1,
        }
    }
}

/// The materialised part of the sibling list plus its paging state.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SiblingWindow {
    /// Entries for every page in `pages.window_start_page..=pages.window_end_page`.
    pub entries: Vec<SubnetEntry>,
    pub pages: PageWindow,
    /// Number of siblings in the parent, not just the materialised ones.
    pub total_subnets: u64,
    /// Ordinal of the subject network among its siblings.
    pub current_index: u64,
    /// False when the subject already sits on (or above) its parent boundary.
    pub show_subnet_list: bool,
}
