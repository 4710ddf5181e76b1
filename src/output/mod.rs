//! Output formatting for subnet reports.
//!
//! This module builds and renders the report:
//! - [`report`] - Report record assembly
//! - [`terminal`] - Terminal output with colors
//! - [`csv`] - CSV output of the sibling list
//! - [`to_json`] - JSON output of the whole report

mod csv;
mod report;
mod terminal;

pub use csv::{csv_rows, subnet_print};
pub use report::{
    format_report, group_thousands, ip_class, reverse_dns_name, wildcard_network, SubnetReport,
};
pub use terminal::{format_field, print_report, render_text};

/// Serialize a report as pretty printed JSON.
pub fn to_json(report: &SubnetReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate, CalcConfig};

    #[test]
    fn test_to_json() {
        let config = CalcConfig::default();
        let report = calculate("10.10.10.1/30", Some("2"), &config).unwrap();
        let text = to_json(&report).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["cidr_full"], "10.10.10.0/30");
        assert_eq!(json["current_page"], 2);
        assert_eq!(json["total_pages"], 4);
        assert_eq!(json["all_nets"][0]["network"], "10.10.10.0");
        assert_eq!(json["all_nets"][0]["is_current"], true);
        assert_eq!(json["all_nets"].as_array().unwrap().len(), 64);
    }
}
