//! CSV output of the sibling subnet window.

use super::report::SubnetReport;
use super::terminal::format_field;
use crate::models::SubnetEntry;

/// Print the sibling window as CSV to stdout.
pub fn subnet_print(report: &SubnetReport) {
    log::info!(
        "#Start subnet_print() {} of {} subnets",
        report.all_nets.len(),
        report.total_subnets
    );
    for row in csv_rows(report) {
        println!("{row}");
    }
}

/// Header line followed by one line per materialised sibling.
pub fn csv_rows(report: &SubnetReport) -> Vec<String> {
    let mut rows = vec![format!(
        r#"{index},{page},{current},{network},{range},{broadcast}"#,
        index = format_field("index", 8),
        page = format_field("page", 6),
        current = format_field("current", 9),
        network = format_field("network", 18),
        range = format_field("range", 34),
        broadcast = format_field("broadcast", 18),
    )];
    rows.extend(report.all_nets.iter().map(csv_row));
    rows
}

fn csv_row(entry: &SubnetEntry) -> String {
    format!(
        r#"{index},{page},{current},{network},{range},{broadcast}"#,
        index = format_field(entry.index, 8),
        page = format_field(entry.page, 6),
        current = format_field(if entry.is_current { "*" } else { "" }, 9),
        network = format_field(&entry.network, 18),
        range = format_field(&entry.range, 34),
        broadcast = format_field(&entry.broadcast, 18),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate, CalcConfig};

    #[test]
    fn test_csv_rows() {
        let config = CalcConfig::default();
        let report = calculate("10.10.10.1 0.0.0.3", None, &config).unwrap();
        let rows = csv_rows(&report);
        assert_eq!(rows.len(), 65);
        assert_eq!(
            rows[0],
            r#" "index","page","current",         "network",                           "range",       "broadcast""#
        );
        assert_eq!(
            rows[1],
            r#"     "0",   "1",      "*",      "10.10.10.0",         "10.10.10.1 - 10.10.10.2",      "10.10.10.3""#
        );
        assert_eq!(rows[2].matches(',').count(), 5);
        assert!(rows[2].contains(r#""10.10.10.4""#));
    }
}
