//! Terminal output.
//!
//! Prints the copy block followed by the visible window of the sibling list,
//! with the subject network highlighted.

use super::report::SubnetReport;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a report for the terminal.
pub fn render_text(report: &SubnetReport) -> String {
    let mut lines: Vec<String> = report.vertical.lines().map(String::from).collect();
    lines.push(String::new());
    lines.push(report.parent_desc.bold().to_string());

    if report.show_subnet_list {
        lines.push(format!(
            "Page {} of {} (showing pages {}-{})",
            report.current_page,
            report.total_pages,
            report.window_start_page,
            report.window_end_page
        ));
    }
    lines.push(format!(
        "{:>6}  {:<16} {:<34} {:<16}",
        "page", "network", "usable range", "broadcast"
    ));
    for net in &report.all_nets {
        let row = format!(
            "{:>6}  {:<16} {:<34} {:<16}",
            net.page, net.network, net.range, net.broadcast
        );
        if net.is_current {
            lines.push(row.on_blue().to_string());
        } else {
            lines.push(row);
        }
    }
    lines.join("\n")
}

pub fn print_report(report: &SubnetReport) {
    println!("{}", render_text(report));
}
