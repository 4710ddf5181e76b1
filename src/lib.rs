// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnet calculator.
//!
//! Parses free-form subnet input, finds the class boundary parent network
//! and lists a window of sibling subnets around the requested page.

mod config;
mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{CalcConfig, ENV_ITEMS_PER_PAGE, ENV_PAGES_BEFORE_AFTER};
pub use error::CalcError;
pub use output::SubnetReport;

/// Run a full calculation: parse, find the parent, page the siblings and
/// build the report.
///
/// `page` is the raw page field, blank or `None` centres on the subject.
pub fn calculate(
    input: &str,
    page: Option<&str>,
    config: &CalcConfig,
) -> Result<SubnetReport, CalcError> {
    let net = processing::parse_input(input)?;
    let parent = processing::get_parent_network(net);
    let window = processing::paginate(net, parent, page, config);
    log::info!(
        "{net}: parent {parent}, {} of {} siblings",
        window.entries.len(),
        window.total_subnets
    );
    Ok(output::format_report(net, parent, window, config))
}
