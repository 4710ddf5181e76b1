//! Error type surfaced to callers of the calculator.

use thiserror::Error;

/// The only failure a caller ever sees.
///
/// Details about why parsing failed are logged, never returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid IP address or subnet mask.")]
    InvalidInput,
}
