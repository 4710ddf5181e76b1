//! Subnet calculation logic.
//!
//! This module contains the steps between raw input and a finished report:
//! - [`parse`] - Free-form input to a [`Network`](crate::models::Network)
//! - [`parent`] - Class boundary parent network
//! - [`paginate`] - Windowed sibling subnet listing

mod paginate;
mod parent;
mod parse;

// Re-export public functions
pub use paginate::paginate;
pub use parent::get_parent_network;
pub use parse::parse_input;
