//! Small shared utilities.
//!
//! - [`path`]: filesystem path normalization
//! - [`plural`]: pluralization for log messages

pub mod path;
pub mod plural;
