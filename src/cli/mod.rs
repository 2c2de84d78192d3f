//! Command-line interface module.

mod args;
pub mod check;
pub mod generate;

pub use args::{BuildArgs, Cli, Commands};
