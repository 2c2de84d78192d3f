//! docredir - a redirect stub generator for static documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod redirect;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { .. } => cli::generate::run_generate(&config),
        Commands::Check { .. } => cli::check::run_check(&config),
    }
}
