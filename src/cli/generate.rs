//! `generate` command: write redirect stubs for the current build.

use crate::config::SiteConfig;
use crate::redirect::generate_redirects;
use anyhow::Result;

pub fn run_generate(config: &SiteConfig) -> Result<()> {
    generate_redirects(config)?;
    Ok(())
}
