//! Redirect stub generation.
//!
//! Data flow: mapping file → parsed rules → resolved targets → written stubs.
//! Each rule is independent; the step is a pure batch transform with no state
//! carried across builds.

mod emit;
mod resolve;
mod rule;

pub use emit::write_stub;
pub use resolve::{ResolveContext, ResolvedRedirect};
pub use rule::{RedirectMap, RedirectRule};

use crate::config::SiteConfig;
use crate::utils::plural::plural_count;
use crate::{debug, log};
use anyhow::Result;

/// Generate all redirect stubs for the current build.
///
/// No-ops (returning 0) when the active builder does not emit static HTML or
/// when the mapping file is absent. Rules are processed strictly in file
/// order so per-rule debug output is deterministic.
pub fn generate_redirects(config: &SiteConfig) -> Result<usize> {
    if !config.build.builder.emits_static_html() {
        debug!(
            "redirects";
            "builder '{}' does not emit static html, skipping",
            config.build.builder
        );
        return Ok(0);
    }

    let map_path = config.mapping_path();
    let Some(map) = RedirectMap::load(&map_path)? else {
        log!("redirects"; "no redirect map at {}, skipping", map_path.display());
        return Ok(0);
    };

    let ctx = config.resolve_context();
    let mut written = 0;
    for rule in map.rules() {
        debug!("redirects"; "redirecting '{}' to '{}'", rule.from_path, rule.to_path);
        let resolved = ctx.resolve(&rule);
        debug!("redirects"; "resolved '{}' to '{}'", resolved.output_rel, resolved.target);
        write_stub(&config.build.output, &resolved)?;
        written += 1;
    }

    log!("redirects"; "wrote {}", plural_count(written, "redirect stub"));
    Ok(written)
}
