//! `check` command: dry-run the mapping file.
//!
//! Resolves every rule and prints the outcome without touching the output
//! directory, so mapping files can be reviewed before a build.

use crate::config::SiteConfig;
use crate::log;
use crate::redirect::RedirectMap;
use crate::utils::plural::plural_count;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run_check(config: &SiteConfig) -> Result<()> {
    let map_path = config.mapping_path();
    let Some(map) = RedirectMap::load(&map_path)? else {
        log!("check"; "no redirect map at {}", map_path.display());
        return Ok(());
    };

    if !config.build.builder.emits_static_html() {
        log!(
            "check";
            "builder '{}' would skip generation; showing resolutions anyway",
            config.build.builder
        );
    }

    let ctx = config.resolve_context();
    let mut count = 0;
    let mut malformed = 0;
    for rule in map.rules() {
        let resolved = ctx.resolve(&rule);
        if rule.to_path.is_empty() {
            malformed += 1;
            log!(
                "check";
                "{} {} {} {}",
                rule.from_path,
                "→".dimmed(),
                resolved.target,
                "(no destination on this line)".yellow()
            );
        } else {
            log!("check"; "{} {} {}", resolved.output_rel, "→".dimmed(), resolved.target);
        }
        count += 1;
    }

    log!("check"; "{} resolved", plural_count(count, "redirect"));
    if malformed > 0 {
        log!("check"; "{} missing a destination", plural_count(malformed, "line"));
    }
    Ok(())
}
