//! Rule resolution: turn a mapping line into an output location and a
//! relative redirect target.
//!
//! The target must climb from the directory containing the stub back to the
//! output root before descending into `to_path`, so the prefix length is
//! `segments(from_path) - 1`. Provider documentation roots sit one directory
//! deeper than the main documentation root, so targets that mention
//! `providers` get one extra `../`.

use super::rule::RedirectRule;

/// Substring of `to_path` that marks a provider-package destination.
const PROVIDER_MARKER: &str = "providers";

/// Per-build resolution parameters, passed explicitly rather than read from
/// ambient build state.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Source page extension, e.g. `.rst`.
    pub source_suffix: String,
    /// Rendered page extension, e.g. `.html`.
    pub output_suffix: String,
}

/// A fully resolved rule, ready to be written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRedirect {
    /// Stub location relative to the output root, extension-normalized.
    pub output_rel: String,
    /// Relative URL the stub points at.
    pub target: String,
}

impl ResolveContext {
    pub fn new(source_suffix: impl Into<String>, output_suffix: impl Into<String>) -> Self {
        Self {
            source_suffix: source_suffix.into(),
            output_suffix: output_suffix.into(),
        }
    }

    /// Resolve a rule. Pure string computation; never fails.
    pub fn resolve(&self, rule: &RedirectRule) -> ResolvedRedirect {
        // Substring replace, not suffix replace. Existing mapping files rely
        // on this exact behavior, sharp edges included (a directory literally
        // named `v1.rsthub` would be rewritten too).
        let from_path = rule.from_path.replace(&self.source_suffix, &self.output_suffix);
        let to_path = rule.to_path.replace(&self.source_suffix, &self.output_suffix);

        let depth = from_path.split('/').count();
        let hops = if to_path.contains(PROVIDER_MARKER) {
            // Provider docs live one level below the main docs root
            depth
        } else {
            depth - 1
        };

        ResolvedRedirect {
            output_rel: from_path,
            target: format!("{}{}", "../".repeat(hops), to_path),
        }
    }
}
