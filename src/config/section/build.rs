//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "docs"            # Documentation source root (relative to project root)
//! output = "_build/html"     # Build output root, where stubs are written
//! source_suffix = ".rst"     # Source page extension
//! output_suffix = ".html"    # Rendered page extension
//! builder = "html"           # Active builder: html | dirhtml | latex | text
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Documentation source root (where the mapping file lives).
    pub source: PathBuf,

    /// Build output root (stubs land under it).
    pub output: PathBuf,

    /// Source page extension, rewritten to `output_suffix` in rule paths.
    pub source_suffix: String,

    /// Rendered page extension.
    pub output_suffix: String,

    /// Active output builder. Stubs are only generated for `html`.
    pub builder: BuilderKind,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: "docs".into(),
            output: "_build/html".into(),
            source_suffix: ".rst".into(),
            output_suffix: ".html".into(),
            builder: BuilderKind::Html,
        }
    }
}

/// Documentation output format. Only the static-HTML builder produces a page
/// tree that redirect stubs can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BuilderKind {
    Html,
    Dirhtml,
    Latex,
    Text,
}

impl BuilderKind {
    /// Whether this builder writes one static HTML page per source page.
    pub const fn emits_static_html(self) -> bool {
        matches!(self, Self::Html)
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Html => "html",
            Self::Dirhtml => "dirhtml",
            Self::Latex => "latex",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}
