//! Redirect stub writing.
//!
//! A stub is a minimal HTML document whose only content is a zero-delay
//! meta-refresh pointing at the resolved target. Output is byte-identical
//! across runs, so rebuilding is always safe.

use super::resolve::ResolvedRedirect;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The entire stub document; `{}` is the relative redirect target.
const TEMPLATE: &str = r#"<html><head><meta http-equiv="refresh" content="0; url={}"/></head></html>"#;

/// Render the stub body for a target URL.
pub fn render_stub(target: &str) -> String {
    TEMPLATE.replacen("{}", target, 1)
}

/// Write one stub under `output_root`, creating ancestor directories and
/// silently overwriting any existing file. Returns the path written.
pub fn write_stub(output_root: &Path, resolved: &ResolvedRedirect) -> Result<PathBuf> {
    let stub_path = output_root.join(&resolved.output_rel);

    if let Some(parent) = stub_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(&stub_path, render_stub(&resolved.target))
        .with_context(|| format!("Failed to write redirect stub {}", stub_path.display()))?;

    Ok(stub_path)
}
