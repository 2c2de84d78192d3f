//! `[redirects]` section configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Mapping file name, relative to the `[build]` source root.
    pub file: PathBuf,
}

impl Default for RedirectsConfig {
    fn default() -> Self {
        Self {
            file: "redirects".into(),
        }
    }
}
