//! Project configuration management for `docredir.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]: source/output roots, suffixes, builder
//! │   └── redirects  # [redirects]: mapping file name
//! ├── error.rs       # ConfigError
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional: the tool is a build step and must be fully
//! drivable from CLI flags alone. Precedence is CLI flags > config file >
//! defaults.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{BuildConfig, BuilderKind, RedirectsConfig};

use crate::cli::{BuildArgs, Cli};
use crate::redirect::ResolveContext;
use crate::utils::path::normalize_path;
use crate::{debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docredir.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Redirect mapping settings
    #[serde(default)]
    pub redirects: RedirectsConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// A missing config file is not an error; defaults apply and CLI flags
    /// can override everything. The project root is the config file's parent
    /// directory, or the current directory when no config file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        // Verbose must be set before the first debug! fires
        crate::logger::set_verbose(cli.build_args().verbose);

        let cwd = std::env::current_dir()?;
        let config_path = normalize_path(&cwd.join(&cli.config));

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            debug!("config"; "no config file at {}, using defaults", config_path.display());
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading: apply CLI overrides and
    /// normalize paths against the project root.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.apply_build_args(cli.build_args());

        self.root = root.clone();
        self.build.source = normalize_path(&root.join(&self.build.source));
        self.build.output = normalize_path(&root.join(&self.build.output));
    }

    /// Apply shared command arguments from the CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.source, args.source.as_ref());
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.builder, args.builder.as_ref());
        Self::update_option(&mut self.redirects.file, args.redirects_file.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Parse configuration from TOML content (tests only; the real load path
    /// goes through `from_path` for unknown-field detection).
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        Self::validate_suffix("build.source_suffix", &self.build.source_suffix)?;
        Self::validate_suffix("build.output_suffix", &self.build.output_suffix)?;

        if self.build.source_suffix == self.build.output_suffix {
            bail!(ConfigError::Validation(format!(
                "build.source_suffix and build.output_suffix are both '{}'; \
                 extension rewriting needs them to differ",
                self.build.source_suffix
            )));
        }

        if self.redirects.file.as_os_str().is_empty() {
            bail!(ConfigError::Validation(
                "redirects.file must not be empty".into()
            ));
        }

        Ok(())
    }

    fn validate_suffix(field: &str, suffix: &str) -> Result<()> {
        if !suffix.starts_with('.') || suffix.len() < 2 {
            bail!(ConfigError::Validation(format!(
                "{field} must be a dotted extension like '.rst', got '{suffix}'"
            )));
        }
        Ok(())
    }

    /// Absolute path of the redirect mapping file.
    pub fn mapping_path(&self) -> PathBuf {
        self.build.source.join(&self.redirects.file)
    }

    /// Resolution parameters for the current build.
    pub fn resolve_context(&self) -> ResolveContext {
        ResolveContext::new(&self.build.source_suffix, &self.build.output_suffix)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[build\nsource = \"docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.build.source, PathBuf::from("docs"));
        assert_eq!(config.build.output, PathBuf::from("_build/html"));
        assert_eq!(config.redirects.file, PathBuf::from("redirects"));
        assert_eq!(config.build.builder, BuilderKind::Html);
    }

    #[test]
    fn test_parse_sections() {
        let config = SiteConfig::from_str(
            "[build]\nsource = \"documentation\"\nbuilder = \"dirhtml\"\n\
             [redirects]\nfile = \"moved.txt\"",
        )
        .unwrap();
        assert_eq!(config.build.source, PathBuf::from("documentation"));
        assert_eq!(config.build.builder, BuilderKind::Dirhtml);
        assert_eq!(config.redirects.file, PathBuf::from("moved.txt"));
        // Unset fields keep defaults
        assert_eq!(config.build.source_suffix, ".rst");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\nsource = \"docs\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.build.source, PathBuf::from("docs"));
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[build]\nsource = \"docs\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_rejects_undotted_suffix() {
        let mut config = SiteConfig::default();
        config.build.source_suffix = "rst".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_equal_suffixes() {
        let mut config = SiteConfig::default();
        config.build.source_suffix = ".html".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_finalize_cli_overrides_win_and_normalize() {
        // Config file sets one thing, CLI another: the CLI value must win and
        // be normalized against the config file's parent directory.
        let mut config = SiteConfig::from_str(
            "[build]\nsource = \"documentation\"\nbuilder = \"dirhtml\"",
        )
        .unwrap();
        config.config_path = PathBuf::from("/proj/docredir.toml");

        let cli = crate::cli::Cli::try_parse_from([
            "docredir",
            "generate",
            "--source",
            "docs2",
            "--output",
            "out",
            "--builder",
            "latex",
            "--redirects-file",
            "moved.txt",
        ])
        .unwrap();
        config.finalize(&cli);

        assert_eq!(config.root, PathBuf::from("/proj"));
        assert_eq!(config.build.source, PathBuf::from("/proj/docs2"));
        assert_eq!(config.build.output, PathBuf::from("/proj/out"));
        assert_eq!(config.build.builder, BuilderKind::Latex);
        assert_eq!(config.redirects.file, PathBuf::from("moved.txt"));
    }

    #[test]
    fn test_finalize_without_cli_overrides_keeps_config_values() {
        let mut config =
            SiteConfig::from_str("[build]\nsource = \"documentation\"").unwrap();
        config.config_path = PathBuf::from("/proj/docredir.toml");

        let cli = crate::cli::Cli::try_parse_from(["docredir", "generate"]).unwrap();
        config.finalize(&cli);

        assert_eq!(config.build.source, PathBuf::from("/proj/documentation"));
        assert_eq!(config.build.output, PathBuf::from("/proj/_build/html"));
        assert_eq!(config.build.builder, BuilderKind::Html);
        assert_eq!(config.mapping_path(), PathBuf::from("/proj/documentation/redirects"));
    }

    #[test]
    fn test_finalize_absolute_cli_path_kept_as_is() {
        let mut config = SiteConfig::from_str("").unwrap();
        config.config_path = PathBuf::from("/proj/docredir.toml");

        let cli = crate::cli::Cli::try_parse_from([
            "docredir", "generate", "--source", "/elsewhere/docs",
        ])
        .unwrap();
        config.finalize(&cli);

        assert_eq!(config.build.source, PathBuf::from("/elsewhere/docs"));
    }

    #[test]
    fn test_mapping_path_joins_source_root() {
        let mut config = SiteConfig::default();
        config.build.source = PathBuf::from("/proj/docs");
        assert_eq!(config.mapping_path(), PathBuf::from("/proj/docs/redirects"));
    }
}
