//! Redirect mapping file parsing.
//!
//! The mapping file is plain UTF-8 text, one rule per line:
//!
//! ```text
//! # moved when the tutorial was split up
//! tutorial.rst          tutorial/index.rst
//! howto/secure.rst      providers/common/security.rst
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// One line of the mapping file: old path and where it should point.
///
/// `to_path` is interpreted relative to the directory containing `from_path`
/// once resolved, not relative to the output root. A line without a whitespace
/// separator yields an empty `to_path`; that is a mapping-file authoring bug,
/// not a parse error, and resolves to a redirect at the traversal prefix
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub from_path: String,
    pub to_path: String,
}

/// An in-memory redirect mapping file.
///
/// The file is read once with the handle released before parsing; `rules()`
/// can be called any number of times and always yields the same finite
/// sequence.
#[derive(Debug)]
pub struct RedirectMap {
    content: String,
}

impl RedirectMap {
    /// Load a mapping file, returning `Ok(None)` when it does not exist.
    ///
    /// A missing mapping file is not an error: redirects are optional and the
    /// caller turns the whole step into a no-op.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self { content })),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read redirect map {}", path.display())),
        }
    }

    /// Build a mapping directly from file content.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Iterate over the rules in file order.
    pub fn rules(&self) -> impl Iterator<Item = RedirectRule> + '_ {
        self.content.lines().filter_map(parse_line)
    }
}

/// Parse a single mapping line. Returns `None` for blanks and comments.
fn parse_line(line: &str) -> Option<RedirectRule> {
    if line.trim().is_empty() {
        return None;
    }
    if line.starts_with('#') {
        return None;
    }

    // Split on the first whitespace run: from_path, then everything after
    // with leading whitespace stripped.
    let line = line.trim_end();
    match line.find(char::is_whitespace) {
        Some(idx) => Some(RedirectRule {
            from_path: line[..idx].to_string(),
            to_path: line[idx..].trim_start().to_string(),
        }),
        None => Some(RedirectRule {
            from_path: line.to_string(),
            to_path: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_rule() {
        let rule = parse_line("old/page.rst new/page.rst").unwrap();
        assert_eq!(rule.from_path, "old/page.rst");
        assert_eq!(rule.to_path, "new/page.rst");
    }

    #[test]
    fn test_parse_splits_on_first_whitespace_run() {
        // Tabs and runs of spaces both separate; only the first run splits
        let rule = parse_line("a.rst\t\t  b.rst").unwrap();
        assert_eq!(rule.from_path, "a.rst");
        assert_eq!(rule.to_path, "b.rst");
    }

    #[test]
    fn test_parse_trailing_whitespace_stripped() {
        let rule = parse_line("a.rst b.rst   ").unwrap();
        assert_eq!(rule.to_path, "b.rst");
    }

    #[test]
    fn test_parse_no_separator_gives_empty_target() {
        let rule = parse_line("orphan.rst").unwrap();
        assert_eq!(rule.from_path, "orphan.rst");
        assert_eq!(rule.to_path, "");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("\t").is_none());
    }

    #[test]
    fn test_parse_skips_comments() {
        assert!(parse_line("# a comment").is_none());
        assert!(parse_line("#a.rst b.rst").is_none());
    }

    #[test]
    fn test_rules_are_restartable() {
        let map = RedirectMap::from_content("a.rst b.rst\n\n# note\nc.rst d.rst\n");

        let first: Vec<_> = map.rules().collect();
        let second: Vec<_> = map.rules().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[0].from_path, "a.rst");
        assert_eq!(first[1].from_path, "c.rst");
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = RedirectMap::load(&dir.path().join("redirects")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("redirects");
        fs::write(&path, "a.rst b.rst\n").unwrap();

        let map = RedirectMap::load(&path).unwrap().unwrap();
        assert_eq!(map.rules().count(), 1);
    }
}
