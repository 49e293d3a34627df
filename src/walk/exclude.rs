//! Exclusion patterns for the file tree walker.
//!
//! Patterns use gitignore syntax, compiled with `ignore::gitignore`:
//! a pattern without a `/` matches an entry's name at any depth, a pattern
//! containing `/` is anchored at the walk root, `**` spans any number of
//! directories (including none), a trailing `/` only matches directories,
//! and a leading `!` re-includes something an earlier pattern excluded.
//! Backslashes are read as path separators.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{AnalyzerError, Result};

#[derive(Debug, Clone)]
pub struct ExclusionSet {
    matcher: Gitignore,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self {
            matcher: Gitignore::empty(),
        }
    }
}

impl ExclusionSet {
    /// Compile `patterns` relative to the walk `root`.
    pub fn compile<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder
                .add_line(None, &normalize_pattern(pattern))
                .map_err(|source| AnalyzerError::InvalidExclusion {
                    pattern: pattern.to_string(),
                    source,
                })?;
        }

        let matcher = builder
            .build()
            .map_err(|source| AnalyzerError::InvalidExclusion {
                pattern: patterns
                    .iter()
                    .map(|p| p.as_ref())
                    .collect::<Vec<_>>()
                    .join(", "),
                source,
            })?;
        Ok(Self { matcher })
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    /// Whether `path`, located under the walk root, is excluded.
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher.matched(path, is_dir).is_ignore()
    }
}

fn normalize_pattern(pattern: &str) -> String {
    let pattern = pattern.trim().replace('\\', "/");
    match pattern.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => pattern,
    }
}
