//! Recursive file discovery with extension, encoding, and exclusion handling.
//!
//! [`FileTreeWalker`] is the directory walker the analyzer delegates to. It
//! walks with `walkdir` in file-name order, prunes excluded entries before
//! descending into them, and decodes accepted files with `encoding_rs`.

pub mod exclude;

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{AnalyzerError, Result};

pub use exclude::ExclusionSet;

/// A file accepted by the walker, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    /// File name without extension
    pub file_name: String,
    /// Extension with the leading dot, empty when the file has none
    pub extension: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct FileTreeWalker {
    /// Lowercased extensions without the leading dot; empty accepts every file
    allowed_file_types: Vec<String>,
    file_encoding: String,
    excluded_files: Vec<String>,
    follow_links: bool,
}

impl Default for FileTreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTreeWalker {
    pub fn new() -> Self {
        Self {
            allowed_file_types: Vec::new(),
            file_encoding: "utf-8".to_string(),
            excluded_files: Vec::new(),
            follow_links: false,
        }
    }

    /// Set the WHATWG encoding label used to decode files (default `utf-8`).
    pub fn set_file_encoding(mut self, file_encoding: impl Into<String>) -> Self {
        self.file_encoding = file_encoding.into();
        self
    }

    /// Replace the exclusion list. See [`exclude`] for the pattern syntax.
    pub fn set_excluded_files<I, S>(mut self, excluded_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_files = excluded_files.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the accepted extensions. `"ts"` and `".ts"` are equivalent.
    pub fn set_allowed_file_types<I, S>(mut self, allowed_file_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_file_types = allowed_file_types
            .into_iter()
            .map(|t| normalize_extension(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn allowed_file_types(&self) -> &[String] {
        &self.allowed_file_types
    }

    pub fn file_encoding(&self) -> &str {
        &self.file_encoding
    }

    pub fn excluded_files(&self) -> &[String] {
        &self.excluded_files
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.allowed_file_types.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.allowed_file_types.iter().any(|t| *t == ext)
            })
            .unwrap_or(false)
    }

    /// Walk `root` and call `on_file` for every accepted file, in file-name order.
    ///
    /// Returns the number of files handed to `on_file`. The first error, from
    /// the walk itself or from `on_file`, stops the walk.
    pub fn walk<F>(&self, root: impl AsRef<Path>, mut on_file: F) -> Result<usize>
    where
        F: FnMut(WalkedFile) -> Result<()>,
    {
        let root = root.as_ref();
        let encoding = Encoding::for_label(self.file_encoding.as_bytes())
            .ok_or_else(|| AnalyzerError::UnknownEncoding(self.file_encoding.clone()))?;
        let exclusions = ExclusionSet::compile(root, &self.excluded_files)?;

        let metadata = fs::metadata(root).map_err(|e| AnalyzerError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(AnalyzerError::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || exclusions.is_empty() {
                    return true;
                }
                let excluded = exclusions.is_excluded(entry.path(), entry.file_type().is_dir());
                if excluded {
                    debug!(path = %entry.path().display(), "excluded");
                }
                !excluded
            });

        let mut count = 0;
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.accepts(entry.path()) {
                continue;
            }

            let file = read_file(entry.path(), encoding)?;
            on_file(file)?;
            count += 1;
        }

        Ok(count)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn read_file(path: &Path, encoding: &'static Encoding) -> Result<WalkedFile> {
    let bytes = fs::read(path).map_err(|e| AnalyzerError::io(path, e))?;
    let (content, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            path = %path.display(),
            encoding = used.name(),
            "file contains bytes invalid for its encoding; replaced with U+FFFD"
        );
    }

    let file_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    Ok(WalkedFile {
        path: path.to_path_buf(),
        file_name,
        extension,
        content: content.into_owned(),
    })
}
