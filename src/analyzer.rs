//! The callback-driven analyzer.
//!
//! [`CodeAnalyzer`] walks a directory with a [`FileTreeWalker`], parses every
//! accepted file with tree-sitter, and reports each file to three callbacks:
//!
//! - `on_file_start` before the file is parsed,
//! - `on_node` for every node of its syntax tree, in depth-first pre-order,
//! - `on_file_end` once the traversal is done.
//!
//! Callbacks for one file always complete before the next file starts.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use tree_sitter::Node;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::parse::ast::{FileId, ParsedFile};
use crate::parse::parse_source_file;
use crate::types::context::{Language, SourceFile};
use crate::visit::visit_tree;
use crate::walk::{FileTreeWalker, WalkedFile};

/// Called with the file before parsing and again after traversal.
pub type FileHandler<'a> = dyn FnMut(&SourceFile) + 'a;

/// Called with each syntax node and the file it belongs to.
pub type NodeHandler<'a> = dyn FnMut(&Node<'_>, &ParsedFile) + 'a;

const DEFAULT_FILE_TYPES: [&str; 2] = ["ts", "tsx"];

/// Totals for one [`CodeAnalyzer::analyze`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub files_analyzed: usize,
    pub nodes_visited: usize,
    /// Files whose tree contains ERROR or MISSING nodes
    pub files_with_errors: usize,
}

pub struct CodeAnalyzer<'a> {
    walker: FileTreeWalker,
    named_only: bool,
    on_file_start: Option<Box<FileHandler<'a>>>,
    on_node: Option<Box<NodeHandler<'a>>>,
    on_file_end: Option<Box<FileHandler<'a>>>,
}

impl Default for CodeAnalyzer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CodeAnalyzer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeAnalyzer")
            .field("walker", &self.walker)
            .field("named_only", &self.named_only)
            .field("on_file_start", &self.on_file_start.is_some())
            .field("on_node", &self.on_node.is_some())
            .field("on_file_end", &self.on_file_end.is_some())
            .finish()
    }
}

impl<'a> CodeAnalyzer<'a> {
    /// An analyzer for `.ts` and `.tsx` files, decoded as UTF-8.
    pub fn new() -> Self {
        Self {
            walker: FileTreeWalker::new().set_allowed_file_types(DEFAULT_FILE_TYPES),
            named_only: false,
            on_file_start: None,
            on_node: None,
            on_file_end: None,
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new()
            .set_file_encoding(config.file_encoding.clone())
            .set_excluded_files(config.excluded_files.iter().cloned())
            .set_allowed_file_types(&config.allowed_file_types)
            .named_nodes_only(config.named_nodes_only)
            .follow_links(config.follow_links)
    }

    pub fn set_file_encoding(mut self, file_encoding: impl Into<String>) -> Self {
        self.walker = self.walker.set_file_encoding(file_encoding);
        self
    }

    pub fn set_excluded_files<I, S>(mut self, excluded_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.walker = self.walker.set_excluded_files(excluded_files);
        self
    }

    /// Replace the default `ts`/`tsx` file types.
    pub fn set_allowed_file_types<I, S>(mut self, allowed_file_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.walker = self.walker.set_allowed_file_types(allowed_file_types);
        self
    }

    /// Only hand named nodes to `on_node`, skipping punctuation and bare keywords.
    pub fn named_nodes_only(mut self, named_only: bool) -> Self {
        self.named_only = named_only;
        self
    }

    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.walker = self.walker.follow_links(follow_links);
        self
    }

    pub fn on_file_start<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&SourceFile) + 'a,
    {
        self.on_file_start = Some(Box::new(handler));
        self
    }

    pub fn on_node<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&Node<'_>, &ParsedFile) + 'a,
    {
        self.on_node = Some(Box::new(handler));
        self
    }

    pub fn on_file_end<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&SourceFile) + 'a,
    {
        self.on_file_end = Some(Box::new(handler));
        self
    }

    /// Walk `source_directory` and run the callbacks over every accepted file.
    ///
    /// Every configured file type must have a grammar; this is checked before
    /// any file is read. With no file types configured, files without a
    /// grammar are skipped.
    pub fn analyze(&mut self, source_directory: impl AsRef<Path>) -> Result<AnalysisSummary> {
        let root = source_directory.as_ref();
        for file_type in self.walker.allowed_file_types() {
            if Language::from_extension(file_type).is_none() {
                return Err(AnalyzerError::UnsupportedFileType(file_type.clone()));
            }
        }

        info!(
            root = %root.display(),
            file_types = ?self.walker.allowed_file_types(),
            excluded = ?self.walker.excluded_files(),
            encoding = self.walker.file_encoding(),
            "analyzing source tree"
        );

        let Self {
            walker,
            named_only,
            on_file_start,
            on_node,
            on_file_end,
        } = self;
        let named_only = *named_only;

        let mut summary = AnalysisSummary::default();
        let mut next_id = 1;

        walker.walk(root, |walked: WalkedFile| {
            let Some(language) = Language::from_extension(&walked.extension) else {
                debug!(path = %walked.path.display(), "no grammar for file, skipping");
                return Ok(());
            };

            let source = SourceFile {
                path: walked.path.to_string_lossy().into_owned(),
                file_name: walked.file_name,
                extension: walked.extension,
                language,
                content: walked.content,
            };
            let file_id = FileId(next_id);
            next_id += 1;

            debug!(path = %source.path, language = language.as_str(), "analyzing file");

            if let Some(handler) = on_file_start.as_mut() {
                handler(&source);
            }

            let parsed = parse_source_file(file_id, source)?;
            if parsed.has_errors() {
                warn!(path = %parsed.source.path, "file has syntax errors");
                summary.files_with_errors += 1;
            }

            summary.nodes_visited += visit_tree(&parsed, named_only, |node| {
                if let Some(handler) = on_node.as_mut() {
                    handler(node, &parsed);
                }
            });

            if let Some(handler) = on_file_end.as_mut() {
                handler(&parsed.source);
            }

            summary.files_analyzed += 1;
            Ok(())
        })?;

        info!(
            files = summary.files_analyzed,
            nodes = summary.nodes_visited,
            files_with_errors = summary.files_with_errors,
            "analysis complete"
        );

        Ok(summary)
    }
}
