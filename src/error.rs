//! Error types for directory walking, decoding, and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while analyzing a source tree.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("unknown file encoding label: {0}")]
    UnknownEncoding(String),

    #[error("invalid exclusion pattern {pattern:?}: {source}")]
    InvalidExclusion {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("no grammar available for file type {0:?}")]
    UnsupportedFileType(String),

    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("tree-sitter returned no tree for {0}")]
    ParseFailed(String),

    #[error("invalid analyzer configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl AnalyzerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AnalyzerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
