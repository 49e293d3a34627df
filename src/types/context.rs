//! Language identification and the source file handed to callbacks.

use serde::{Deserialize, Serialize};

/// Languages with a bundled tree-sitter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    /// TypeScript with JSX
    Tsx,
    /// JavaScript, including JSX
    JavaScript,
    Python,
    Rust,
    Go,
    Java,
    Json,
    Yaml,
}

impl Language {
    /// Map a file extension (with or without the leading dot, any case) to a language.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        let language = match ext.as_str() {
            "ts" | "mts" | "cts" => Language::TypeScript,
            "tsx" => Language::Tsx,
            "js" | "jsx" | "mjs" | "cjs" => Language::JavaScript,
            "py" | "pyi" => Language::Python,
            "rs" => Language::Rust,
            "go" => Language::Go,
            "java" => Language::Java,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            _ => return None,
        };
        Some(language)
    }

    /// The tree-sitter grammar used to parse this language.
    pub fn grammar(self) -> tree_sitter::Language {
        match self {
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::Go => tree_sitter_go::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::Json => tree_sitter_json::LANGUAGE.into(),
            Language::Yaml => tree_sitter_yaml::LANGUAGE.into(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Java => "java",
            Language::Json => "json",
            Language::Yaml => "yaml",
        }
    }
}

/// A decoded source file found by the walker.
///
/// This is what `on_file_start` and `on_file_end` receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file: the walk root joined with the path below it
    pub path: String,

    /// File name without its extension (`"index"` for `src/index.ts`)
    pub file_name: String,

    /// Extension including the leading dot (`".ts"`), empty if none
    pub extension: String,

    pub language: Language,

    /// Content decoded with the configured encoding
    pub content: String,
}
