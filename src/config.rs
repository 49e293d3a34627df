//! Serializable analyzer settings.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for a [`CodeAnalyzer`](crate::CodeAnalyzer), loadable from JSON.
///
/// ```json
/// {
///   "allowed_file_types": ["ts", "tsx"],
///   "excluded_files": ["node_modules", "**/*.d.ts"],
///   "file_encoding": "utf-8"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub file_encoding: String,
    pub excluded_files: Vec<String>,
    pub allowed_file_types: Vec<String>,
    pub named_nodes_only: bool,
    pub follow_links: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            file_encoding: "utf-8".to_string(),
            excluded_files: Vec::new(),
            allowed_file_types: vec!["ts".to_string(), "tsx".to_string()],
            named_nodes_only: false,
            follow_links: false,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}
