use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

use crate::types::context::SourceFile;

/// Identifier of a file within one analysis run, assigned in walk order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(pub u64);

/// Zero-based line/column range of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstLocation {
    pub file_id: FileId,
    pub range: TextRange,
}

/// A source file together with its tree-sitter syntax tree.
#[derive(Debug)]
pub struct ParsedFile {
    pub file_id: FileId,
    pub source: SourceFile,
    pub tree: Tree,
}

impl ParsedFile {
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text_for_node(&self, node: &Node) -> String {
        node.utf8_text(self.source.content.as_bytes())
            .unwrap_or("")
            .to_string()
    }

    pub fn location_for_node(&self, node: &Node) -> AstLocation {
        let start = node.start_position();
        let end = node.end_position();
        AstLocation {
            file_id: self.file_id,
            range: TextRange {
                start_line: start.row as u32,
                start_col: start.column as u32,
                end_line: end.row as u32,
                end_col: end.column as u32,
            },
        }
    }

    /// Whether the tree contains ERROR or MISSING nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}
