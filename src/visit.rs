//! Depth-first traversal of a parsed file.

use tree_sitter::Node;

use crate::parse::ast::ParsedFile;

/// Visit every node of `file` in pre-order: a node before its children,
/// siblings in source order, starting at the root.
///
/// With `named_only`, anonymous nodes (punctuation, bare keywords) are
/// walked through but not handed to `on_node`. Returns the number of
/// nodes delivered.
pub fn visit_tree<F>(file: &ParsedFile, named_only: bool, mut on_node: F) -> usize
where
    F: FnMut(&Node<'_>),
{
    let mut cursor = file.tree.walk();
    let mut visited = 0;

    loop {
        let node = cursor.node();
        if !named_only || node.is_named() {
            on_node(&node);
            visited += 1;
        }

        if cursor.goto_first_child() {
            continue;
        }

        // Climb until a sibling exists; reaching the root again means we're done.
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return visited;
            }
        }
    }
}
