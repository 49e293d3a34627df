//! Tree-sitter front end: turns a decoded [`SourceFile`] into a [`ParsedFile`].

pub mod ast;

use tree_sitter::Parser;

use crate::error::{AnalyzerError, Result};
use crate::types::context::SourceFile;

use ast::{FileId, ParsedFile};

/// Parse a source file with the grammar for its language.
///
/// Syntax errors do not fail the parse; they show up as ERROR/MISSING
/// nodes in the returned tree.
pub fn parse_source_file(file_id: FileId, sf: SourceFile) -> Result<ParsedFile> {
    let mut parser = Parser::new();
    parser.set_language(&sf.language.grammar())?;

    let tree = parser
        .parse(&sf.content, None)
        .ok_or_else(|| AnalyzerError::ParseFailed(sf.path.clone()))?;

    Ok(ParsedFile {
        file_id,
        source: sf,
        tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::context::Language;

    fn source(path: &str, language: Language, content: &str) -> SourceFile {
        SourceFile {
            path: path.to_string(),
            file_name: "file".to_string(),
            extension: ".ts".to_string(),
            language,
            content: content.to_string(),
        }
    }

    #[test]
    fn parses_typescript_variable_declaration() {
        let sf = source("file.ts", Language::TypeScript, "const test: number = 5;");
        let parsed = parse_source_file(FileId(1), sf).expect("parsing should succeed");

        let root = parsed.root_node();
        assert_eq!(root.kind(), "program");
        assert!(!parsed.has_errors());

        let decl = root.named_child(0).unwrap();
        assert_eq!(decl.kind(), "lexical_declaration");

        let declarator = decl.named_child(0).unwrap();
        assert_eq!(declarator.kind(), "variable_declarator");

        let name = declarator.child_by_field_name("name").unwrap();
        assert_eq!(parsed.text_for_node(&name), "test");

        let type_annotation = declarator.child_by_field_name("type").unwrap();
        assert_eq!(parsed.text_for_node(&type_annotation), ": number");

        let value = declarator.child_by_field_name("value").unwrap();
        assert_eq!(parsed.text_for_node(&value), "5");
    }

    #[test]
    fn parses_javascript_without_type() {
        let sf = source("file.js", Language::JavaScript, "const test = 5;");
        let parsed = parse_source_file(FileId(2), sf).expect("parsing should succeed");

        let declarator = parsed.root_node().named_child(0).unwrap().named_child(0).unwrap();
        assert!(declarator.child_by_field_name("type").is_none());
        assert_eq!(
            parsed.text_for_node(&declarator.child_by_field_name("value").unwrap()),
            "5"
        );
    }

    #[test]
    fn syntax_errors_still_produce_a_tree() {
        let sf = source("broken.ts", Language::TypeScript, "const = ;");
        let parsed = parse_source_file(FileId(3), sf).expect("parsing should succeed");
        assert!(parsed.has_errors());
    }

    #[test]
    fn location_is_zero_based() {
        let sf = source("file.ts", Language::TypeScript, "\n  let x = 1;");
        let parsed = parse_source_file(FileId(7), sf).unwrap();
        let decl = parsed.root_node().named_child(0).unwrap();

        let loc = parsed.location_for_node(&decl);
        assert_eq!(loc.file_id, FileId(7));
        assert_eq!(loc.range.start_line, 1);
        assert_eq!(loc.range.start_col, 2);
        assert_eq!(loc.range.end_line, 1);
        assert_eq!(loc.range.end_col, 12);
    }

    #[test]
    fn parsed_file_keeps_the_source() {
        let sf = source("keep.ts", Language::TypeScript, "x;");
        let parsed = parse_source_file(FileId(4), sf.clone()).unwrap();
        assert_eq!(parsed.source, sf);
        assert_eq!(parsed.file_id, FileId(4));
    }

    #[test]
    fn empty_file_parses_to_empty_program() {
        let sf = source("empty.ts", Language::TypeScript, "");
        let parsed = parse_source_file(FileId(1), sf).unwrap();
        assert_eq!(parsed.root_node().kind(), "program");
        assert_eq!(parsed.root_node().child_count(), 0);
    }
}
