//! # code-walker
//!
//! Walk a source tree, parse every matching file with tree-sitter, and
//! replay each syntax tree through callbacks.
//!
//! - **Walk**: recursive discovery with extension filtering, decoding, and exclusions
//! - **Parse**: tree-sitter grammars for TypeScript, JavaScript, Python, Rust, and more
//! - **Visit**: depth-first pre-order traversal handing every node to `on_node`
//!
//! ## Example
//!
//! ```rust,no_run
//! use code_walker::CodeAnalyzer;
//!
//! let mut functions = Vec::new();
//!
//! CodeAnalyzer::new()
//!     .set_allowed_file_types(["ts", "tsx"])
//!     .set_excluded_files(["node_modules", "*.d.ts"])
//!     .on_file_start(|file| println!("parsing {}", file.path))
//!     .on_node(|node, file| {
//!         if node.kind() == "function_declaration" {
//!             if let Some(name) = node.child_by_field_name("name") {
//!                 functions.push(file.text_for_node(&name));
//!             }
//!         }
//!     })
//!     .analyze("src")?;
//!
//! println!("found {} functions", functions.len());
//! # Ok::<(), code_walker::AnalyzerError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod parse;
pub mod types;
pub mod visit;
pub mod walk;

// Re-export commonly used types for convenience
pub use analyzer::{AnalysisSummary, CodeAnalyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, Result};
pub use parse::ast::{FileId, ParsedFile};
pub use types::context::{Language, SourceFile};
pub use walk::FileTreeWalker;

pub use tree_sitter;
