//! Common types shared by the walker, the parser, and the analyzer.

pub mod context;
