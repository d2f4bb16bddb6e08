//! # revlint_parser
//!
//! Re:VIEW markup parser for revlint.
//!
//! This crate provides:
//! - A `Parser` trait for implementing custom parsers
//! - The built-in Re:VIEW parser
//!
//! ## Architecture
//!
//! Parsing happens in two stages. A line-classifying chunker first
//! groups the document into typed chunks (paragraphs, headings, lists,
//! block markup, comments); one builder per chunk kind then turns each
//! chunk into position-annotated TxtAST nodes, recursively decomposing
//! text runs into inline tag nodes. Every node records the exact raw
//! source slice it covers, and the whole tree is validated against the
//! source before it is returned: callers either get a fully
//! position-accurate AST or an error, never a tree with unverified
//! location metadata.
//!
//! ## Example
//!
//! ```rust
//! use revlint_parser::{ReviewParser, Parser};
//! use revlint_ast::AstArena;
//!
//! let arena = AstArena::new();
//! let parser = ReviewParser::new();
//! let source = "= Hello\n\nThis is a paragraph.";
//!
//! let ast = parser.parse(&arena, source).unwrap();
//! assert_eq!(ast.children.len(), 2);
//! ```

mod block;
mod builder;
mod chunker;
mod error;
mod inline;
mod position;
mod review;
mod traits;
mod validate;

pub use error::ParseError;
pub use review::ReviewParser;
pub use traits::Parser;

use revlint_ast::{AstArena, TxtNode};

/// Parses a Re:VIEW document into TxtAST.
///
/// Convenience entry point equivalent to
/// `ReviewParser::new().parse(arena, source)`.
pub fn parse<'a>(arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
    ReviewParser::new().parse(arena, source)
}
