//! Visitor pattern for TxtAST traversal.
//!
//! This module provides traits and functions for traversing TxtAST nodes.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for type-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//!
//! # Examples
//!
//! ## Collecting Text Content
//!
//! ```rust
//! use revlint_ast::{TxtNode, NodeType, Span, Location, Position, AstArena};
//! use revlint_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct TextCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector<'a> {
//!     fn visit_str(&mut self, node: &TxtNode<'a>) -> VisitResult {
//!         if let Some(text) = node.value {
//!             self.texts.push(text);
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let loc = Location::new(Position::new(1, 0), Position::new(1, 5));
//! let text = arena.alloc(TxtNode::new_text(
//!     NodeType::Str, Span::new(0, 5), loc, "hello", "hello",
//! ));
//! let children = arena.alloc_slice_copy(&[*text]);
//! let doc = TxtNode::new_parent(NodeType::Document, Span::new(0, 5), loc, "hello", children);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! walk_node(&mut collector, &doc);
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use revlint_ast::{TxtNode, NodeData};
//! use revlint_ast::visitor::{Visitor, VisitResult};
//! use std::ops::ControlFlow;
//!
//! struct FirstHeaderFinder {
//!     found_depth: Option<u8>,
//! }
//!
//! impl<'a> Visitor<'a> for FirstHeaderFinder {
//!     fn visit_header(&mut self, node: &TxtNode<'a>) -> VisitResult {
//!         if let NodeData::Header(depth) = node.data {
//!             self.found_depth = Some(depth);
//!         }
//!         ControlFlow::Break(()) // Stop traversal
//!     }
//! }
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_children, walk_node};
