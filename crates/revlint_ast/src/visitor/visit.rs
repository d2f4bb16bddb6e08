//! Visitor trait for traversing TxtAST nodes.
//!
//! This module provides the `Visitor` trait for read-only AST traversal.
//! Each `visit_*` method has a default implementation that walks children,
//! allowing you to override only the node types you care about.
//!
//! # Example
//!
//! ```rust
//! use revlint_ast::{TxtNode, NodeType, Span, Location, Position, AstArena};
//! use revlint_ast::visitor::{Visitor, VisitResult, walk_node, walk_children};
//! use std::ops::ControlFlow;
//!
//! /// Collects all text content from an AST.
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
//! // Usage
//! let arena = AstArena::new();
//! let loc = Location::new(Position::new(1, 0), Position::new(1, 5));
//! let text_node = arena.alloc(TxtNode::new_text(
//!     NodeType::Str, Span::new(0, 5), loc, "hello", "hello",
//! ));
//! let children = arena.alloc_slice_copy(&[*text_node]);
//! let doc = TxtNode::new_parent(NodeType::Document, Span::new(0, 5), loc, "hello", children);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! walk_node(&mut collector, &doc);
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```

use std::ops::ControlFlow;

use crate::TxtNode;

use super::walk::{walk_children, walk_node};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing TxtAST nodes without modification.
///
/// Each `visit_*` method has a default implementation that calls
/// `walk_children` to traverse child nodes. Override specific methods
/// to customize behavior for particular node types.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena allocator.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor<'a>: Sized {
    /// Called before visiting any node. Can be used to set up context.
    #[inline]
    fn enter_node(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a node and all its children.
    #[inline]
    fn exit_node(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits any node by dispatching to the type-specific method.
    ///
    /// Override this if you need custom dispatch logic.
    #[inline]
    fn visit_node(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_node(self, node)
    }

    // === Block-level node visitors ===

    /// Visit a Document node.
    fn visit_document(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Paragraph node.
    fn visit_paragraph(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Header node.
    fn visit_header(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a BlockQuote node.
    fn visit_block_quote(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a List node.
    fn visit_list(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a ListItem node.
    fn visit_list_item(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Table node.
    fn visit_table(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a CodeBlock node.
    ///
    /// The body is a verbatim value, but a caption child may be present.
    fn visit_code_block(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit an Image node.
    ///
    /// A caption child may be present.
    fn visit_image(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Footnote node.
    fn visit_footnote(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Caption node.
    fn visit_caption(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    // === Inline-level node visitors ===

    /// Visit a Str (text) node.
    fn visit_str(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Text leaf
    }

    /// Visit a Break node.
    fn visit_break(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Leaf node
    }

    /// Visit an Emphasis node.
    fn visit_emphasis(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Strong node.
    fn visit_strong(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Code (inline) node.
    fn visit_code(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Inline code leaf
    }

    /// Visit a Link node.
    fn visit_link(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Ruby node.
    fn visit_ruby(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Reference node.
    ///
    /// Reference tags are retained with an empty child list.
    fn visit_reference(&mut self, node: &TxtNode<'a>) -> VisitResult {
        walk_children(self, node)
    }

    /// Visit a Comment node.
    fn visit_comment(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Leaf node
    }

    /// Visit a NonString node.
    fn visit_non_string(&mut self, _node: &TxtNode<'a>) -> VisitResult {
        ControlFlow::Continue(()) // Leaf node
    }
}
