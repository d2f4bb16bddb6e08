//! Walk functions for AST traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.
//! They are used by the default implementations in the `Visitor` trait.

use std::ops::ControlFlow;

use crate::{NodeType, TxtNode};

use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate type-specific visitor method.
///
/// This function:
/// 1. Calls `enter_node` on the visitor
/// 2. Dispatches to the appropriate `visit_*` method based on node type
/// 3. Calls `exit_node` on the visitor
///
/// # Returns
///
/// `ControlFlow::Continue(())` to continue traversal, or `ControlFlow::Break(())` to stop.
pub fn walk_node<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    // Enter hook
    visitor.enter_node(node)?;

    // Dispatch to type-specific method
    let result = match node.node_type {
        // Block-level nodes
        NodeType::Document => visitor.visit_document(node),
        NodeType::Paragraph => visitor.visit_paragraph(node),
        NodeType::Header => visitor.visit_header(node),
        NodeType::BlockQuote => visitor.visit_block_quote(node),
        NodeType::List => visitor.visit_list(node),
        NodeType::ListItem => visitor.visit_list_item(node),
        NodeType::Table => visitor.visit_table(node),
        NodeType::CodeBlock => visitor.visit_code_block(node),
        NodeType::Image => visitor.visit_image(node),
        NodeType::Footnote => visitor.visit_footnote(node),
        NodeType::Caption => visitor.visit_caption(node),

        // Inline-level nodes
        NodeType::Str => visitor.visit_str(node),
        NodeType::Break => visitor.visit_break(node),
        NodeType::Emphasis => visitor.visit_emphasis(node),
        NodeType::Strong => visitor.visit_strong(node),
        NodeType::Code => visitor.visit_code(node),
        NodeType::Link => visitor.visit_link(node),
        NodeType::Ruby => visitor.visit_ruby(node),
        NodeType::Reference => visitor.visit_reference(node),
        NodeType::Comment => visitor.visit_comment(node),
        NodeType::NonString => visitor.visit_non_string(node),
    };

    result?;

    // Exit hook
    visitor.exit_node(node)
}

/// Walks all children of a node.
///
/// This function iterates over `node.children` and calls `walk_node` for
/// each child. It supports early termination via `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: &TxtNode<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in node.children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}
