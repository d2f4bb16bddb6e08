//! Post-build consistency validation.
//!
//! A read-only walk over the finished tree confirming that every
//! node's recorded raw text matches its source range and that its
//! location agrees with the byte span. A mismatch would make every
//! downstream lint message point at the wrong source span, so it
//! aborts the parse.

use std::ops::ControlFlow;

use revlint_ast::{TxtNode, VisitResult, Visitor, visitor::walk_node};

use crate::position::LineIndex;
use crate::ParseError;

struct ConsistencyChecker<'s> {
    source: &'s str,
    index: &'s LineIndex,
    error: Option<ParseError>,
}

impl<'a, 's> Visitor<'a> for ConsistencyChecker<'s> {
    fn enter_node(&mut self, node: &TxtNode<'a>) -> VisitResult {
        let span = node.span;
        let actual = self
            .source
            .get(span.start as usize..span.end as usize);
        if actual != Some(node.raw) || node.loc != self.index.location(span) {
            self.error = Some(ParseError::inconsistent(node.node_type, node.loc.start));
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// Walks the tree and fails on the first inconsistent node.
pub(crate) fn validate(
    source: &str,
    index: &LineIndex,
    root: &TxtNode<'_>,
) -> Result<(), ParseError> {
    let mut checker = ConsistencyChecker {
        source,
        index,
        error: None,
    };
    let _ = walk_node(&mut checker, root);
    match checker.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use revlint_ast::{AstArena, Location, NodeType, Position, Span};

    use super::*;

    fn str_node<'a>(arena: &'a AstArena, source: &str, span: Span, index: &LineIndex) -> TxtNode<'a> {
        TxtNode::new_text(
            NodeType::Str,
            span,
            index.location(span),
            arena.alloc_str(span.slice(source)),
            arena.alloc_str(span.slice(source)),
        )
    }

    #[test]
    fn test_consistent_tree_passes() {
        let source = "hello world";
        let arena = AstArena::new();
        let index = LineIndex::new(source);

        let child = str_node(&arena, source, Span::new(0, 5), &index);
        let children = arena.alloc_slice_copy(&[child]);
        let doc = TxtNode::new_parent(
            NodeType::Document,
            Span::new(0, 11),
            index.location(Span::new(0, 11)),
            arena.alloc_str(source),
            children,
        );

        assert!(validate(source, &index, &doc).is_ok());
    }

    #[test]
    fn test_raw_mismatch_is_detected() {
        let source = "hello world";
        let arena = AstArena::new();
        let index = LineIndex::new(source);

        let mut child = str_node(&arena, source, Span::new(0, 5), &index);
        child.raw = "WRONG";
        let children = arena.alloc_slice_copy(&[child]);
        let doc = TxtNode::new_parent(
            NodeType::Document,
            Span::new(0, 11),
            index.location(Span::new(0, 11)),
            arena.alloc_str(source),
            children,
        );

        let err = validate(source, &index, &doc).unwrap_err();
        match err {
            ParseError::InconsistentNode { node_type, .. } => {
                assert_eq!(node_type, NodeType::Str);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_bounds_span_is_detected() {
        let source = "short";
        let index = LineIndex::new(source);

        let node = TxtNode::new_text(
            NodeType::Str,
            Span::new(0, 99),
            Location::new(Position::new(1, 0), Position::new(1, 99)),
            "short",
            "short",
        );

        assert!(validate(source, &index, &node).is_err());
    }

    #[test]
    fn test_loc_mismatch_is_detected() {
        let source = "hello";
        let index = LineIndex::new(source);

        let node = TxtNode::new_text(
            NodeType::Str,
            Span::new(0, 5),
            Location::new(Position::new(2, 0), Position::new(2, 5)),
            "hello",
            "hello",
        );

        assert!(validate(source, &index, &node).is_err());
    }
}
