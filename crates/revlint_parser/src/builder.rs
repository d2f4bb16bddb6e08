//! Chunk-to-node builders.
//!
//! The second parsing stage: one builder per chunk kind, dispatched
//! from [`build_chunk`]. Nodes are assembled bottom-up; every node
//! gets its byte span, its location derived through the line index,
//! and the exact raw source slice, all in one place
//! ([`BuildContext`]).

use revlint_ast::{AstArena, NodeData, NodeType, Span, TxtNode};

use crate::block;
use crate::chunker::{
    definition_term, leading_indent, ordered_item, unordered_item, Chunk, ChunkKind, Line,
};
use crate::inline::{parse_inline, unescape};
use crate::position::LineIndex;

/// Shared state for one parse call: the arena, the source text, and
/// the offset-to-position index.
pub(crate) struct BuildContext<'a, 's> {
    pub arena: &'a AstArena,
    pub source: &'s str,
    pub index: &'s LineIndex,
}

impl<'a, 's> BuildContext<'a, 's> {
    /// Copies a string into the arena.
    pub fn alloc_str(&self, s: &str) -> &'a str {
        self.arena.alloc_str(s)
    }

    fn raw(&self, span: Span) -> &'a str {
        self.arena.alloc_str(span.slice(self.source))
    }

    /// Creates a parent node covering `span` with the given children.
    pub fn parent_node(
        &self,
        node_type: NodeType,
        span: Span,
        children: &[TxtNode<'a>],
    ) -> TxtNode<'a> {
        TxtNode::new_parent(
            node_type,
            span,
            self.index.location(span),
            self.raw(span),
            self.arena.alloc_slice_copy(children),
        )
    }

    /// Creates a text node covering `span` with an explicit value.
    pub fn text_node(&self, node_type: NodeType, span: Span, value: &str) -> TxtNode<'a> {
        TxtNode::new_text(
            node_type,
            span,
            self.index.location(span),
            self.raw(span),
            self.arena.alloc_str(value),
        )
    }

    /// Creates a leaf node covering `span`.
    pub fn leaf_node(&self, node_type: NodeType, span: Span) -> TxtNode<'a> {
        TxtNode::new_leaf(node_type, span, self.index.location(span), self.raw(span))
    }

    /// Creates a Str node whose value is the escape-resolved raw text.
    pub fn str_node(&self, span: Span) -> TxtNode<'a> {
        self.text_node(NodeType::Str, span, &unescape(span.slice(self.source)))
    }
}

/// Builds the node for one chunk.
///
/// Standalone comment chunks are transparent and yield no node;
/// unrecognized block names are dropped inside the block builder.
pub(crate) fn build_chunk<'a>(ctx: &BuildContext<'a, '_>, chunk: &Chunk<'_>) -> Option<TxtNode<'a>> {
    match chunk.kind {
        ChunkKind::Paragraph => Some(build_paragraph(ctx, &chunk.lines)),
        ChunkKind::Heading => build_heading(ctx, chunk),
        ChunkKind::UnorderedList => Some(build_list(ctx, chunk, false)),
        ChunkKind::OrderedList => Some(build_list(ctx, chunk, true)),
        ChunkKind::DefinitionList => Some(build_definition_list(ctx, chunk)),
        ChunkKind::Block => block::build_block(ctx, chunk),
        ChunkKind::Comment => None,
    }
}

/// Builds a Paragraph node from a run of lines.
///
/// Also used for the blank-separated runs inside quote-family blocks.
/// Comment-flagged lines contribute a single Comment leaf instead of
/// being inline-parsed.
pub(crate) fn build_paragraph<'a>(ctx: &BuildContext<'a, '_>, lines: &[Line<'_>]) -> TxtNode<'a> {
    let mut children = Vec::new();
    for line in lines {
        if line.comment {
            children.push(ctx.leaf_node(NodeType::Comment, line.span()));
        } else {
            children.extend(parse_inline(ctx, line.text, line.offset));
        }
    }
    let start = lines.first().map_or(0, |l| l.offset);
    let end = lines.last().map_or(start, Line::end);
    ctx.parent_node(NodeType::Paragraph, Span::new(start, end), &children)
}

/// Builds a Header node from a one-line heading chunk.
///
/// The depth is the length of the leading `=` run; an optional
/// bracketed chapter id and any following spaces are skipped before
/// the label.
fn build_heading<'a>(ctx: &BuildContext<'a, '_>, chunk: &Chunk<'_>) -> Option<TxtNode<'a>> {
    let line = chunk.lines.first()?;
    let text = line.text;
    let bytes = text.as_bytes();

    let depth = bytes.iter().take_while(|b| **b == b'=').count();
    let mut idx = depth;
    if bytes.get(idx) == Some(&b'[') {
        if let Some(close) = block::closing_bracket(bytes, idx + 1) {
            idx = close + 1;
        }
    }
    while bytes.get(idx) == Some(&b' ') {
        idx += 1;
    }

    let children = if idx < text.len() {
        vec![ctx.str_node(Span::new(line.offset + idx as u32, line.end()))]
    } else {
        Vec::new()
    };
    let mut node = ctx.parent_node(NodeType::Header, line.span(), &children);
    node.data = NodeData::header(depth.min(u8::MAX as usize) as u8);
    Some(node)
}

/// Builds a List node from an unordered or ordered list chunk; each
/// line becomes one ListItem with its marker prefix stripped.
fn build_list<'a>(ctx: &BuildContext<'a, '_>, chunk: &Chunk<'_>, ordered: bool) -> TxtNode<'a> {
    let items: Vec<TxtNode<'a>> = chunk
        .lines
        .iter()
        .map(|line| {
            let prefix = if ordered {
                ordered_item(line.text)
            } else {
                unordered_item(line.text)
            }
            .unwrap_or(0);
            build_list_item(ctx, line, prefix)
        })
        .collect();
    let mut node = ctx.parent_node(NodeType::List, chunk.span(), &items);
    node.data = NodeData::list(ordered);
    node
}

/// Builds a List node from a definition list chunk.
///
/// Term lines have their `: ` prefix stripped, continuation lines
/// their indent. Continuation lines stay separate sibling ListItems;
/// they are deliberately not merged into the preceding term's item.
fn build_definition_list<'a>(ctx: &BuildContext<'a, '_>, chunk: &Chunk<'_>) -> TxtNode<'a> {
    let items: Vec<TxtNode<'a>> = chunk
        .lines
        .iter()
        .map(|line| {
            let prefix = definition_term(line.text).unwrap_or_else(|| leading_indent(line.text));
            build_list_item(ctx, line, prefix)
        })
        .collect();
    ctx.parent_node(NodeType::List, chunk.span(), &items)
}

/// One ListItem covering the line content after the stripped prefix.
fn build_list_item<'a>(ctx: &BuildContext<'a, '_>, line: &Line<'_>, prefix: usize) -> TxtNode<'a> {
    let start = line.offset + prefix as u32;
    let children = parse_inline(ctx, &line.text[prefix..], start);
    ctx.parent_node(NodeType::ListItem, Span::new(start, line.end()), &children)
}
