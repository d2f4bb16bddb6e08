//! Block markup builders.
//!
//! Parses the `//name[arg1][arg2]...` open line of a Block chunk and
//! dispatches on the block name. Unrecognized names yield no node:
//! markup the linter does not understand is inert, not fatal.

use revlint_ast::{NodeType, Span, TxtNode};
use tracing::warn;

use crate::builder::{build_paragraph, BuildContext};
use crate::chunker::{block_open, Chunk, Line};
use crate::inline::parse_inline;

/// One bracketed block argument with its absolute start offset.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BlockArg<'s> {
    /// Argument text between the brackets, escapes intact.
    pub raw: &'s str,
    /// Absolute byte offset of the argument's first content byte.
    pub offset: u32,
}

/// A parsed block open line. Transient: used only while translating
/// the chunk into a node.
#[derive(Debug)]
pub(crate) struct Block<'s, 'c> {
    pub name: &'s str,
    pub args: Vec<BlockArg<'s>>,
    pub chunk: &'c Chunk<'s>,
}

/// Finds the matching unescaped `]` starting at `from`.
///
/// Skips backslash-escaped characters, so a `\]` inside the argument
/// does not close it.
pub(crate) fn closing_bracket(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    loop {
        match bytes.get(i).copied() {
            None => return None,
            Some(b'\\') if i + 1 < bytes.len() => i += 2,
            Some(b']') => return Some(i),
            Some(_) => i += 1,
        }
    }
}

/// Parses the name and bracket arguments from the chunk's first line.
fn parse_block<'s, 'c>(chunk: &'c Chunk<'s>) -> Option<Block<'s, 'c>> {
    let first = chunk.lines.first()?;
    let name = block_open(first.text)?;
    let bytes = first.text.as_bytes();

    let mut args = Vec::new();
    let mut i = 2 + name.len();
    while bytes.get(i) == Some(&b'[') {
        let start = i + 1;
        let Some(close) = closing_bracket(bytes, start) else {
            break;
        };
        args.push(BlockArg {
            raw: &first.text[start..close],
            offset: first.offset + start as u32,
        });
        i = close + 1;
    }

    Some(Block { name, args, chunk })
}

/// Body lines of a fenced block, excluding the open and close markers.
fn body<'b, 's>(block: &'b Block<'s, '_>) -> &'b [Line<'s>] {
    let lines = &block.chunk.lines;
    if block.chunk.fenced && lines.len() >= 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[]
    }
}

/// Builds the node for a Block chunk, dispatching on the block name.
pub(crate) fn build_block<'a>(ctx: &BuildContext<'a, '_>, chunk: &Chunk<'_>) -> Option<TxtNode<'a>> {
    let block = parse_block(chunk)?;
    match block.name {
        "table" => Some(build_table(ctx, &block)),
        "footnote" => Some(build_footnote(ctx, &block)),
        "quote" | "lead" | "read" | "note" | "memo" | "tip" | "info" | "warning" | "important"
        | "caution" | "notice" => Some(build_quote(ctx, &block)),
        "list" | "listnum" => Some(build_code(ctx, &block, 1)),
        "emlist" | "emlistnum" | "source" | "cmd" => Some(build_code(ctx, &block, 0)),
        "image" | "indepimage" | "numberlessimage" | "graph" => Some(build_image(ctx, &block)),
        other => {
            warn!(block = other, "dropping unrecognized block");
            None
        }
    }
}

/// Caption child built from one bracket argument, inline-parsed at its
/// exact position.
fn build_caption<'a>(ctx: &BuildContext<'a, '_>, arg: &BlockArg<'_>) -> TxtNode<'a> {
    let span = Span::new(arg.offset, arg.offset + arg.raw.len() as u32);
    let children = parse_inline(ctx, arg.raw, arg.offset);
    ctx.parent_node(NodeType::Caption, span, &children)
}

/// True for a table separator row consisting only of dashes.
fn is_separator(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b == b'-')
}

/// `//table[id][caption]{ ... //}`: rows split on tabs into ListItem
/// cells; a leading `.` on a cell is a lint placeholder and is
/// stripped before parsing.
fn build_table<'a>(ctx: &BuildContext<'a, '_>, block: &Block<'_, '_>) -> TxtNode<'a> {
    let mut children = Vec::new();
    if let Some(arg) = block.args.get(1) {
        children.push(build_caption(ctx, arg));
    }

    for line in body(block) {
        if line.comment {
            children.push(ctx.leaf_node(NodeType::Comment, line.span()));
            continue;
        }
        if is_separator(line.text) {
            continue;
        }
        let mut col = 0usize;
        for cell in line.text.split('\t') {
            let mut content_start = col;
            let mut content = cell;
            if let Some(stripped) = content.strip_prefix('.') {
                content_start += 1;
                content = stripped;
            }
            let start = line.offset + content_start as u32;
            let end = line.offset + (col + cell.len()) as u32;
            let inline = parse_inline(ctx, content, start);
            children.push(ctx.parent_node(NodeType::ListItem, Span::new(start, end), &inline));
            col += cell.len() + 1;
        }
    }

    ctx.parent_node(NodeType::Table, block.chunk.span(), &children)
}

/// `//footnote[id][body]`: the second argument becomes one Paragraph
/// child, inline-parsed with `\]` escapes resolved in its Str values.
fn build_footnote<'a>(ctx: &BuildContext<'a, '_>, block: &Block<'_, '_>) -> TxtNode<'a> {
    let mut children = Vec::new();
    if let Some(arg) = block.args.get(1) {
        let span = Span::new(arg.offset, arg.offset + arg.raw.len() as u32);
        let inline = parse_inline(ctx, arg.raw, arg.offset);
        children.push(ctx.parent_node(NodeType::Paragraph, span, &inline));
    }
    ctx.parent_node(NodeType::Footnote, block.chunk.span(), &children)
}

/// Quote/lead/short-column family: the body is split into one
/// Paragraph child per blank-separated run; comment lines belong to
/// the run they appear in.
fn build_quote<'a>(ctx: &BuildContext<'a, '_>, block: &Block<'_, '_>) -> TxtNode<'a> {
    let mut children = Vec::new();
    let mut run: Vec<Line> = Vec::new();
    for line in body(block) {
        if line.is_blank() {
            if !run.is_empty() {
                children.push(build_paragraph(ctx, &run));
                run.clear();
            }
        } else {
            run.push(*line);
        }
    }
    if !run.is_empty() {
        children.push(build_paragraph(ctx, &run));
    }
    ctx.parent_node(NodeType::BlockQuote, block.chunk.span(), &children)
}

/// Code-listing family: the body is preserved verbatim as the node's
/// value; the raw span covers the markers. The caption argument index
/// depends on the block name.
fn build_code<'a>(
    ctx: &BuildContext<'a, '_>,
    block: &Block<'_, '_>,
    caption_index: usize,
) -> TxtNode<'a> {
    let lines = body(block);
    let value = match (lines.first(), lines.last()) {
        (Some(first), Some(last)) => Span::new(first.offset, last.end()).slice(ctx.source),
        _ => "",
    };
    let mut node = ctx.text_node(NodeType::CodeBlock, block.chunk.span(), value);
    if let Some(arg) = block.args.get(caption_index) {
        let caption = build_caption(ctx, arg);
        node.children = ctx.arena.alloc_slice_copy(&[caption]);
    }
    node
}

/// Image family: a leaf with an optional Caption child from the
/// second argument.
fn build_image<'a>(ctx: &BuildContext<'a, '_>, block: &Block<'_, '_>) -> TxtNode<'a> {
    let mut node = ctx.leaf_node(NodeType::Image, block.chunk.span());
    if let Some(arg) = block.args.get(1) {
        let caption = build_caption(ctx, arg);
        node.children = ctx.arena.alloc_slice_copy(&[caption]);
    }
    node
}
