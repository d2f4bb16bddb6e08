//! Inline tag scanner.
//!
//! Decomposes a run of text into plain `Str` nodes and `@<name>{...}`
//! tag nodes. The scan is cursor based: find the next tag, emit the
//! text before it, emit the tag's node, advance past the match. An
//! escaped `\}` inside the braces does not terminate the tag; a tag
//! with no unescaped closing brace is plain text.

use revlint_ast::{NodeData, NodeType, Span, TxtNode};
use tracing::warn;

use crate::builder::BuildContext;

/// A located inline tag occurrence. Transient: consumed immediately by
/// the dispatcher.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Tag<'s> {
    /// Tag name between `@<` and `>`.
    pub name: &'s str,
    /// Raw content between the braces, escapes intact.
    pub content: &'s str,
    /// Offset of the content within the full match.
    pub content_offset: usize,
    /// Total length of the full match `@<name>{...}`.
    pub len: usize,
}

/// Finds the next inline tag in `text`.
///
/// Returns the byte offset of the match start and the tag. Candidate
/// `@<` sequences that do not form a complete tag are skipped.
pub(crate) fn find_inline_tag(text: &str) -> Option<(usize, Tag<'_>)> {
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(found) = text[search..].find("@<") {
        let at = search + found;
        let name_start = at + 2;
        let name_len = text[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        let name_end = name_start + name_len;
        if name_len == 0
            || bytes.get(name_end) != Some(&b'>')
            || bytes.get(name_end + 1) != Some(&b'{')
        {
            search = at + 2;
            continue;
        }

        let content_start = name_end + 2;
        let mut i = content_start;
        let close = loop {
            match bytes.get(i).copied() {
                None => break None,
                Some(b'\\') if i + 1 < bytes.len() => i += 2,
                Some(b'}') => break Some(i),
                Some(_) => i += 1,
            }
        };
        let Some(close) = close else {
            // No unescaped closing brace: not a tag.
            search = at + 2;
            continue;
        };

        return Some((
            at,
            Tag {
                name: &text[name_start..name_end],
                content: &text[content_start..close],
                content_offset: content_start - at,
                len: close + 1 - at,
            },
        ));
    }
    None
}

/// Resolves markup escapes: `\}` becomes `}` and `\]` becomes `]`.
/// Any other backslash is kept verbatim.
pub(crate) fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('\\') {
        match rest[pos + 1..].chars().next() {
            Some(c @ ('}' | ']')) => {
                out.push_str(&rest[..pos]);
                out.push(c);
                rest = &rest[pos + 2..];
            }
            _ => {
                out.push_str(&rest[..pos + 1]);
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses one text run into an ordered, gap-free node sequence.
///
/// `offset` is the absolute byte offset of `text` in the source.
pub(crate) fn parse_inline<'a>(
    ctx: &BuildContext<'a, '_>,
    text: &str,
    offset: u32,
) -> Vec<TxtNode<'a>> {
    let mut nodes = Vec::new();
    let mut rest = text;
    let mut cursor = offset;

    while let Some((at, tag)) = find_inline_tag(rest) {
        if at > 0 {
            nodes.push(ctx.str_node(Span::new(cursor, cursor + at as u32)));
        }
        let start = cursor + at as u32;
        if let Some(node) = build_tag(ctx, &tag, start) {
            nodes.push(node);
        }
        let consumed = at + tag.len;
        rest = &rest[consumed..];
        cursor += consumed as u32;
    }

    if !rest.is_empty() {
        nodes.push(ctx.str_node(Span::new(cursor, cursor + rest.len() as u32)));
    }
    nodes
}

/// Builds the node for one tag occurrence, or None for tag names the
/// parser drops.
fn build_tag<'a>(ctx: &BuildContext<'a, '_>, tag: &Tag<'_>, start: u32) -> Option<TxtNode<'a>> {
    let span = Span::new(start, start + tag.len as u32);
    let content_start = start + tag.content_offset as u32;
    let content_span = Span::new(content_start, content_start + tag.content.len() as u32);

    match tag.name {
        "b" | "strong" | "kw" | "ttb" => Some(wrap(ctx, NodeType::Strong, span, content_span)),
        "i" | "em" | "tti" | "ami" | "bou" | "u" | "tt" | "tcy" => {
            Some(wrap(ctx, NodeType::Emphasis, span, content_span))
        }
        "code" => Some(ctx.text_node(NodeType::Code, span, &unescape(tag.content))),
        "href" => Some(build_href(ctx, tag, span, content_span)),
        "ruby" => Some(build_ruby(ctx, tag, span, content_span)),
        // Pure references: the consumed span is kept addressable, but
        // nothing inside it is rendered as text.
        "chap" | "title" | "chapref" | "list" | "img" | "table" | "hd" | "column" | "fn" => {
            Some(ctx.parent_node(NodeType::Reference, span, &[]))
        }
        "br" => Some(ctx.leaf_node(NodeType::Break, span)),
        "uchar" | "icon" | "m" | "raw" => Some(ctx.leaf_node(NodeType::NonString, span)),
        other => {
            warn!(tag = other, "dropping unknown inline tag");
            None
        }
    }
}

/// One typed wrapper around a single Str child.
fn wrap<'a>(
    ctx: &BuildContext<'a, '_>,
    node_type: NodeType,
    span: Span,
    content_span: Span,
) -> TxtNode<'a> {
    let child = ctx.str_node(content_span);
    ctx.parent_node(node_type, span, &[child])
}

/// `@<href>{url}` or `@<href>{url, label}`; the label defaults to the
/// URL.
fn build_href<'a>(
    ctx: &BuildContext<'a, '_>,
    tag: &Tag<'_>,
    span: Span,
    content_span: Span,
) -> TxtNode<'a> {
    let (url, label_span) = match tag.content.find(',') {
        Some(comma) => {
            let after = &tag.content[comma + 1..];
            let skipped = after.len() - after.trim_start().len();
            let label_start = content_span.start + (comma + 1 + skipped) as u32;
            (&tag.content[..comma], Span::new(label_start, content_span.end))
        }
        None => (tag.content, content_span),
    };
    let label = ctx.str_node(label_span);
    let mut node = ctx.parent_node(NodeType::Link, span, &[label]);
    node.data = NodeData::link(ctx.alloc_str(url));
    node
}

/// `@<ruby>{base, reading}`; the base text is the child, the reading
/// is node data.
fn build_ruby<'a>(
    ctx: &BuildContext<'a, '_>,
    tag: &Tag<'_>,
    span: Span,
    content_span: Span,
) -> TxtNode<'a> {
    let (base_span, reading) = match tag.content.find(',') {
        Some(comma) => (
            Span::new(content_span.start, content_span.start + comma as u32),
            tag.content[comma + 1..].trim(),
        ),
        None => (content_span, ""),
    };
    let base = ctx.str_node(base_span);
    let mut node = ctx.parent_node(NodeType::Ruby, span, &[base]);
    node.data = NodeData::ruby(ctx.alloc_str(&unescape(reading)));
    node
}
