//! Line classifier and chunker.
//!
//! The first parsing stage: splits the raw document into physical
//! lines and groups consecutive lines of compatible classification
//! into typed chunks. Classification is priority ordered; the
//! comment-absorption and open-block rules are checked before any
//! content-shape rule.

use revlint_ast::Span;

use crate::ParseError;

/// Structural kind of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChunkKind {
    Paragraph,
    Heading,
    UnorderedList,
    OrderedList,
    DefinitionList,
    Block,
    Comment,
}

/// One physical line of the source, without its terminator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'s> {
    /// Line content, excluding `\r\n` / `\n`.
    pub text: &'s str,
    /// 1-based line number.
    pub number: u32,
    /// Byte offset of the line start in the source.
    pub offset: u32,
    /// True for `#@#` / `#@warn(...)` lines.
    pub comment: bool,
}

impl<'s> Line<'s> {
    /// Byte offset just past the line content (before the terminator).
    pub fn end(&self) -> u32 {
        self.offset + self.text.len() as u32
    }

    /// Span of the line content.
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.end())
    }

    /// True if the line is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A maximal run of lines classified under one kind.
///
/// Chunks never overlap and are produced in source order; blank lines
/// separate chunks and belong to none.
#[derive(Debug)]
pub(crate) struct Chunk<'s> {
    pub kind: ChunkKind,
    pub lines: Vec<Line<'s>>,
    /// For Block chunks: true when delimited by `//name...{` and `//}`
    /// markers, false for a single-line block.
    pub fenced: bool,
}

impl<'s> Chunk<'s> {
    fn new(kind: ChunkKind, line: Line<'s>) -> Self {
        Self {
            kind,
            lines: vec![line],
            fenced: false,
        }
    }

    /// Span from the first line start to the last line end.
    pub fn span(&self) -> Span {
        let start = self.lines.first().map_or(0, |l| l.offset);
        let end = self.lines.last().map_or(start, Line::end);
        Span::new(start, end)
    }
}

/// Splits the source into lines, tracking byte offsets.
///
/// Handles both `\n` and `\r\n` terminators; the terminator is not
/// part of the line text.
fn split_lines(source: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0u32;
    let mut number = 1u32;
    for segment in source.split_inclusive('\n') {
        let text = segment.strip_suffix('\n').unwrap_or(segment);
        let text = text.strip_suffix('\r').unwrap_or(text);
        lines.push(Line {
            text,
            number,
            offset,
            comment: false,
        });
        offset += segment.len() as u32;
        number += 1;
    }
    lines
}

/// True for `#@#...` and `#@warn(...)` comment lines.
pub(crate) fn is_comment(text: &str) -> bool {
    text.starts_with("#@#") || text.starts_with("#@warn(")
}

/// True for the multi-line block close marker.
fn is_block_close(text: &str) -> bool {
    text == "//}"
}

/// Returns the block name if the line is a block open marker.
///
/// A block marker is `//` followed by one or more word characters;
/// `//}` has no name and is not an open marker.
pub(crate) fn block_open(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("//")?;
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if len == 0 {
        return None;
    }
    Some(&rest[..len])
}

fn marker_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    i
}

/// Returns the marker prefix length of an unordered list item
/// (`<indent>*+<space>`).
pub(crate) fn unordered_item(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = marker_ws(bytes, 0);
    let stars_start = i;
    while i < bytes.len() && bytes[i] == b'*' {
        i += 1;
    }
    if i == stars_start {
        return None;
    }
    let after = marker_ws(bytes, i);
    if after == i {
        return None;
    }
    Some(after)
}

/// Returns the marker prefix length of an ordered list item
/// (`<indent><digits>.<space>`).
pub(crate) fn ordered_item(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = marker_ws(bytes, 0);
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start || bytes.get(i) != Some(&b'.') {
        return None;
    }
    i += 1;
    let after = marker_ws(bytes, i);
    if after == i {
        return None;
    }
    Some(after)
}

/// Returns the marker prefix length of a definition list term
/// (`<indent>:<space>`).
pub(crate) fn definition_term(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let i = marker_ws(bytes, 0);
    if bytes.get(i) != Some(&b':') {
        return None;
    }
    let after = marker_ws(bytes, i + 1);
    if after == i + 1 {
        return None;
    }
    Some(after)
}

/// Returns the leading whitespace length of the line.
pub(crate) fn leading_indent(text: &str) -> usize {
    marker_ws(text.as_bytes(), 0)
}

fn flush<'s>(current: &mut Option<Chunk<'s>>, chunks: &mut Vec<Chunk<'s>>) {
    if let Some(chunk) = current.take() {
        chunks.push(chunk);
    }
}

fn continue_or_start<'s>(
    current: &mut Option<Chunk<'s>>,
    chunks: &mut Vec<Chunk<'s>>,
    kind: ChunkKind,
    line: Line<'s>,
) {
    match current.as_mut() {
        Some(chunk) if chunk.kind == kind => chunk.lines.push(line),
        _ => {
            flush(current, chunks);
            *current = Some(Chunk::new(kind, line));
        }
    }
}

/// Splits the document into an ordered list of chunks.
///
/// Fails if a multi-line block is still open at end of input.
pub(crate) fn chunk(source: &str) -> Result<Vec<Chunk<'_>>, ParseError> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current: Option<Chunk> = None;
    // Name and line of the open marker while a fenced block is being
    // accumulated.
    let mut open: Option<(&str, u32)> = None;

    for mut line in split_lines(source) {
        // Inside an open block every line is body, comment lines
        // included, until the close marker.
        if open.is_some() {
            line.comment = is_comment(line.text);
            let closed = is_block_close(line.text);
            if let Some(block) = current.as_mut() {
                block.lines.push(line);
            }
            if closed {
                open = None;
                flush(&mut current, &mut chunks);
            }
            continue;
        }

        if is_comment(line.text) {
            line.comment = true;
            match current.as_mut() {
                // A comment inside an open paragraph does not break it.
                Some(chunk)
                    if chunk.kind == ChunkKind::Paragraph || chunk.kind == ChunkKind::Comment =>
                {
                    chunk.lines.push(line);
                }
                _ => {
                    flush(&mut current, &mut chunks);
                    current = Some(Chunk::new(ChunkKind::Comment, line));
                }
            }
            continue;
        }

        if let Some(name) = block_open(line.text) {
            flush(&mut current, &mut chunks);
            // The open/close decision depends only on the line's final
            // character; a literal `{` inside a bracket argument does
            // not open a body.
            let fenced = line.text.ends_with('{');
            let mut block = Chunk::new(ChunkKind::Block, line);
            block.fenced = fenced;
            current = Some(block);
            if fenced {
                open = Some((name, line.number));
            } else {
                flush(&mut current, &mut chunks);
            }
            continue;
        }

        if line.text.starts_with('=') {
            flush(&mut current, &mut chunks);
            chunks.push(Chunk::new(ChunkKind::Heading, line));
            continue;
        }

        if line.is_blank() {
            flush(&mut current, &mut chunks);
            continue;
        }

        if definition_term(line.text).is_some() {
            continue_or_start(&mut current, &mut chunks, ChunkKind::DefinitionList, line);
            continue;
        }

        // An indented line directly after a term (or another
        // continuation) extends the definition list.
        if matches!(current.as_ref(), Some(c) if c.kind == ChunkKind::DefinitionList)
            && leading_indent(line.text) > 0
        {
            if let Some(chunk) = current.as_mut() {
                chunk.lines.push(line);
            }
            continue;
        }

        if unordered_item(line.text).is_some() {
            continue_or_start(&mut current, &mut chunks, ChunkKind::UnorderedList, line);
            continue;
        }

        if ordered_item(line.text).is_some() {
            continue_or_start(&mut current, &mut chunks, ChunkKind::OrderedList, line);
            continue;
        }

        continue_or_start(&mut current, &mut chunks, ChunkKind::Paragraph, line);
    }

    if let Some((name, line)) = open {
        return Err(ParseError::unterminated_block(name, line));
    }
    flush(&mut current, &mut chunks);
    Ok(chunks)
}
