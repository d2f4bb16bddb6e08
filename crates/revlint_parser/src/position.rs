//! Byte-offset to line/column mapping.

use revlint_ast::{Location, Position, Span};

/// Maps byte offsets into 1-based-line / 0-based-column positions.
///
/// Built once per parse from the line terminators in the source text;
/// every node's `loc` is derived from its byte span through this index.
pub(crate) struct LineIndex {
    /// Byte offset of the start of each line. The first entry is 0.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Builds the index for the given source text.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Returns the position of a byte offset.
    pub fn position(&self, offset: u32) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        Position::new(line as u32, offset - self.line_starts[line - 1])
    }

    /// Returns the location covering a byte span.
    pub fn location(&self, span: Span) -> Location {
        Location::new(self.position(span.start), self.position(span.end))
    }
}
