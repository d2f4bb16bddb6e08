//! Re:VIEW markup parser.
//!
//! Converts Re:VIEW-style technical-writing markup into TxtAST in two
//! stages: the chunker groups lines into typed chunks, then one
//! builder per chunk kind produces position-annotated nodes. The
//! finished tree is validated before it is returned.

use revlint_ast::{AstArena, NodeType, Span, TxtNode};
use tracing::debug;

use crate::builder::{build_chunk, BuildContext};
use crate::chunker;
use crate::position::LineIndex;
use crate::validate::validate;
use crate::{ParseError, Parser};

/// Re:VIEW parser implementation.
///
/// Supports the line-oriented Re:VIEW surface:
/// - headings (`=`, `==`, ... with optional bracketed id)
/// - unordered / ordered / definition lists
/// - block markup (`//name[args]{ ... //}` and single-line forms)
/// - inline tags (`@<name>{content}` with `\}` escapes)
/// - line comments (`#@#`, `#@warn(...)`)
pub struct ReviewParser;

impl ReviewParser {
    /// Creates a new Re:VIEW parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReviewParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for ReviewParser {
    fn name(&self) -> &str {
        "review"
    }

    fn extensions(&self) -> &[&str] {
        &["re"]
    }

    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError> {
        let chunks = chunker::chunk(source)?;
        debug!(chunks = chunks.len(), "chunked document");

        let index = LineIndex::new(source);
        let ctx = BuildContext {
            arena,
            source,
            index: &index,
        };
        let children: Vec<TxtNode<'a>> = chunks
            .iter()
            .filter_map(|chunk| build_chunk(&ctx, chunk))
            .collect();
        debug!(nodes = children.len(), "built document children");

        let span = Span::new(0, source.len() as u32);
        let document = ctx.parent_node(NodeType::Document, span, &children);

        validate(source, &index, &document)?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use revlint_ast::NodeData;

    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let ast = parser.parse(&arena, "").unwrap();

        assert_eq!(ast.node_type, NodeType::Document);
        assert!(ast.children.is_empty());
        assert_eq!(ast.raw, "");
    }

    #[test]
    fn test_parse_heading_and_paragraph() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let ast = parser.parse(&arena, "= Text\n\naaaa").unwrap();

        assert_eq!(ast.children.len(), 2);

        let header = &ast.children[0];
        assert_eq!(header.node_type, NodeType::Header);
        assert!(matches!(header.data, NodeData::Header(1)));
        assert_eq!(header.children[0].value, Some("Text"));

        let para = &ast.children[1];
        assert_eq!(para.node_type, NodeType::Paragraph);
        assert_eq!(para.raw, "aaaa");
    }

    #[test]
    fn test_parse_two_line_paragraph_locations() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let ast = parser.parse(&arena, "test\nparagraph").unwrap();

        assert_eq!(ast.children.len(), 1);
        let para = &ast.children[0];
        assert_eq!(para.children.len(), 2);
        assert_eq!(para.children[0].value, Some("test"));
        assert_eq!(para.children[1].value, Some("paragraph"));
        assert_eq!(para.loc.start.line, 1);
        assert_eq!(para.loc.start.column, 0);
        assert_eq!(para.loc.end.line, 2);
        assert_eq!(para.loc.end.column, 9);
    }

    #[test]
    fn test_parse_inline_strong() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let ast = parser.parse(&arena, "@<b>{BBB}CCC").unwrap();

        let para = &ast.children[0];
        assert_eq!(para.children.len(), 2);

        let strong = &para.children[0];
        assert_eq!(strong.node_type, NodeType::Strong);
        assert_eq!(strong.raw, "@<b>{BBB}");
        assert_eq!(strong.children[0].value, Some("BBB"));
        assert_eq!(strong.children[0].loc.start.column, 5);

        assert_eq!(para.children[1].raw, "CCC");
    }

    #[test]
    fn test_parse_code_block_with_caption() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();
        let source = "//list[foo][Assign 0 to x]{\nlet x = 0;\n//}";

        let ast = parser.parse(&arena, source).unwrap();

        let code = &ast.children[0];
        assert_eq!(code.node_type, NodeType::CodeBlock);
        assert_eq!(code.raw, source);
        assert_eq!(code.children[0].node_type, NodeType::Caption);
        assert_eq!(code.children[0].children[0].value, Some("Assign 0 to x"));
    }

    #[test]
    fn test_parse_footnote_escape() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();
        let source = "//footnote[foo][See: [1\\]]";

        let ast = parser.parse(&arena, source).unwrap();

        let footnote = &ast.children[0];
        assert_eq!(footnote.node_type, NodeType::Footnote);
        let para = &footnote.children[0];
        assert_eq!(para.raw, "See: [1\\]");
        assert_eq!(para.children[0].value, Some("See: [1]"));
    }

    #[test]
    fn test_parse_unterminated_block_fails() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let err = parser.parse(&arena, "//list[][]{\nlet x = 0;").unwrap_err();

        assert!(matches!(err, ParseError::UnterminatedBlock { .. }));
    }

    #[test]
    fn test_document_raw_covers_whole_source() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();
        let source = "= T\n\nbody text\n";

        let ast = parser.parse(&arena, source).unwrap();

        assert_eq!(ast.raw, source);
        assert_eq!(ast.span, Span::new(0, source.len() as u32));
    }

    #[test]
    fn test_extensions() {
        let parser = ReviewParser::new();

        assert!(parser.can_parse("re"));
        assert!(parser.can_parse("RE"));
        assert!(!parser.can_parse("md"));
    }

    #[test]
    fn test_parser_name() {
        let parser = ReviewParser::new();
        assert_eq!(parser.name(), "review");
    }

    #[test]
    fn test_parser_default() {
        let parser = ReviewParser;
        assert_eq!(parser.name(), "review");
    }

    #[test]
    fn test_parse_is_reentrant_across_documents() {
        let parser = ReviewParser::new();

        let arena1 = AstArena::new();
        let arena2 = AstArena::new();
        let ast1 = parser.parse(&arena1, "first").unwrap();
        let ast2 = parser.parse(&arena2, "second").unwrap();

        assert_eq!(ast1.children[0].raw, "first");
        assert_eq!(ast2.children[0].raw, "second");
    }

    #[test]
    fn test_parse_crlf_document() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let ast = parser.parse(&arena, "= Text\r\n\r\naaaa").unwrap();

        assert_eq!(ast.children.len(), 2);
        assert_eq!(ast.children[0].children[0].value, Some("Text"));
        assert_eq!(ast.children[1].raw, "aaaa");
        assert_eq!(ast.children[1].loc.start.line, 3);
    }

    #[test]
    fn test_parse_multibyte_text() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();
        let source = "日本語の@<b>{太字}です";

        let ast = parser.parse(&arena, source).unwrap();

        let para = &ast.children[0];
        assert_eq!(para.children.len(), 3);
        assert_eq!(para.children[1].node_type, NodeType::Strong);
        // Byte-based columns: "日本語の" is 12 bytes.
        assert_eq!(para.children[1].loc.start.column, 12);
    }

    #[test]
    fn test_serialized_shape_contract() {
        let arena = AstArena::new();
        let parser = ReviewParser::new();

        let ast = parser.parse(&arena, "= T\n\naaaa").unwrap();
        let json = serde_json::to_value(ast).unwrap();

        assert_eq!(json["type"], "Document");
        assert_eq!(json["range"][0], 0);
        assert_eq!(json["range"][1], 9);
        assert_eq!(json["loc"]["start"]["line"], 1);
        assert_eq!(json["children"][0]["type"], "Header");
        assert_eq!(json["children"][0]["depth"], 1);
        assert_eq!(json["children"][1]["type"], "Paragraph");
        assert_eq!(json["children"][1]["raw"], "aaaa");
        assert_eq!(json["children"][1]["children"][0]["type"], "Str");
    }
}
