//! End-to-end tests for the Re:VIEW parser.
//!
//! Exercises whole documents through `parse` and checks the invariants
//! the consuming linter relies on: exact raw/range/loc agreement for
//! every node, comment transparency, and the documented behavior for
//! each markup construct.

use pretty_assertions::assert_eq;
use revlint_ast::{AstArena, NodeData, NodeType, TxtNode};
use revlint_parser::{parse, ParseError, Parser, ReviewParser};
use rstest::rstest;

/// Asserts `raw == source[range]` for every node of the tree.
fn assert_positions(node: &TxtNode<'_>, source: &str) {
    let start = node.span.start as usize;
    let end = node.span.end as usize;
    assert_eq!(
        source.get(start..end),
        Some(node.raw),
        "{} node at {:?} does not match its range",
        node.node_type,
        node.loc.start,
    );
    for child in node.children {
        assert_positions(child, source);
    }
}

/// Collects the node types of a tree in depth-first order.
fn shape(node: &TxtNode<'_>) -> Vec<NodeType> {
    let mut out = vec![node.node_type];
    for child in node.children {
        out.extend(shape(child));
    }
    out
}

#[test]
fn heading_then_paragraph() {
    let arena = AstArena::new();
    let ast = parse(&arena, "= Text\n\naaaa").unwrap();

    assert_eq!(ast.node_type, NodeType::Document);
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
fn multi_line_paragraph_has_per_line_str_children() {
    let arena = AstArena::new();
    let ast = parse(&arena, "test\nparagraph").unwrap();

    let para = &ast.children[0];
    assert_eq!(shape(para), vec![NodeType::Paragraph, NodeType::Str, NodeType::Str]);
    assert_eq!(para.loc.start.line, 1);
    assert_eq!(para.loc.start.column, 0);
    assert_eq!(para.loc.end.line, 2);
    assert_eq!(para.loc.end.column, 9);
}

#[test]
fn inline_strong_with_trailing_text() {
    let arena = AstArena::new();
    let ast = parse(&arena, "@<b>{BBB}CCC").unwrap();

    let para = &ast.children[0];
    let strong = &para.children[0];
    assert_eq!(strong.node_type, NodeType::Strong);
    assert_eq!(strong.raw, "@<b>{BBB}");
    assert_eq!(strong.children[0].value, Some("BBB"));
    assert_eq!(strong.children[0].loc.start.column, 5);

    let trailing = &para.children[1];
    assert_eq!(trailing.node_type, NodeType::Str);
    assert_eq!(trailing.raw, "CCC");
}

#[test]
fn code_block_with_caption_spans_markers() {
    let arena = AstArena::new();
    let source = "//list[foo][Assign 0 to x]{\nlet x = 0;\n//}";
    let ast = parse(&arena, source).unwrap();

    let code = &ast.children[0];
    assert_eq!(code.node_type, NodeType::CodeBlock);
    assert_eq!(code.raw, source);
    assert_eq!(code.value, Some("let x = 0;"));

    let caption = &code.children[0];
    assert_eq!(caption.node_type, NodeType::Caption);
    assert_eq!(caption.children[0].value, Some("Assign 0 to x"));
}

#[test]
fn footnote_resolves_escaped_bracket() {
    let arena = AstArena::new();
    let source = "//footnote[foo][See: [1\\]]";
    let ast = parse(&arena, source).unwrap();

    let footnote = &ast.children[0];
    assert_eq!(footnote.node_type, NodeType::Footnote);

    let para = &footnote.children[0];
    assert_eq!(para.raw, "See: [1\\]");
    assert_eq!(para.children[0].value, Some("See: [1]"));
}

#[test]
fn unterminated_block_raises() {
    let arena = AstArena::new();
    let err = parse(&arena, "//list[][]{").unwrap_err();

    match err {
        ParseError::UnterminatedBlock { name, line } => {
            assert_eq!(name, "list");
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
#[case("= Text\n\naaaa")]
#[case("test\nparagraph")]
#[case("@<b>{BBB}CCC")]
#[case("//list[foo][Assign 0 to x]{\nlet x = 0;\n//}")]
#[case("//footnote[foo][See: [1\\]]")]
#[case(" * one\n * two\n\n 1. three")]
#[case(" : term\n    definition")]
#[case("//table[id][Cap]{\nA\tB\n------\nC\tD\n//}")]
#[case("//quote{\nfirst\n\nsecond\n//}")]
#[case("//image[id][cap]{\nbody\n//}")]
#[case("aaa\n#@# comment\nbbb")]
#[case("before @<href>{https://a.io, site} after")]
#[case("@<ruby>{基底, きてい}と@<code>{f(\\})}")]
#[case("= H\r\n\r\ncrlf paragraph\r\n")]
fn every_node_matches_its_source_range(#[case] source: &str) {
    let arena = AstArena::new();
    let ast = parse(&arena, source).unwrap();
    assert_positions(&ast, source);
}

#[test]
fn standalone_comments_are_transparent() {
    let arena = AstArena::new();
    let source = "aaa\n\n#@# standalone\n#@warn(also gone)\n\nbbb";
    let ast = parse(&arena, source).unwrap();

    assert_eq!(ast.children.len(), 2);
    for child in ast.children {
        assert!(!child.raw.contains("#@"));
    }
}

#[test]
fn comment_inside_paragraph_is_kept_without_breaking_it() {
    let arena = AstArena::new();
    let ast = parse(&arena, "aaa\n#@# kept\nbbb").unwrap();

    assert_eq!(ast.children.len(), 1);
    let para = &ast.children[0];
    assert_eq!(
        shape(para),
        vec![
            NodeType::Paragraph,
            NodeType::Str,
            NodeType::Comment,
            NodeType::Str
        ]
    );
}

#[test]
fn comment_inside_block_is_kept_without_closing_it() {
    let arena = AstArena::new();
    let source = "//note{\naaa\n#@# inner\nbbb\n//}";
    let ast = parse(&arena, source).unwrap();

    assert_eq!(ast.children.len(), 1);
    let quote = &ast.children[0];
    assert_eq!(quote.node_type, NodeType::BlockQuote);
    assert_eq!(quote.children.len(), 1);
    assert!(quote.raw.contains("#@# inner"));
}

#[test]
fn reparsing_a_paragraph_raw_yields_the_same_shape() {
    let arena = AstArena::new();
    let ast = parse(&arena, "xx@<b>{y}zz").unwrap();
    let para = &ast.children[0];

    let arena2 = AstArena::new();
    let reparsed = parse(&arena2, para.raw).unwrap();

    assert_eq!(shape(&reparsed.children[0]), shape(para));
}

#[test]
fn reparsing_a_code_block_raw_yields_the_same_shape() {
    let arena = AstArena::new();
    let source = "before\n\n//emlist[cap]{\nbody\n//}\n\nafter";
    let ast = parse(&arena, source).unwrap();
    let code = &ast.children[1];
    assert_eq!(code.node_type, NodeType::CodeBlock);

    let arena2 = AstArena::new();
    let reparsed = parse(&arena2, code.raw).unwrap();

    assert_eq!(shape(&reparsed.children[0]), shape(code));
    assert_eq!(reparsed.children[0].value, code.value);
}

#[test]
fn definition_list_continuations_stay_sibling_items() {
    let arena = AstArena::new();
    let ast = parse(&arena, " : term\n    first\n    second").unwrap();

    let list = &ast.children[0];
    assert_eq!(list.node_type, NodeType::List);
    assert_eq!(list.children.len(), 3);
    for item in list.children {
        assert_eq!(item.node_type, NodeType::ListItem);
    }
}

#[test]
fn reference_tags_are_retained_childless() {
    let arena = AstArena::new();
    let ast = parse(&arena, "see @<chap>{intro} and @<fn>{note1}").unwrap();

    let para = &ast.children[0];
    let refs: Vec<_> = para
        .children
        .iter()
        .filter(|c| c.node_type == NodeType::Reference)
        .collect();
    assert_eq!(refs.len(), 2);
    for r in &refs {
        assert!(r.children.is_empty());
    }
    // The spans stay addressable.
    assert_eq!(refs[0].raw, "@<chap>{intro}");
}

#[test]
fn mixed_document_end_to_end() {
    let arena = AstArena::new();
    let source = "\
= Getting Started

This chapter covers @<b>{setup} and @<href>{https://a.io, the site}.

== Install

 * download
 * @<code>{cargo install}

//list[install][Install command]{
$ cargo install revlint
//}

#@# internal note

//footnote[site][See also: [docs\\]]
";
    let ast = parse(&arena, source).unwrap();
    assert_positions(&ast, source);

    let types: Vec<NodeType> = ast.children.iter().map(|c| c.node_type).collect();
    assert_eq!(
        types,
        vec![
            NodeType::Header,
            NodeType::Paragraph,
            NodeType::Header,
            NodeType::List,
            NodeType::CodeBlock,
            NodeType::Footnote
        ]
    );
}

#[test]
fn serialized_tree_satisfies_the_host_contract() {
    let arena = AstArena::new();
    let ast = parse(&arena, "= T\n\n@<b>{x}").unwrap();
    let json = serde_json::to_value(ast).unwrap();

    // Every node: type, raw, range, loc.
    fn check(value: &serde_json::Value) {
        let obj = value.as_object().unwrap();
        assert!(obj["type"].is_string());
        assert!(obj["raw"].is_string());
        assert_eq!(obj["range"].as_array().unwrap().len(), 2);
        assert!(obj["loc"]["start"]["line"].is_u64());
        assert!(obj["loc"]["end"]["column"].is_u64());
        if let Some(children) = obj.get("children") {
            for child in children.as_array().unwrap() {
                check(child);
            }
        }
    }
    check(&json);

    assert_eq!(json["type"], "Document");
    assert_eq!(json["children"][1]["children"][0]["type"], "Strong");
}

#[test]
fn parser_announces_review_extension() {
    let parser = ReviewParser::new();
    assert_eq!(parser.name(), "review");
    assert_eq!(parser.extensions(), &["re"]);
    assert!(parser.can_parse("re"));
    assert!(parser.can_parse("RE"));
    assert!(!parser.can_parse("txt"));
}

#[test]
fn unknown_markup_is_inert_not_fatal() {
    let arena = AstArena::new();
    let source = "//mystery[x]{\nbody\n//}\n\nkeep @<wat>{this} text";
    let ast = parse(&arena, source).unwrap();

    // The unknown block is dropped; the paragraph survives with the
    // unknown tag deleted but its surrounding text intact.
    assert_eq!(ast.children.len(), 1);
    let para = &ast.children[0];
    assert_eq!(para.children.len(), 2);
    assert_eq!(para.children[0].raw, "keep ");
    assert_eq!(para.children[1].raw, " text");
}
