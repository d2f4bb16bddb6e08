//! Node type definitions for TxtAST.
//!
//! The fixed node vocabulary shared with the consuming linter. Block
//! types mirror the structural constructs of the Re:VIEW markup
//! surface; inline types cover the `@<name>{...}` tag family.

use serde::{Deserialize, Serialize};

/// Node types for TxtAST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub enum NodeType {
    // Document structure
    /// Root document node.
    Document,

    // Block elements
    /// Paragraph containing inline content.
    Paragraph,
    /// Heading (`=`, `==`, ...).
    Header,
    /// Quote, lead, or short-column block body.
    BlockQuote,
    /// Ordered, unordered, or definition list.
    List,
    /// Item in a list, or one cell of a table row.
    ListItem,
    /// Table block.
    Table,
    /// Code listing block (list/emlist/source/cmd families).
    CodeBlock,
    /// Image block.
    Image,
    /// Footnote block.
    Footnote,
    /// Caption attached to a table, image, or code block.
    Caption,

    // Inline elements
    /// Plain text string.
    Str,
    /// Line break (`@<br>{}`).
    Break,
    /// Emphasized text.
    Emphasis,
    /// Strongly emphasized text.
    Strong,
    /// Inline code span.
    Code,
    /// Hyperlink (`@<href>{url, label}`).
    Link,
    /// Ruby-annotated text (`@<ruby>{base, reading}`).
    Ruby,
    /// Cross-reference tag with no rendered body (`@<chap>{...}` etc.).
    Reference,
    /// Line comment (`#@#`, `#@warn(...)`).
    Comment,
    /// Non-textual inline marker (`@<uchar>{...}`, `@<icon>{...}`, ...).
    NonString,
}

impl NodeType {
    /// Returns true if this node type is a block element.
    #[inline]
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            NodeType::Document
                | NodeType::Paragraph
                | NodeType::Header
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::Table
                | NodeType::CodeBlock
                | NodeType::Image
                | NodeType::Footnote
                | NodeType::Caption
        )
    }

    /// Returns true if this node type is an inline element.
    #[inline]
    pub const fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeType::Str
                | NodeType::Break
                | NodeType::Emphasis
                | NodeType::Strong
                | NodeType::Code
                | NodeType::Link
                | NodeType::Ruby
                | NodeType::Reference
                | NodeType::Comment
                | NodeType::NonString
        )
    }

    /// Returns true if this node type can contain children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(
            self,
            NodeType::Document
                | NodeType::Paragraph
                | NodeType::Header
                | NodeType::BlockQuote
                | NodeType::List
                | NodeType::ListItem
                | NodeType::Table
                | NodeType::Footnote
                | NodeType::Caption
                | NodeType::Emphasis
                | NodeType::Strong
                | NodeType::Link
                | NodeType::Ruby
                | NodeType::Reference
        )
    }

    /// Returns true if this node type is a text node (has value).
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, NodeType::Str | NodeType::Code | NodeType::CodeBlock)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use the same casing as serde serialization
        let name = match self {
            NodeType::Document => "Document",
            NodeType::Paragraph => "Paragraph",
            NodeType::Header => "Header",
            NodeType::BlockQuote => "BlockQuote",
            NodeType::List => "List",
            NodeType::ListItem => "ListItem",
            NodeType::Table => "Table",
            NodeType::CodeBlock => "CodeBlock",
            NodeType::Image => "Image",
            NodeType::Footnote => "Footnote",
            NodeType::Caption => "Caption",
            NodeType::Str => "Str",
            NodeType::Break => "Break",
            NodeType::Emphasis => "Emphasis",
            NodeType::Strong => "Strong",
            NodeType::Code => "Code",
            NodeType::Link => "Link",
            NodeType::Ruby => "Ruby",
            NodeType::Reference => "Reference",
            NodeType::Comment => "Comment",
            NodeType::NonString => "NonString",
        };
        write!(f, "{}", name)
    }
}
