//! TxtNode definition.
//!
//! The core AST node type produced by the parser and consumed by lint
//! rules.

use serde::Serialize;

use crate::{Location, NodeType, Span};

/// A node in the TxtAST.
///
/// Every node carries its byte `span`, its line/column `loc`, and the
/// exact `raw` source slice it covers; the parser guarantees
/// `raw == source[span.start..span.end]` for the whole tree.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use revlint_ast::{AstArena, TxtNode, NodeType, Span, Location, Position};
///
/// let arena = AstArena::new();
/// let loc = Location::new(Position::new(1, 0), Position::new(1, 5));
///
/// // Create a text node
/// let text_node = arena.alloc(TxtNode::new_text(
///     NodeType::Str,
///     Span::new(0, 5),
///     loc,
///     "Hello",
///     "Hello",
/// ));
///
/// // Create a paragraph containing the text
/// let children = arena.alloc_slice_copy(&[*text_node]);
/// let paragraph = TxtNode::new_parent(
///     NodeType::Paragraph,
///     Span::new(0, 5),
///     loc,
///     "Hello",
///     children,
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TxtNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Byte span in the source text.
    pub span: Span,

    /// Line/column location, redundant with `span`.
    pub loc: Location,

    /// Exact source slice covered by `span`.
    pub raw: &'a str,

    /// Child nodes (for parent nodes).
    pub children: &'a [TxtNode<'a>],

    /// Text value with escape sequences resolved (for text nodes like
    /// Str, Code, CodeBlock).
    pub value: Option<&'a str>,

    /// Additional node-specific data.
    pub data: NodeData<'a>,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum NodeData<'a> {
    #[default]
    None,
    /// Heading depth (number of leading `=`).
    Header(u8),
    /// Whether the list is ordered.
    List(bool),
    /// Link target URL.
    Link(&'a str),
    /// Ruby reading text.
    Ruby(&'a str),
}

impl<'a> Serialize for TxtNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 4; // type, raw, range, loc
        if self.node_type.is_parent() || !self.children.is_empty() {
            len += 1;
        }
        if self.value.is_some() {
            len += 1;
        }
        len += self.data.present_field_count();

        let mut state = serializer.serialize_struct("TxtNode", len)?;

        state.serialize_field("type", &self.node_type)?;
        state.serialize_field("raw", self.raw)?;
        state.serialize_field("range", &[self.span.start, self.span.end])?;
        state.serialize_field("loc", &self.loc)?;

        if self.node_type.is_parent() || !self.children.is_empty() {
            state.serialize_field("children", &self.children)?;
        }

        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }

        self.data.serialize_fields(&mut state)?;

        state.end()
    }
}

impl<'a> TxtNode<'a> {
    /// Creates a new parent node with children.
    #[inline]
    pub const fn new_parent(
        node_type: NodeType,
        span: Span,
        loc: Location,
        raw: &'a str,
        children: &'a [TxtNode<'a>],
    ) -> Self {
        Self {
            node_type,
            span,
            loc,
            raw,
            children,
            value: None,
            data: NodeData::new(),
        }
    }

    /// Creates a new text node with a value.
    #[inline]
    pub const fn new_text(
        node_type: NodeType,
        span: Span,
        loc: Location,
        raw: &'a str,
        value: &'a str,
    ) -> Self {
        Self {
            node_type,
            span,
            loc,
            raw,
            children: &[],
            value: Some(value),
            data: NodeData::new(),
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, span: Span, loc: Location, raw: &'a str) -> Self {
        Self {
            node_type,
            span,
            loc,
            raw,
            children: &[],
            value: None,
            data: NodeData::new(),
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if this node is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the escape-resolved text content of this node.
    ///
    /// For text nodes, returns the value.
    /// For parent nodes, this returns None (use a visitor to collect text).
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.value
    }
}

impl<'a> NodeData<'a> {
    /// Returns the number of present fields for serialization.
    fn present_field_count(&self) -> usize {
        match self {
            NodeData::None => 0,
            NodeData::Header(_) => 1,
            NodeData::List(_) => 1,
            NodeData::Link(_) => 1,
            NodeData::Ruby(_) => 1,
        }
    }

    /// Serializes present fields into the given struct serializer state.
    fn serialize_fields<S: serde::ser::SerializeStruct>(
        &self,
        state: &mut S,
    ) -> Result<(), S::Error> {
        match self {
            NodeData::None => {}
            NodeData::Header(depth) => {
                state.serialize_field("depth", depth)?;
            }
            NodeData::List(ordered) => {
                state.serialize_field("ordered", ordered)?;
            }
            NodeData::Link(url) => {
                state.serialize_field("url", url)?;
            }
            NodeData::Ruby(reading) => {
                state.serialize_field("rubyText", reading)?;
            }
        }
        Ok(())
    }

    /// Creates new empty node data.
    #[inline]
    pub const fn new() -> Self {
        Self::None
    }

    /// Creates node data for a header.
    #[inline]
    pub const fn header(depth: u8) -> Self {
        Self::Header(depth)
    }

    /// Creates node data for a list.
    #[inline]
    pub const fn list(ordered: bool) -> Self {
        Self::List(ordered)
    }

    /// Creates node data for a link.
    #[inline]
    pub const fn link(url: &'a str) -> Self {
        Self::Link(url)
    }

    /// Creates node data for a ruby annotation.
    #[inline]
    pub const fn ruby(reading: &'a str) -> Self {
        Self::Ruby(reading)
    }
}
