//! Parser trait definition.

use revlint_ast::{AstArena, TxtNode};

use crate::ParseError;

/// Trait for parsing source text into TxtAST.
///
/// This is the seam the linter host plugs into: a parser announces the
/// file extensions it handles and converts source text into an abstract
/// syntax tree that lint rules can analyze.
///
/// # Example
///
/// ```rust,ignore
/// use revlint_parser::Parser;
/// use revlint_ast::AstArena;
///
/// struct MyParser;
///
/// impl Parser for MyParser {
///     fn name(&self) -> &str {
///         "my-parser"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["myext"]
///     }
///
///     fn parse<'a>(
///         &self,
///         arena: &'a AstArena,
///         source: &str,
///     ) -> Result<TxtNode<'a>, ParseError> {
///         // Parse implementation
///         todo!()
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["re"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a TxtAST.
    ///
    /// # Arguments
    ///
    /// * `arena` - The arena allocator for AST nodes
    /// * `source` - The source text to parse
    ///
    /// # Returns
    ///
    /// The root `TxtNode` of the parsed AST, or an error if parsing fails.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
