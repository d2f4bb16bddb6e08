//! Parse error types.

use revlint_ast::{NodeType, Position};
use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A multi-line block was opened but never closed with `//}`.
    #[error("unterminated block //{name} opened at line {line}")]
    UnterminatedBlock {
        /// Block name from the open marker.
        name: String,
        /// 1-based line number of the open marker.
        line: u32,
    },

    /// A node's recorded raw text or location does not match its
    /// source range.
    #[error("inconsistent {node_type} node at line {line}, column {column}")]
    InconsistentNode {
        /// Type of the offending node.
        node_type: NodeType,
        /// 1-based start line of the node.
        line: u32,
        /// 0-based start column of the node.
        column: u32,
    },

    /// An internal parser error occurred.
    #[error("internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new unterminated block error.
    pub fn unterminated_block(name: impl Into<String>, line: u32) -> Self {
        Self::UnterminatedBlock {
            name: name.into(),
            line,
        }
    }

    /// Creates a new inconsistent node error.
    pub fn inconsistent(node_type: NodeType, at: Position) -> Self {
        Self::InconsistentNode {
            node_type,
            line: at.line,
            column: at.column,
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
