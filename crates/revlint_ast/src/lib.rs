//! # revlint_ast
//!
//! TxtAST definitions for revlint.
//!
//! This crate provides the Abstract Syntax Tree (AST) types shared
//! between the Re:VIEW parser and the consuming linter. Every node
//! carries its byte range, its line/column location, and the exact raw
//! source slice it covers.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All AST nodes for a document are allocated in a single arena
//! - Reference locality is maximized for cache efficiency
//! - Memory is freed all at once when parsing is complete
//!
//! ## Example
//!
//! ```rust
//! use revlint_ast::{AstArena, TxtNode, NodeType, Span, Location, Position};
//!
//! let arena = AstArena::new();
//! let loc = Location::new(Position::new(1, 0), Position::new(1, 0));
//!
//! // Nodes are allocated in the arena using constructor methods
//! let node = arena.alloc(TxtNode::new_parent(
//!     NodeType::Document,
//!     Span::new(0, 0),
//!     loc,
//!     "",
//!     &[],
//! ));
//! ```

mod arena;
mod node;
mod node_type;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use node::{NodeData, TxtNode};
pub use node_type::NodeType;
pub use span::{Location, Position, Span};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
