//! # Markdown Parsing
//!
//! Two-stage parsing, composed by [`crate::document`]:
//!
//! 1. **`blocks`**: split a document on blank lines, classify each block's
//!    structural type, convert each block to one HTML node.
//! 2. **`inline`**: tokenize a block's text into typed spans
//!    (plain/bold/italic/code/link/image) by repeated delimiter and pattern
//!    splitting.
//!
//! Both stages are pure functions over owned strings; no I/O and no shared
//! state.

pub mod blocks;
pub mod inline;

pub use blocks::{BlockKind, block_to_node, classify_block, split_into_blocks};
pub use inline::{ParseError, Span, SpanKind, parse_inline};
