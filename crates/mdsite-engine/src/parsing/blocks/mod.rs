//! # Block Parsing
//!
//! Splits a document on blank lines into trimmed block strings, classifies
//! each block's structural type, and converts each block into one HTML node,
//! delegating the block's text to the inline span parser.
//!
//! Classification is whole-block and all-or-nothing: a single non-conforming
//! line anywhere in a would-be quote or list block demotes the entire block
//! to a paragraph. There is no partial-list recovery and no nesting.

pub mod classify;
pub mod convert;

pub use classify::{BlockKind, classify_block, split_into_blocks};
pub use convert::block_to_node;
