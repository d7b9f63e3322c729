//! # HTML Node Model
//!
//! An immutable render tree with two node variants:
//!
//! - **Text node**: a leaf holding literal text, optionally wrapped in a tag.
//! - **Element node**: a tag wrapping an ordered, non-empty list of children.
//!
//! Nodes validate their structural invariants at render time, not at
//! construction time, so a malformed tree is representable but not
//! renderable. Output is inserted verbatim; no HTML escaping is performed.

pub mod node;

pub use node::{Attrs, ElementNode, HtmlNode, RenderError, TextNode, render_attrs};
