//! # Inline Span Parsing
//!
//! Converts one flat text string into an ordered sequence of typed [`Span`]s.
//!
//! ## Pipeline
//!
//! Five passes run in a fixed order over the span sequence:
//!
//! 1. `**` → bold (delimiter split)
//! 2. `*` → italic (delimiter split)
//! 3. `` ` `` → code (delimiter split)
//! 4. `![alt](url)` → image (pattern extraction)
//! 5. `[text](url)` → link (pattern extraction)
//!
//! Pass order is load-bearing: `*` is a substring of `**`, so bold must be
//! resolved before italic, and image syntax must be consumed before the link
//! pass so `![..](..)` is never mis-captured as a link. Each pass only
//! touches spans still tagged [`SpanKind::Plain`]; there is no re-splitting
//! of already-typed spans and therefore no nested emphasis.
//!
//! ## Modules
//!
//! - **`types`**: [`Span`], [`SpanKind`], [`ParseError`]
//! - **`splitter`**: the shared delimiter-splitting pass
//! - **`patterns`**: regex-based image and link extraction
//! - **`parser`**: [`parse_inline`] pipeline entry point

pub mod parser;
pub mod patterns;
pub mod splitter;
pub mod types;

pub use parser::parse_inline;
pub use types::{ParseError, Span, SpanKind};
