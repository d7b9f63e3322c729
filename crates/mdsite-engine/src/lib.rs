pub mod document;
pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use document::{DocumentError, extract_title, markdown_to_document};
pub use html::{ElementNode, HtmlNode, RenderError, TextNode};
pub use parsing::inline::{ParseError, Span, SpanKind, parse_inline};
