//! Document driver: whole-document conversion and title extraction.

use crate::html::{ElementNode, HtmlNode};
use crate::parsing::blocks::{BlockKind, block_to_node, classify_block, split_into_blocks};
use crate::parsing::inline::ParseError;

/// A failure while driving a whole document through the parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Malformed(#[from] ParseError),
    /// No level-1 heading block exists anywhere in the document.
    #[error("no level-1 heading found in document")]
    NoTitle,
}

/// Converts a whole Markdown document into a single render tree.
///
/// The root is a `div` element whose children are the per-block nodes in
/// document order. An all-blank document still produces the root node;
/// rendering it fails with the empty-children validation error, so callers
/// that need empty-document output must special-case it themselves.
///
/// # Errors
///
/// [`DocumentError::Malformed`] when any block's inline content has an
/// unterminated delimiter.
pub fn markdown_to_document(markdown: &str) -> Result<HtmlNode, DocumentError> {
    let mut children = Vec::new();
    for block in split_into_blocks(markdown) {
        let kind = classify_block(&block);
        children.push(block_to_node(&block, kind)?);
    }
    Ok(ElementNode::new("div", children).into())
}

/// Extracts the document title: the text of the first level-1 heading.
///
/// Only `# ` headings qualify; deeper levels are skipped. The returned title
/// is the raw block text with all `#` characters and surrounding whitespace
/// stripped.
///
/// # Errors
///
/// [`DocumentError::NoTitle`] when the document has no level-1 heading.
pub fn extract_title(markdown: &str) -> Result<String, DocumentError> {
    for block in split_into_blocks(markdown) {
        if classify_block(&block) == BlockKind::Heading && block.starts_with("# ") {
            return Ok(block.trim_matches('#').trim().to_string());
        }
    }
    Err(DocumentError::NoTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_heading_and_paragraph() {
        let doc = markdown_to_document("# Heading\n\nSome **bold** and *italic* text").unwrap();
        assert_eq!(
            doc.render().unwrap(),
            "<div><h1>Heading</h1><p>Some <b>bold</b> and <i>italic</i> text</p></div>"
        );
    }

    #[test]
    fn empty_document_fails_at_render_time() {
        let doc = markdown_to_document("\n\n  \n\n").unwrap();
        assert!(doc.render().is_err());
    }

    #[test]
    fn malformed_inline_fails_conversion() {
        let result = markdown_to_document("a paragraph with **no closer");
        assert!(matches!(result, Err(DocumentError::Malformed(_))));
    }

    #[test]
    fn extracts_first_level_one_title() {
        let title = extract_title("## Sub\n\n# Main Title\n").unwrap();
        assert_eq!(title, "Main Title");
    }

    #[test]
    fn skips_deeper_headings_entirely() {
        assert_eq!(
            extract_title("## Only Sub\n"),
            Err(DocumentError::NoTitle)
        );
    }

    #[test]
    fn title_may_appear_after_other_blocks() {
        let markdown = "intro paragraph\n\n> a quote\n\n# The Title";
        assert_eq!(extract_title(markdown).unwrap(), "The Title");
    }
}
