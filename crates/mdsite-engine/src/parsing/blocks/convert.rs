use crate::html::{ElementNode, HtmlNode, TextNode};
use crate::parsing::inline::{ParseError, Span, SpanKind, parse_inline};

use super::classify::BlockKind;

/// Converts one inline span into its HTML node.
pub fn span_to_node(span: Span) -> HtmlNode {
    let url = span.url.unwrap_or_default();
    match span.kind {
        SpanKind::Plain => TextNode::bare(span.text).into(),
        SpanKind::Bold => TextNode::tagged("b", span.text).into(),
        SpanKind::Italic => TextNode::tagged("i", span.text).into(),
        SpanKind::Code => TextNode::tagged("code", span.text).into(),
        SpanKind::Link => {
            TextNode::with_attrs("a", span.text, vec![("href".to_string(), url)]).into()
        }
        SpanKind::Image => TextNode::with_attrs(
            "img",
            "",
            vec![("alt".to_string(), span.text), ("src".to_string(), url)],
        )
        .into(),
    }
}

/// Inline-parses `text` and converts each resulting span to a node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(parse_inline(text)?.into_iter().map(span_to_node).collect())
}

/// Drops the first `n` characters of `s`, or everything when `s` is shorter.
///
/// Prefix strips count characters, not bytes, so a multibyte character right
/// after a block marker stays intact.
fn strip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// Wraps inline-parse output in `tag`, with the single-span shortcut.
///
/// Only a multi-span result gets an element with per-span children; a
/// single-span (or empty) result embeds the raw text directly in a text
/// node, markup characters and all. That shortcut drops inline formatting
/// inside single-run headings, quotes and list items; it is the pinned
/// behavior, not an oversight.
fn wrap_inline(tag: &str, raw: &str, children: Vec<HtmlNode>) -> HtmlNode {
    if children.len() > 1 {
        ElementNode::new(tag, children).into()
    } else {
        TextNode::tagged(tag, raw).into()
    }
}

/// Converts one classified block into one HTML node.
///
/// # Errors
///
/// Propagates [`ParseError`] from inline parsing of the block's text.
pub fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, ParseError> {
    match kind {
        BlockKind::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            Ok(ElementNode::new("p", text_to_children(&text)?).into())
        }
        BlockKind::Heading => {
            let level = block.chars().take_while(|&c| c == '#').count();
            let rest = strip_chars(block, level + 1);
            let children = text_to_children(rest)?;
            Ok(wrap_inline(&format!("h{level}"), rest, children))
        }
        BlockKind::Quote => {
            // Fixed 2-character `> ` prefix strip; later lines keep theirs.
            let rest = strip_chars(block, 2);
            let children = text_to_children(rest)?;
            Ok(wrap_inline("blockquote", rest, children))
        }
        BlockKind::Code => {
            let interior = block.trim_matches('`');
            let children = text_to_children(interior)?;
            let code = wrap_inline("code", interior, children);
            Ok(ElementNode::new("pre", vec![code]).into())
        }
        BlockKind::UnorderedList => {
            let mut items = Vec::new();
            for line in block.lines() {
                let rest = strip_chars(line, 2);
                items.push(wrap_inline("li", rest, text_to_children(rest)?));
            }
            Ok(ElementNode::new("ul", items).into())
        }
        BlockKind::OrderedList => {
            let mut items = Vec::new();
            for line in block.lines() {
                // 3 characters: single-digit ordinal plus ". "
                let rest = strip_chars(line, 3);
                items.push(wrap_inline("li", rest, text_to_children(rest)?));
            }
            Ok(ElementNode::new("ol", items).into())
        }
    }
}
