use super::patterns::{split_spans_on_images, split_spans_on_links};
use super::splitter::split_spans_on_delimiter;
use super::types::{ParseError, Span, SpanKind};

/// The three delimiter passes, in order. Bold must run before italic because
/// `*` is a substring of `**`; splitting italic first would fragment bold
/// markers.
const DELIMITER_PASSES: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Parses inline content into an ordered sequence of [`Span`]s.
///
/// Runs the delimiter passes (bold, italic, code) and then the pattern
/// passes (images, then links) over a sequence seeded with one plain span of
/// the whole input. Empty input yields an empty sequence.
///
/// # Errors
///
/// [`ParseError::UnbalancedDelimiter`] when the text contains an
/// unterminated `**`, `*` or `` ` `` span.
pub fn parse_inline(text: &str) -> Result<Vec<Span>, ParseError> {
    let mut spans = vec![Span::plain(text)];
    for (delimiter, kind) in DELIMITER_PASSES {
        spans = split_spans_on_delimiter(spans, delimiter, kind)?;
    }
    let spans = split_spans_on_images(spans);
    Ok(split_spans_on_links(spans))
}
