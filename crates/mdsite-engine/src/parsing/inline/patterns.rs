use std::sync::OnceLock;

use regex::Regex;

use super::types::{Span, SpanKind};

/// `![alt](url)`: alt is anything but `]`, url anything but `)`.
fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX
        .get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("Invalid image regex"))
}

/// `[text](url)`, the same shape without the leading `!`. Safe only after
/// the image pass has consumed all `![..](..)` occurrences.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid link regex"))
}

/// Extracts `![alt](url)` occurrences from still-plain spans into
/// [`SpanKind::Image`] spans.
pub fn split_spans_on_images(spans: Vec<Span>) -> Vec<Span> {
    split_spans_on_pattern(spans, image_regex(), SpanKind::Image)
}

/// Extracts `[text](url)` occurrences from still-plain spans into
/// [`SpanKind::Link`] spans. Must run after [`split_spans_on_images`].
pub fn split_spans_on_links(spans: Vec<Span>) -> Vec<Span> {
    split_spans_on_pattern(spans, link_regex(), SpanKind::Link)
}

/// Scans each plain span left to right for non-overlapping matches, emitting
/// plain spans for the text between matches (when non-empty) and one typed
/// span per match. Spans with no matches pass through unchanged.
fn split_spans_on_pattern(spans: Vec<Span>, pattern: &Regex, kind: SpanKind) -> Vec<Span> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }

        let mut rest_start = 0;
        for caps in pattern.captures_iter(&span.text) {
            let (Some(whole), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if whole.start() > rest_start {
                out.push(Span::plain(&span.text[rest_start..whole.start()]));
            }
            out.push(Span {
                text: text.as_str().to_string(),
                kind,
                url: Some(url.as_str().to_string()),
            });
            rest_start = whole.end();
        }

        if rest_start < span.text.len() {
            out.push(Span::plain(&span.text[rest_start..]));
        }
    }
    out
}
