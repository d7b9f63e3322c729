use super::types::{ParseError, Span, SpanKind};

/// Splits every still-plain span on `delimiter`, typing the odd-indexed
/// fragments as `kind`.
///
/// Fragments between delimiter pairs (1st, 3rd, ...) become spans of the
/// target kind; the even-indexed fragments around them stay plain. Spans that
/// already carry a non-plain kind pass through untouched, so a later pass
/// never re-splits an earlier pass's output.
///
/// Splitting one string on a balanced delimiter always yields an odd fragment
/// count; an even count means an unterminated span and fails with
/// [`ParseError::UnbalancedDelimiter`]. Zero-length fragments are dropped.
pub fn split_spans_on_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }

        let fragments: Vec<&str> = span.text.split(delimiter).collect();
        if fragments.len() % 2 == 0 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, fragment) in fragments.iter().enumerate() {
            if fragment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::plain(*fragment));
            } else {
                out.push(Span::new(*fragment, kind));
            }
        }
    }
    Ok(out)
}
