/// Inline parsing failed on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A delimiter split produced an even fragment count, meaning an
    /// unterminated `**`, `*` or `` ` `` span.
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
}

/// The classification of one inline text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One classified run of inline text.
///
/// `url` is `Some` iff `kind` is [`SpanKind::Link`] or [`SpanKind::Image`].
/// Spans are immutable value objects with structural equality; they are
/// created during inline parsing and consumed immediately to build HTML
/// nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    /// A span of the given kind with no URL.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }
}
