//! Inline text spans.
//!
//! A [`TextSpan`] is one inline fragment of markdown text together with its
//! formatting kind. Spans are produced by [`text_to_spans`](crate::text_to_spans)
//! and mapped to leaf [`HtmlNode`]s via `From`.

use crate::node::HtmlNode;

/// Formatting kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text with no markup.
    Text,
    /// Bold text (`**text**`).
    Bold,
    /// Italic text (`*text*`).
    Italic,
    /// Inline code (`` `text` ``).
    Code,
    /// Hyperlink (`[label](url)`).
    Link,
    /// Image (`![alt](url)`).
    Image,
}

/// An inline fragment of markdown text.
///
/// `url` is set only for [`SpanKind::Link`] and [`SpanKind::Image`].
/// Spans are immutable value objects; equality is structural over all
/// three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// The literal text (or label/alt text for links and images).
    pub text: String,
    /// Formatting kind.
    pub kind: SpanKind,
    /// Target URL for links and images.
    pub url: Option<String>,
}

impl TextSpan {
    /// Create a span without a URL.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Create a link or image span carrying a target URL.
    #[must_use]
    pub fn with_url(text: impl Into<String>, kind: SpanKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }
}

impl From<TextSpan> for HtmlNode {
    /// Map an inline span to a leaf node.
    ///
    /// Plain text becomes a tagless leaf (rendered verbatim). Links carry
    /// an `href` attribute; images render with an empty value and `src` /
    /// `alt` attributes.
    fn from(span: TextSpan) -> Self {
        match span.kind {
            SpanKind::Text => HtmlNode::text(span.text),
            SpanKind::Bold => HtmlNode::leaf("b", span.text),
            SpanKind::Italic => HtmlNode::leaf("i", span.text),
            SpanKind::Code => HtmlNode::leaf("code", span.text),
            SpanKind::Link => {
                HtmlNode::leaf("a", span.text).with_attr("href", span.url.unwrap_or_default())
            }
            SpanKind::Image => HtmlNode::leaf("img", "")
                .with_attr("src", span.url.unwrap_or_default())
                .with_attr("alt", span.text),
        }
    }
}
