//! Inline markdown tokenization.
//!
//! [`text_to_spans`] turns raw inline text into an ordered sequence of
//! typed [`TextSpan`]s through a fixed pipeline of passes. Each pass only
//! re-splits `Text` spans produced by the pass before it; spans of any
//! other kind flow through untouched.
//!
//! Pass order is a behavioral contract: `**` must split before `*` (a
//! bold marker contains the italic marker), and images must be extracted
//! before links (the link pattern matches the tail of the image pattern).

use std::sync::LazyLock;

use regex::Regex;

use crate::span::{SpanKind, TextSpan};

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Error returned when inline tokenization fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A formatting delimiter was opened but never closed.
    #[error("no closing {delimiter} found")]
    UnterminatedDelimiter {
        /// The unbalanced delimiter string.
        delimiter: String,
    },
}

/// Tokenize raw inline text into typed spans.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedDelimiter`] if any of the `**`, `*`,
/// or `` ` `` delimiters is unbalanced.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let spans = vec![TextSpan::new(text, SpanKind::Text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split `Text` spans on a literal delimiter.
///
/// Parts alternate outside/inside the delimiter, starting outside. Even
/// parts stay `Text`, odd parts become `kind`; empty parts are dropped.
/// An even total part count means an unbalanced delimiter.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedDelimiter`] when the delimiter count
/// in any span is odd.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Text {
            result.push(span);
            continue;
        }
        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnterminatedDelimiter {
                delimiter: delimiter.to_owned(),
            });
        }
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextSpan::new(part, SpanKind::Text));
            } else {
                result.push(TextSpan::new(part, kind));
            }
        }
    }
    Ok(result)
}

/// Extract `![alt](url)` images from `Text` spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &IMAGE_PATTERN, SpanKind::Image)
}

/// Extract `[label](url)` links from `Text` spans.
///
/// Must run after [`split_images`]: a leading `!` is not part of the link
/// pattern, so running links first would consume image syntax.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, &LINK_PATTERN, SpanKind::Link)
}

/// Scan `Text` spans left to right for non-greedy pattern matches,
/// emitting surrounding literal text as `Text` spans and each match as a
/// span of `kind` carrying the captured label and url.
fn split_pattern(spans: Vec<TextSpan>, pattern: &Regex, kind: SpanKind) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind != SpanKind::Text {
            result.push(span);
            continue;
        }
        let matches: Vec<(std::ops::Range<usize>, String, String)> = pattern
            .captures_iter(&span.text)
            .map(|caps| {
                let whole = caps.get(0).unwrap();
                (whole.range(), caps[1].to_owned(), caps[2].to_owned())
            })
            .collect();
        if matches.is_empty() {
            result.push(span);
            continue;
        }
        let mut cursor = 0;
        for (range, label, url) in matches {
            if range.start > cursor {
                result.push(TextSpan::new(&span.text[cursor..range.start], SpanKind::Text));
            }
            result.push(TextSpan::with_url(label, kind, url));
            cursor = range.end;
        }
        if cursor < span.text.len() {
            result.push(TextSpan::new(&span.text[cursor..], SpanKind::Text));
        }
    }
    result
}
