//! Block classification and document assembly.
//!
//! Wires the block splitter, inline tokenizer, and span mapping into a
//! full document tree: each block becomes a parent element (heading,
//! code fence, quote, list, or paragraph) whose children are the block's
//! tokenized inline content, and the whole document is wrapped in a
//! `div`.

use crate::blocks::markdown_to_blocks;
use crate::inline::{ParseError, text_to_spans};
use crate::node::{HtmlNode, RenderError};

/// Block-level classification of a markdown chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#`–`######` heading.
    Heading,
    /// Fenced code block.
    Code,
    /// Blockquote (every line starts with `>`).
    Quote,
    /// Unordered list (every line starts with `* ` or `- `).
    UnorderedList,
    /// Ordered list (lines start with `1. `, `2. `, ...).
    OrderedList,
    /// Anything else.
    Paragraph,
}

/// Error returned when converting a whole document fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    /// Inline tokenization failed.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// Tree serialization failed.
    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Classify a single block.
///
/// The block is expected to be trimmed, as produced by
/// [`markdown_to_blocks`].
#[must_use]
pub fn block_to_kind(block: &str) -> BlockKind {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        return BlockKind::Heading;
    }
    if block.len() >= 6 && block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }
    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if block
        .lines()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        return BlockKind::UnorderedList;
    }
    if block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
    {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Convert a markdown document into an HTML node tree.
///
/// Blocks are classified with [`block_to_kind`] and assembled into parent
/// elements; inline content runs through [`text_to_spans`]. The result is
/// a `div` parent over all blocks. An empty or whitespace-only document
/// yields a tagless empty leaf that renders to `""`.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedDelimiter`] if inline tokenization
/// fails in any block.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ParseError> {
    let blocks = markdown_to_blocks(document);
    if blocks.is_empty() {
        return Ok(HtmlNode::text(""));
    }
    let mut children = Vec::with_capacity(blocks.len());
    for block in blocks {
        children.push(block_to_node(block)?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Convert a markdown document straight to an HTML string.
///
/// # Errors
///
/// Returns [`MarkdownError::Parse`] on tokenization failure and
/// [`MarkdownError::Render`] on a malformed tree.
pub fn markdown_to_html(document: &str) -> Result<String, MarkdownError> {
    let node = markdown_to_html_node(document)?;
    Ok(node.render()?)
}

fn block_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    match block_to_kind(block) {
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => list_to_node(block, "ul", |line| &line[2..]),
        BlockKind::OrderedList => list_to_node(block, "ol", |line| {
            line.split_once(". ").map_or("", |(_, rest)| rest)
        }),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    let spans = text_to_spans(text)?;
    Ok(spans.into_iter().map(HtmlNode::from).collect())
}

fn heading_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    let tag = format!("h{hashes}");
    let children = inline_children(&block[hashes + 1..])?;
    Ok(HtmlNode::parent(tag, children))
}

/// Fence contents are taken verbatim after the opening fence line and are
/// never inline-tokenized.
fn code_to_node(block: &str) -> HtmlNode {
    let inner = block
        .strip_prefix("```")
        .and_then(|b| b.strip_suffix("```"))
        .unwrap_or(block);
    let content = inner.split_once('\n').map_or("", |(_, rest)| rest);
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content)])
}

fn quote_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let content = block
        .lines()
        .map(|line| line.trim_start_matches('>').trim_start())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", inline_children(&content)?))
}

fn list_to_node(
    block: &str,
    tag: &str,
    strip_marker: impl Fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let mut items = Vec::new();
    for line in block.lines() {
        let children = inline_children(strip_marker(line))?;
        items.push(HtmlNode::parent("li", children));
    }
    Ok(HtmlNode::parent(tag, items))
}

fn paragraph_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let content = block.replace('\n', " ");
    Ok(HtmlNode::parent("p", inline_children(&content)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_block_kinds() {
        assert_eq!(block_to_kind("# Title"), BlockKind::Heading);
        assert_eq!(block_to_kind("###### Deep"), BlockKind::Heading);
        assert_eq!(block_to_kind("####### Too deep"), BlockKind::Paragraph);
        assert_eq!(block_to_kind("#NoSpace"), BlockKind::Paragraph);
        assert_eq!(block_to_kind("```\ncode\n```"), BlockKind::Code);
        assert_eq!(block_to_kind("> quoted\n> lines"), BlockKind::Quote);
        assert_eq!(block_to_kind("* one\n* two"), BlockKind::UnorderedList);
        assert_eq!(block_to_kind("- one\n- two"), BlockKind::UnorderedList);
        assert_eq!(block_to_kind("1. one\n2. two"), BlockKind::OrderedList);
        assert_eq!(block_to_kind("1. one\n3. skip"), BlockKind::Paragraph);
        assert_eq!(block_to_kind("plain words"), BlockKind::Paragraph);
    }

    #[test]
    fn test_heading() {
        let html = markdown_to_html("## Section **two**").unwrap();
        assert_eq!(html, "<div><h2>Section <b>two</b></h2></div>");
    }

    #[test]
    fn test_paragraph_with_inline_markup() {
        let html = markdown_to_html("a *word* and `code`").unwrap();
        assert_eq!(html, "<div><p>a <i>word</i> and <code>code</code></p></div>");
    }

    #[test]
    fn test_multiline_paragraph_joins_lines() {
        let html = markdown_to_html("line one\nline two").unwrap();
        assert_eq!(html, "<div><p>line one line two</p></div>");
    }

    #[test]
    fn test_code_fence_not_inline_tokenized() {
        let html = markdown_to_html("```\nlet x = **not bold**;\n```").unwrap();
        assert_eq!(
            html,
            "<div><pre><code>let x = **not bold**;\n</code></pre></div>"
        );
    }

    #[test]
    fn test_quote() {
        let html = markdown_to_html("> wise\n> words").unwrap();
        assert_eq!(html, "<div><blockquote>wise words</blockquote></div>");
    }

    #[test]
    fn test_unordered_list() {
        let html = markdown_to_html("* one\n* **two**").unwrap();
        assert_eq!(
            html,
            "<div><ul><li>one</li><li><b>two</b></li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        let html = markdown_to_html("1. first\n2. second").unwrap();
        assert_eq!(html, "<div><ol><li>first</li><li>second</li></ol></div>");
    }

    #[test]
    fn test_full_document() {
        let doc = "# Title\n\nIntro with a [link](/a).\n\n* item\n* item\n\n> quote";
        let html = markdown_to_html(doc).unwrap();
        assert_eq!(
            html,
            "<div><h1>Title</h1><p>Intro with a <a href=\"/a\">link</a>.</p>\
             <ul><li>item</li><li>item</li></ul><blockquote>quote</blockquote></div>"
        );
    }

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(markdown_to_html("").unwrap(), "");
        assert_eq!(markdown_to_html("\n\n\n").unwrap(), "");
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = markdown_to_html("an **unclosed bold").unwrap_err();
        assert_eq!(
            err,
            MarkdownError::Parse(ParseError::UnterminatedDelimiter {
                delimiter: "**".to_owned()
            })
        );
    }
}
