//! Markdown to HTML rendering core.
//!
//! This crate converts markdown text into a tree of [`HtmlNode`]s and
//! serializes that tree into an HTML string. It is the rendering core of
//! the `press` static-site generator; file traversal, templating, and the
//! CLI live in the `press-site` and `press` crates.
//!
//! # Pipeline
//!
//! - [`markdown_to_blocks`]: split a document into block-level chunks on
//!   blank-line boundaries.
//! - [`text_to_spans`]: tokenize a block's inline content into typed
//!   [`TextSpan`]s (bold, italic, code, image, link).
//! - [`From<TextSpan>`](TextSpan): map each span to a leaf [`HtmlNode`].
//! - [`markdown_to_html_node`]: classify blocks and assemble the full
//!   document tree.
//! - [`HtmlNode::render`]: serialize the tree.
//!
//! # Example
//!
//! ```
//! use press_renderer::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

mod blocks;
mod document;
mod inline;
mod node;
mod span;

pub use blocks::markdown_to_blocks;
pub use document::{
    BlockKind, MarkdownError, block_to_kind, markdown_to_html, markdown_to_html_node,
};
pub use inline::{ParseError, split_delimiter, split_images, split_links, text_to_spans};
pub use node::{HtmlNode, RenderError};
pub use span::{SpanKind, TextSpan};
