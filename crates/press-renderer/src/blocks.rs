//! Block-level document splitting.

/// Split a markdown document into block-level chunks.
///
/// Blocks are separated by blank lines (a literal `"\n\n"` boundary).
/// Single newlines inside a block are preserved, so multi-line paragraphs
/// and list groupings stay one block. Each candidate block is trimmed of
/// leading and trailing whitespace; candidates that are empty after
/// trimming are dropped, so runs of consecutive blank lines collapse to
/// nothing. Internal lines are never individually trimmed.
pub fn markdown_to_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
