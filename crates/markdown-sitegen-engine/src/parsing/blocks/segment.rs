/// Blocks are separated by one blank line, i.e. two consecutive newlines.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks in source order.
///
/// Runs of blank lines collapse: the empty pieces between them are dropped.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
