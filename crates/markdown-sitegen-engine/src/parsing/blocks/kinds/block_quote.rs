/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// True when every line of `block` starts with `>`.
    pub fn is_quote(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips one `>` and the whitespace around the remaining text.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    /// Quote text with every line's prefix removed, joined with `\n`.
    pub fn content(block: &str) -> String {
        block
            .lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
