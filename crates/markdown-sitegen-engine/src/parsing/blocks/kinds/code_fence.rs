/// Fenced code block type.
///
/// A code block is a whole block that starts and ends with a backtick fence.
/// The body is never inline-parsed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True when `block` opens and closes with a fence that do not overlap.
    /// Six backticks on their own are an empty code block.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The text between the fences, trimmed.
    pub fn body(block: &str) -> &str {
        let inner = block.strip_prefix(Self::BACKTICKS).unwrap_or(block);
        let inner = inner.strip_suffix(Self::BACKTICKS).unwrap_or(inner);
        inner.trim()
    }
}
