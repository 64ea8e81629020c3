/// The kind of a top-level block. Exactly one per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` heading.
    Heading {
        /// Number of leading `#` (1-6).
        level: u8,
    },
    /// A block fenced by triple backticks.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Lines numbered `1.`, `2.`, ... in order.
    OrderedList,
    /// Fallback when no other rule matches.
    Paragraph,
}

/// A classified block, borrowing its text from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockNode<'a> {
    /// The kind decided by the classifier.
    pub kind: BlockKind,
    /// Trimmed block text, without the surrounding blank lines.
    pub text: &'a str,
}
