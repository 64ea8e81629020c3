use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Assigns a [`BlockKind`] to a whole block.
///
/// Rules are tried in a fixed order and the first match wins: heading, code,
/// quote, unordered list, ordered list, paragraph. A block that satisfies
/// both the quote and a list rule is a quote.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    pub fn classify(&self, block: &str) -> BlockKind {
        if let Some(level) = Heading::level(block) {
            return BlockKind::Heading { level };
        }
        if CodeFence::is_fenced(block) {
            return BlockKind::Code;
        }
        if BlockQuote::is_quote(block) {
            return BlockKind::Quote;
        }
        if UnorderedList::is_list(block) {
            return BlockKind::UnorderedList;
        }
        if OrderedList::is_list(block) {
            return BlockKind::OrderedList;
        }
        BlockKind::Paragraph
    }
}

/// Shorthand for [`MarkdownBlockClassifier::classify`].
pub fn classify(block: &str) -> BlockKind {
    MarkdownBlockClassifier.classify(block)
}
