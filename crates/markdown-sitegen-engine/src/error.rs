/// Errors raised while turning Markdown into HTML.
///
/// Every variant aborts the current top-level call; nothing is partially
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid Markdown syntax: unbalanced `{delimiter}` in {text:?}")]
    MalformedInlineSyntax { delimiter: String, text: String },
    #[error("Unexpected delimiter: {0}")]
    UnknownDelimiter(String),
    #[error("Leaf nodes must have a value")]
    EmptyLeafValue,
    #[error("Element nodes must have children")]
    MissingChildren,
    #[error("Element nodes must have a tag")]
    MissingTag,
    #[error("No title found: document has no line starting with \"# \"")]
    NoTitleFound,
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
