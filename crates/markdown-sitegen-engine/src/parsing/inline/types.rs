/// The formatting of an [`InlineSpan`].
///
/// Only links and images carry a URL, so a styled span can never hold one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text, still eligible for later passes.
    Text,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous run of inline text with a single formatting kind.
///
/// For images `text` is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, SpanKind::Text)
    }

    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }
}
