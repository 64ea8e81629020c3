use crate::parsing::inline::types::SpanKind;

/// Character-delimited inline styles.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
    pub const CODE: &'static str = "`";

    /// Pass order. `**` must run before `*`, otherwise every bold marker
    /// would be read as two italic markers.
    pub const PASSES: [&'static str; 3] = [Self::BOLD, Self::ITALIC, Self::CODE];

    /// Maps a delimiter to the kind of span it produces.
    pub fn kind(delimiter: &str) -> Option<SpanKind> {
        match delimiter {
            Self::BOLD => Some(SpanKind::Bold),
            Self::ITALIC => Some(SpanKind::Italic),
            Self::CODE => Some(SpanKind::Code),
            _ => None,
        }
    }
}
