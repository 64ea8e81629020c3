use std::sync::OnceLock;

use regex::Regex;

/// `![alt](url)`. Alt text and URL may not contain their own brackets.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    pub fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid image regex"))
    }
}

/// `[text](url)` not preceded by `!`.
///
/// `regex` has no look-behind, so the pattern also accepts a leading `!`
/// and [`Link::is_image_form`] rejects those matches afterwards.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"!?\[([^\[\]]*)\]\(([^\(\)]*)\)";
    pub const IMAGE_MARKER: char = '!';

    pub fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid link regex"))
    }

    pub fn is_image_form(matched: &str) -> bool {
        matched.starts_with(Self::IMAGE_MARKER)
    }
}
