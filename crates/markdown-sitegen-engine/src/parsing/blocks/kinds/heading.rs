/// ATX heading block type with owned marker constant.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level when `block` opens with 1-6 `#` followed by
    /// a space.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        if !block[hashes..].starts_with(' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Heading text with the `#` run and surrounding whitespace removed.
    pub fn text(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim()
    }
}
