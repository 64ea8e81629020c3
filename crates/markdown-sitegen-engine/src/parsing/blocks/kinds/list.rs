/// Bulleted list: every line starts with `- ` or `* `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn is_list(block: &str) -> bool {
        block
            .lines()
            .all(|line| Self::MARKERS.iter().any(|m| line.starts_with(m)))
    }

    /// Item text with the bullet removed.
    pub fn item_text(line: &str) -> &str {
        let line = line.trim();
        Self::MARKERS
            .iter()
            .find_map(|m| line.strip_prefix(m))
            .unwrap_or(line)
            .trim()
    }
}

/// Numbered list: line `i` starts with `{i + 1}.`, counting from 1 with no gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: char = '.';

    pub fn is_list(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}{}", i + 1, Self::SEPARATOR)))
    }

    /// Item text of the line at `index` with its `{index + 1}. ` marker
    /// removed. A line without that exact marker is returned trimmed but
    /// otherwise untouched.
    pub fn item_text(index: usize, line: &str) -> &str {
        let line = line.trim();
        let marker = format!("{}{} ", index + 1, Self::SEPARATOR);
        line.strip_prefix(marker.as_str()).map_or(line, str::trim)
    }
}
