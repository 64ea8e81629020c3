pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Substitutes every title and content placeholder in `template`.
///
/// Placeholders are matched literally, spacing included. The title is
/// substituted first, so a title containing `{{ Content }}` gets filled too.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}
