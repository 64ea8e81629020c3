use std::path::{Path, PathBuf};

use crate::html::RenderOptions;
use crate::io::{SiteError, read_file, scan_markdown_files, write_file};
use crate::parsing::{extract_title, render_markdown_document_with};

use super::template::fill_template;

/// Renders one markdown file through `template_path` and writes it to `dest`.
///
/// The page title comes from the document's first `# ` line, so a page
/// without one fails with [`crate::MarkdownError::NoTitleFound`].
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    opts: &RenderOptions,
) -> Result<(), SiteError> {
    log::info!(
        "generating page {} -> {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = read_file(from)?;
    let template = read_file(template_path)?;

    let content = render_markdown_document_with(&markdown, opts)?;
    let title = extract_title(&markdown)?;

    write_file(dest, &fill_template(&template, &title, &content))
}

/// Generates every `*.md` below `content_dir` into the same relative
/// location under `dest_dir`, with an `.html` extension.
///
/// Returns the written paths in sorted order. Stops at the first failure;
/// pages already written stay on disk.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    opts: &RenderOptions,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();
    for page in scan_markdown_files(content_dir)? {
        let dest = page.destination_in(dest_dir);
        generate_page(&page.source_in(content_dir), template_path, &dest, opts)?;
        written.push(dest);
    }

    written.sort();
    Ok(written)
}
