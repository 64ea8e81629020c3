pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{
    error::{MarkdownError, Result},
    html::{HtmlNode, RenderOptions},
};

use blocks::{BlockNode, MarkdownBlockClassifier, compile_node, markdown_to_blocks};

/// Tag of the element wrapping every compiled document.
pub const ROOT_TAG: &str = "div";

/// Marks the line [`extract_title`] looks for.
pub const TITLE_PREFIX: &str = "# ";

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<BlockNode<'a>>,
}

/// Segments and classifies a document without compiling it.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let classifier = MarkdownBlockClassifier;
    let blocks = markdown_to_blocks(markdown)
        .into_iter()
        .map(|text| BlockNode {
            kind: classifier.classify(text),
            text,
        })
        .collect();

    ParsedDoc { blocks }
}

/// Compiles a whole document into a `<div>` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let doc = parse_document(markdown);
    let children = doc
        .blocks
        .iter()
        .map(compile_node)
        .collect::<Result<Vec<_>>>()?;

    log::debug!("compiled {} blocks", children.len());
    Ok(HtmlNode::element(ROOT_TAG, children))
}

/// Returns the text of the first line starting with `"# "`, trimmed.
///
/// Only level-one headings count, and the `#` must be followed directly by a
/// space.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::NoTitleFound)
}

/// Markdown in, serialized `<div>` fragment out.
pub fn render_markdown_document(markdown: &str) -> Result<String> {
    render_markdown_document_with(markdown, &RenderOptions::default())
}

pub fn render_markdown_document_with(markdown: &str, opts: &RenderOptions) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html_with(opts)
}
