pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{MarkdownError, Result};
pub use html::{Attributes, ElementNode, HtmlNode, LeafNode, RenderOptions};
pub use io::SiteError;
pub use models::SitePage;
pub use parsing::{
    extract_title, markdown_to_html_node, render_markdown_document, render_markdown_document_with,
};
pub use site::{BuildReport, SiteBuild, build_site};
