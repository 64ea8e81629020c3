//! Turns a content tree, a static tree and one HTML template into a site.

pub mod build;
pub mod page;
pub mod template;

pub use crate::io::{SiteError, copy_static};
pub use build::{BuildReport, SiteBuild, build_site};
pub use page::{generate_page, generate_pages_recursive};
pub use template::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, fill_template};
