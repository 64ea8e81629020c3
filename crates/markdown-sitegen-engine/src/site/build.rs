use std::path::PathBuf;

use crate::html::RenderOptions;
use crate::io::{SiteError, copy_static};

use super::page::generate_pages_recursive;

/// Inputs for a full site build.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteBuild {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Deleted and recreated on every build.
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
    pub render: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: Vec<PathBuf>,
}

/// Mirrors the static tree into a fresh output directory, then generates
/// every page on top of it.
pub fn build_site(build: &SiteBuild) -> Result<BuildReport, SiteError> {
    let static_files = copy_static(&build.static_dir, &build.output_dir)?;
    let pages = generate_pages_recursive(
        &build.content_dir,
        &build.template_path,
        &build.output_dir,
        &build.render,
    )?;

    log::info!(
        "built {} pages and copied {} static files into {}",
        pages.len(),
        static_files,
        build.output_dir.display()
    );

    Ok(BuildReport {
        static_files,
        pages,
    })
}
