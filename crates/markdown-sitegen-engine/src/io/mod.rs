use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MarkdownError;
use crate::models::SitePage;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source has to be a directory: {0}")]
    InvalidSourceDir(PathBuf),
    #[error("Markdown error: {0}")]
    Markdown(#[from] MarkdownError),
}

/// Read a text file, reporting a missing file as [`SiteError::NotFound`]
pub fn read_file(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(SiteError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(SiteError::Io)?;
    }

    fs::write(path, content).map_err(SiteError::Io)
}

/// Scan for markdown pages in the content directory, sorted by path
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<SitePage>, SiteError> {
    validate_source_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();

    Ok(files
        .iter()
        .filter_map(|path| SitePage::from_source(content_root, path))
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(SiteError::Io)?;

    for entry in entries {
        let entry = entry.map_err(SiteError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == SitePage::SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Mirror `source` into `destination`, replacing whatever was there.
///
/// Returns the number of files copied.
pub fn copy_static(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    validate_source_dir(source)?;

    if destination.exists() {
        log::debug!("removing {}", destination.display());
        fs::remove_dir_all(destination).map_err(SiteError::Io)?;
    }

    copy_directory_recursive(source, destination)
}

fn copy_directory_recursive(source: &Path, destination: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(destination).map_err(SiteError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(source).map_err(SiteError::Io)? {
        let entry = entry.map_err(SiteError::Io)?;
        let source_path = entry.path();
        let destination_path = destination.join(entry.file_name());

        if source_path.is_dir() {
            copied += copy_directory_recursive(&source_path, &destination_path)?;
        } else {
            log::info!(
                "copying {} -> {}",
                source_path.display(),
                destination_path.display()
            );
            fs::copy(&source_path, &destination_path).map_err(SiteError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}

pub fn validate_source_dir(path: &Path) -> Result<(), SiteError> {
    if !path.is_dir() {
        return Err(SiteError::InvalidSourceDir(path.to_path_buf()));
    }

    Ok(())
}
