use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

/// A markdown source page and the HTML page it is generated into.
///
/// Both paths are relative: the source to the content directory, the output
/// to the destination directory. `blog/post.md` becomes `blog/post.html`.
#[derive(Debug, Clone, PartialEq)]
pub struct SitePage {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl SitePage {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    /// Create a new SitePage from a relative markdown path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension(Self::OUTPUT_EXTENSION);

        Self {
            relative_path,
            output_path,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Create from an absolute source path below `content_root`.
    ///
    /// Returns `None` when `source` is not inside `content_root` or is not
    /// valid UTF-8.
    pub fn from_source(content_root: &Path, source: &Path) -> Option<Self> {
        let relative = source.strip_prefix(content_root).ok()?;
        RelativePathBuf::from_path(relative).ok().map(Self::new)
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }

    pub fn source_in(&self, content_root: &Path) -> PathBuf {
        self.relative_path.to_path(content_root)
    }

    pub fn destination_in(&self, output_root: &Path) -> PathBuf {
        self.output_path.to_path(output_root)
    }
}

impl From<&str> for SitePage {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
