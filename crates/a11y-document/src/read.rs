//! Reading documents from disk.

use std::{fs, path::Path};

use crate::{DocumentError, DocumentNode, build_document};

/// File extensions recognized as markdown documents.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Returns true if the path has a recognized markdown extension.
///
/// The comparison is case-sensitive: `README.MD` is not a markdown document.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Reads a markdown file and builds its document node.
///
/// The file stem becomes the node name. Files that cannot be read or are not valid UTF-8
/// produce [`DocumentError::ReadFile`]; non-markdown files produce
/// [`DocumentError::UnsupportedFileType`].
pub fn read_document(path: &Path) -> Result<DocumentNode, DocumentError> {
    if !is_markdown(path) {
        return Err(DocumentError::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(build_document(&stem, &content))
}
