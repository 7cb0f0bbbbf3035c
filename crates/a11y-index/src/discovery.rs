//! Content tree construction from a documentation directory.
//!
//! Walks a directory one level at a time, in file name order, turning subdirectories into
//! group nodes and markdown files into document nodes. Subdirectories that end up with no
//! documents are pruned, and documents that fail to read are logged and skipped. Symlinks
//! are followed; a directory link that leads back into the directory being walked is skipped.

use std::{
    fs::{self, FileType},
    path::{Path, PathBuf},
};

use a11y_document::{GroupNode, Node, is_markdown, read_document};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{Catalog, IndexError};

/// Builds the content tree rooted at `dir`.
///
/// Entries are visited in byte-wise file name order, so the result is the same across runs
/// and hosts. Returns an error only if `dir` itself is missing or not a directory; problems
/// with individual entries are logged and those entries skipped.
pub fn build_tree(dir: &Path) -> Result<Vec<Node>, IndexError> {
    check_source(dir)?;
    Ok(collect_dir(dir, &mut Vec::new()))
}

/// Builds a catalog with one content tree per category directory under `root`.
///
/// Categories are taken in the given order; a category without a directory is skipped. When
/// `categories` is empty, every subdirectory of `root` becomes a category, in name order.
/// Returns [`IndexError::NoCategories`] when no category directory exists at all.
pub fn build_catalog(root: &Path, categories: &[String]) -> Result<Catalog, IndexError> {
    check_source(root)?;

    let categories = if categories.is_empty() {
        category_dirs(root)?
    } else {
        categories.to_vec()
    };

    let mut catalog = Catalog::new();
    for category in categories {
        let path = root.join(&category);
        if !path.is_dir() {
            info!(
                category = %category,
                path = %path.display(),
                "category directory not found, skipping"
            );
            continue;
        }

        let nodes = collect_dir(&path, &mut Vec::new());
        info!(category = %category, items = nodes.len(), "indexed category");
        catalog.insert(category, nodes);
    }

    if catalog.is_empty() {
        return Err(IndexError::NoCategories {
            path: root.to_path_buf(),
        });
    }
    Ok(catalog)
}

/// Ensures the source root exists and is a directory.
fn check_source(dir: &Path) -> Result<(), IndexError> {
    if !dir.exists() {
        return Err(IndexError::SourceNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(IndexError::SourceNotDirectory {
            path: dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Returns a walker over the immediate entries of `dir`, sorted by file name.
fn immediate_entries(dir: &Path) -> WalkDir {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
}

/// Lists the names of the immediate subdirectories of `root`.
fn category_dirs(root: &Path) -> Result<Vec<String>, IndexError> {
    let mut names = Vec::new();
    for entry in immediate_entries(root) {
        let entry = entry.map_err(|source| IndexError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;
        if resolved_file_type(&entry).is_some_and(|t| t.is_dir()) {
            names.push(entry_name(&entry));
        }
    }
    Ok(names)
}

/// Recursively collects the nodes for one directory.
///
/// `ancestors` holds the canonical paths of the directories currently being walked.
fn collect_dir(dir: &Path, ancestors: &mut Vec<PathBuf>) -> Vec<Node> {
    let canonical = match dir.canonicalize() {
        Ok(path) => path,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "skipping unresolvable directory");
            return Vec::new();
        }
    };
    if ancestors.contains(&canonical) {
        warn!(path = %dir.display(), "skipping directory link cycle");
        return Vec::new();
    }
    ancestors.push(canonical);

    let mut nodes = Vec::new();

    for entry in immediate_entries(dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().map_or_else(|| dir.to_path_buf(), PathBuf::from);
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let Some(file_type) = resolved_file_type(&entry) else {
            continue;
        };
        if file_type.is_dir() {
            let children = collect_dir(entry.path(), ancestors);
            if children.is_empty() {
                debug!(path = %entry.path().display(), "pruning empty group");
                continue;
            }
            nodes.push(GroupNode::new(&entry_name(&entry), children).into());
        } else if file_type.is_file() && is_markdown(entry.path()) {
            match read_document(entry.path()) {
                Ok(doc) => nodes.push(doc.into()),
                Err(e) => warn!(error = %e, "skipping document"),
            }
        }
    }

    ancestors.pop();
    nodes
}

/// Returns the entry's file type, with symlinks resolved to their target.
///
/// Returns `None` for a dangling link.
fn resolved_file_type(entry: &DirEntry) -> Option<FileType> {
    if !entry.path_is_symlink() {
        return Some(entry.file_type());
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => Some(meta.file_type()),
        Err(e) => {
            debug!(path = %entry.path().display(), error = %e, "skipping dangling symlink");
            None
        }
    }
}

/// Returns the entry's file name as a string.
fn entry_name(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().into_owned()
}
