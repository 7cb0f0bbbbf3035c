//! Error types for the a11y-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when building, loading, or querying the content index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The documentation source root does not exist.
    #[error("documentation source not found: {path}")]
    SourceNotFound {
        /// Path to the missing source.
        path: PathBuf,
    },

    /// The documentation source root is not a directory.
    #[error("documentation source is not a directory: {path}")]
    SourceNotDirectory {
        /// Path to the source.
        path: PathBuf,
    },

    /// None of the category directories exist under the source root.
    #[error("no category directories found under {path}")]
    NoCategories {
        /// Path to the source root.
        path: PathBuf,
    },

    /// Failed to list a directory.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// Failed to read a content file.
    #[error("failed to read content file {path}: {source}")]
    ReadContent {
        /// Path to the content file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A content file is not valid JSON of the expected shape.
    #[error("failed to parse content file {path}: {source}")]
    ParseContent {
        /// Path to the content file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to write a content file.
    #[error("failed to write content file {path}: {source}")]
    WriteContent {
        /// Path to the content file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// JSON serialization or parsing failed outside of a file.
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A query was made before the index was loaded.
    #[error("content index is not loaded")]
    NotLoaded,

    /// The index was loaded a second time.
    #[error("content index is already loaded")]
    AlreadyLoaded,
}
