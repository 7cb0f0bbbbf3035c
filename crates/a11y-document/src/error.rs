//! Error types for document reading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file, or the file is not valid UTF-8.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Unsupported file type.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },
}
