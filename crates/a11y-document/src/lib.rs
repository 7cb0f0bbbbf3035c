//! Document parsing for a11y.
//!
//! This crate turns accessibility documentation written in markdown into content tree nodes.
//! It handles:
//! - Splitting a document into named sections at level-2 headings
//! - Deriving readable labels from file and directory names
//! - The document and group node types shared with the index
//! - Reading markdown files from disk

#![warn(missing_docs)]

mod error;
mod label;
mod node;
mod read;
mod section;

pub use error::DocumentError;
pub use label::format_label;
pub use node::{DocumentNode, FileType, GroupNode, Node, PreorderIter, build_document};
pub use read::{MARKDOWN_EXTENSIONS, is_markdown, read_document};
pub use section::{SectionKey, SectionMap, extract_sections};
