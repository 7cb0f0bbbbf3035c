//! Content index for a11y.
//!
//! This crate builds and queries the in-memory index of accessibility documentation.
//! It handles:
//! - Building content trees from documentation directories, one per category
//! - Loading and saving the JSON content file
//! - The content index lifecycle (unbuilt, then ready)
//! - Lookup by name, substring search, counting, and outline formatting
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use a11y_index::{ContentIndex, build_catalog};
//!
//! let categories = vec!["web".to_string(), "native".to_string()];
//! let catalog = build_catalog(Path::new("./documentation"), &categories).unwrap();
//! let index = ContentIndex::ready(catalog);
//!
//! for hit in index.search("button", None).unwrap() {
//!     println!("{}/{}", hit.category, hit.path);
//! }
//! ```

#![warn(missing_docs)]

mod catalog;
mod discovery;
mod error;
mod index;
pub mod query;

pub use catalog::{Catalog, Category};
pub use discovery::{build_catalog, build_tree};
pub use error::IndexError;
pub use index::{ContentIndex, IndexState};
pub use query::{
    SearchMatch, count_documents, find_by_name, format_tree, search, section_keys_present,
};
