//! Ordered category-to-tree mapping and its JSON content file form.
//!
//! The content file is a JSON object whose keys are category names and whose values are
//! arrays of nodes. Category order is significant and survives a save/load cycle.

use std::{fs, path::Path};

use a11y_document::Node;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::IndexError;

/// Borrowed view of one category and its top-level nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category<'a> {
    /// Category key, e.g. `web` or `how-to-test`.
    pub key: &'a str,
    /// Top-level nodes in directory order.
    pub nodes: &'a [Node],
}

/// Categories and their content trees, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Category key to top-level nodes.
    categories: IndexMap<String, Vec<Node>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, replacing the nodes of an existing category with the same key.
    ///
    /// A replaced category keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, nodes: Vec<Node>) {
        self.categories.insert(key.into(), nodes);
    }

    /// Returns the nodes of a category.
    pub fn get(&self, key: &str) -> Option<&[Node]> {
        self.categories.get(key).map(Vec::as_slice)
    }

    /// Iterates over categories in order.
    pub fn iter(&self) -> impl Iterator<Item = Category<'_>> {
        self.categories.iter().map(|(key, nodes)| Category { key, nodes })
    }

    /// Iterates over category keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Parses a catalog from JSON content.
    pub fn from_json_str(json: &str) -> Result<Self, IndexError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a catalog from a JSON content file.
    pub fn read_json(path: &Path) -> Result<Self, IndexError> {
        let contents = fs::read_to_string(path).map_err(|source| IndexError::ReadContent {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| IndexError::ParseContent {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the catalog to a JSON content file, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> Result<(), IndexError> {
        let write_err = |source| IndexError::WriteContent {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut json = self.to_json_string()?;
        json.push('\n');
        fs::write(path, json).map_err(write_err)
    }
}
