//! The content index: a catalog that is loaded once and then only read.

use a11y_document::{DocumentNode, Node};

use crate::{
    Catalog, Category, IndexError,
    query::{SearchMatch, count_documents, find_by_name, search},
};

/// Lifecycle state of a [`ContentIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No catalog has been loaded yet; queries fail with [`IndexError::NotLoaded`].
    Unbuilt,
    /// A catalog is loaded and queries are served from it.
    Ready,
}

/// Read-only index over a catalog of content trees.
///
/// The index starts [`IndexState::Unbuilt`] and moves to [`IndexState::Ready`] on the first
/// successful [`ContentIndex::load`]. There is no way back: a rebuild means constructing a
/// new index. Once ready, the index is never mutated, so it can be shared freely between
/// readers.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    /// The loaded catalog, if any.
    catalog: Option<Catalog>,
}

impl ContentIndex {
    /// Creates an unbuilt index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index that is already ready with the given catalog.
    pub fn ready(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> IndexState {
        if self.catalog.is_some() {
            IndexState::Ready
        } else {
            IndexState::Unbuilt
        }
    }

    /// Loads a catalog, moving the index from unbuilt to ready.
    ///
    /// Fails with [`IndexError::AlreadyLoaded`] if the index is already ready.
    pub fn load(&mut self, catalog: Catalog) -> Result<(), IndexError> {
        if self.catalog.is_some() {
            return Err(IndexError::AlreadyLoaded);
        }
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> Result<&Catalog, IndexError> {
        self.catalog.as_ref().ok_or(IndexError::NotLoaded)
    }

    /// Iterates over categories in order.
    pub fn categories(&self) -> Result<impl Iterator<Item = Category<'_>>, IndexError> {
        Ok(self.catalog()?.iter())
    }

    /// Returns the top-level nodes of a category, or `None` if the category does not exist.
    pub fn category(&self, key: &str) -> Result<Option<&[Node]>, IndexError> {
        Ok(self.catalog()?.get(key))
    }

    /// Finds a document by exact name within a category.
    ///
    /// An unknown category behaves like an empty one.
    pub fn find(&self, category: &str, name: &str) -> Result<Option<&DocumentNode>, IndexError> {
        Ok(self
            .category(category)?
            .and_then(|nodes| find_by_name(nodes, name)))
    }

    /// Searches document names and labels.
    ///
    /// With a category, only that category is searched (an unknown category matches nothing);
    /// otherwise every category is searched in order.
    pub fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<SearchMatch>, IndexError> {
        let catalog = self.catalog()?;
        let matches = catalog
            .iter()
            .filter(|c| category.is_none_or(|key| key == c.key))
            .flat_map(|c| search(c.nodes, query, c.key))
            .collect();
        Ok(matches)
    }

    /// Counts the documents in one category, or `None` if the category does not exist.
    pub fn count(&self, category: &str) -> Result<Option<usize>, IndexError> {
        Ok(self.category(category)?.map(count_documents))
    }

    /// Counts the documents across all categories.
    pub fn total_documents(&self) -> Result<usize, IndexError> {
        Ok(self.categories()?.map(|c| count_documents(c.nodes)).sum())
    }
}
