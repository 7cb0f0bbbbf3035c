//! Read-only queries over content trees.
//!
//! All functions here are pure traversals of an already-built tree. Traversal is depth-first
//! and pre-order, so results follow directory order.

use a11y_document::{DocumentNode, Node, PreorderIter, SectionKey};
use serde::Serialize;

/// A document matched by [`search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Document name.
    pub name: String,
    /// Document label.
    pub label: String,
    /// Category the document was found in.
    pub category: String,
    /// Slash-joined node names from the category root to the document.
    pub path: String,
}

/// Finds the first document whose name equals `name` exactly.
///
/// Group nodes are never returned, even if their name matches.
pub fn find_by_name<'a>(nodes: &'a [Node], name: &str) -> Option<&'a DocumentNode> {
    PreorderIter::over(nodes)
        .filter_map(Node::as_document)
        .find(|doc| doc.name == name)
}

/// Counts the documents in a tree. Groups are not counted.
pub fn count_documents(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::Document(_) => 1,
            Node::Group(group) => count_documents(&group.children),
        })
        .sum()
}

/// Finds documents whose name or label contains `query`, ignoring case.
///
/// An empty query matches every document.
pub fn search(nodes: &[Node], query: &str, category: &str) -> Vec<SearchMatch> {
    let mut matches = Vec::new();
    search_into(nodes, &query.to_lowercase(), category, "", &mut matches);
    matches
}

/// Recursive step of [`search`]; `query` is already lower-cased.
fn search_into(
    nodes: &[Node],
    query: &str,
    category: &str,
    prefix: &str,
    matches: &mut Vec<SearchMatch>,
) {
    for node in nodes {
        let path = if prefix.is_empty() {
            node.name().to_string()
        } else {
            format!("{prefix}/{}", node.name())
        };

        match node {
            Node::Document(doc) => {
                if doc.name.to_lowercase().contains(query)
                    || doc.label.to_lowercase().contains(query)
                {
                    matches.push(SearchMatch {
                        name: doc.name.clone(),
                        label: doc.label.clone(),
                        category: category.to_string(),
                        path,
                    });
                }
            }
            Node::Group(group) => search_into(&group.children, query, category, &path, matches),
        }
    }
}

/// Renders a tree as an indented markdown outline.
///
/// Groups render as bold labels and documents as bullets of the form ``• Label (`name`)``.
/// Each line at `level` is indented by `2 * (level - 1)` spaces; children render one level
/// deeper.
pub fn format_tree(nodes: &[Node], level: usize) -> String {
    let mut out = String::new();
    format_into(nodes, level, &mut out);
    out
}

/// Recursive step of [`format_tree`].
fn format_into(nodes: &[Node], level: usize, out: &mut String) {
    let indent = "  ".repeat(level.saturating_sub(1));
    for node in nodes {
        match node {
            Node::Document(doc) => {
                out.push_str(&format!("{indent}• {} (`{}`)\n", doc.label, doc.name));
            }
            Node::Group(group) => {
                out.push_str(&format!("{indent}**{}**\n", group.label));
                format_into(&group.children, level + 1, out);
            }
        }
    }
}

/// Returns the keys of the sections present on a document, in priority order.
pub fn section_keys_present(doc: &DocumentNode) -> Vec<SectionKey> {
    doc.sections.keys()
}
