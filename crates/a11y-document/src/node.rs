//! Content tree node types.
//!
//! A content tree is built from a documentation directory. Directories become group nodes
//! and markdown files become document nodes. Both serialize to the JSON content file shape:
//! documents carry `"type": "file"` and their sections inline, groups carry `children`.

use serde::{Deserialize, Serialize};

use crate::{SectionKey, SectionMap, extract_sections, format_label};

/// Marker serialized as `"type": "file"` on document nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    /// The only document type.
    #[default]
    #[serde(rename = "file")]
    File,
}

/// A leaf node holding one document's extracted sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Human-readable label derived from the name.
    pub label: String,
    /// Stable identifier: the source file stem.
    pub name: String,
    /// Node type marker.
    #[serde(rename = "type")]
    kind: FileType,
    /// Extracted sections.
    #[serde(flatten)]
    pub sections: SectionMap,
}

impl DocumentNode {
    /// Creates a document node with a label derived from `name`.
    pub fn new(name: &str, sections: SectionMap) -> Self {
        Self {
            label: format_label(name),
            name: name.to_string(),
            kind: FileType::File,
            sections,
        }
    }

    /// Returns the text of a section, if present.
    pub fn section(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(key)
    }
}

/// An internal node representing a documentation directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    /// Human-readable label derived from the name.
    pub label: String,
    /// Directory name.
    pub name: String,
    /// Child nodes in directory order.
    pub children: Vec<Node>,
}

impl GroupNode {
    /// Creates a group node with a label derived from `name`.
    pub fn new(name: &str, children: Vec<Node>) -> Self {
        Self {
            label: format_label(name),
            name: name.to_string(),
            children,
        }
    }
}

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A document leaf.
    Document(DocumentNode),
    /// A directory of documents and subgroups.
    Group(GroupNode),
}

impl Node {
    /// Returns the node name.
    pub fn name(&self) -> &str {
        match self {
            Self::Document(doc) => &doc.name,
            Self::Group(group) => &group.name,
        }
    }

    /// Returns the node label.
    pub fn label(&self) -> &str {
        match self {
            Self::Document(doc) => &doc.label,
            Self::Group(group) => &group.label,
        }
    }

    /// Returns the document if this is a leaf.
    pub fn as_document(&self) -> Option<&DocumentNode> {
        match self {
            Self::Document(doc) => Some(doc),
            Self::Group(_) => None,
        }
    }

    /// Returns the children of a group, or an empty slice for documents.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Document(_) => &[],
            Self::Group(group) => &group.children,
        }
    }

    /// Returns an iterator over this node and all descendants in pre-order (depth-first).
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }
}

impl From<DocumentNode> for Node {
    fn from(doc: DocumentNode) -> Self {
        Self::Document(doc)
    }
}

impl From<GroupNode> for Node {
    fn from(group: GroupNode) -> Self {
        Self::Group(group)
    }
}

/// Iterator for pre-order traversal of nodes.
pub struct PreorderIter<'a> {
    /// Stack of nodes to visit (rightmost children pushed first).
    stack: Vec<&'a Node>,
}

impl<'a> PreorderIter<'a> {
    /// Creates a pre-order iterator over a sequence of sibling roots.
    pub fn over(nodes: &'a [Node]) -> Self {
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so leftmost child is processed first
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Builds a document node from a source identifier and its raw markdown.
///
/// `source_id` is the file stem; it becomes the node name as-is and its label is derived
/// with [`format_label`]. No I/O is performed.
pub fn build_document(source_id: &str, content: &str) -> DocumentNode {
    DocumentNode::new(source_id, extract_sections(content))
}
