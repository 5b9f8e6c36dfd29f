use std::collections::HashMap;

use crate::error::{Error, Result};

/// In-memory representation of a structured document.
/// Nodes are addressed by identifier; reading order is kept separately so
/// lookup stays O(1) while iteration stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub metadata: Metadata,
    pub toc: Vec<TocEntry>,
    nodes: HashMap<String, Node>,
    order: Vec<String>,
}

/// Document metadata (Dublin Core subset)
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: String,
    pub authors: Vec<String>,
    pub language: String,
    pub identifier: String,
    pub description: Option<String>,
}

/// An addressable unit of content: a paragraph, figure, citation, etc.
///
/// `kind` is the node-type tag the view factory dispatches on. `resources`
/// lists the ids of auxiliary nodes attached to this one (e.g. the citations
/// of a paragraph); resource nodes live in the same document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub kind: String,
    pub content: String,
    pub resources: Vec<String>,
}

/// A table of contents entry (hierarchical), pointing at a node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub title: String,
    pub node: String,
    pub children: Vec<TocEntry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the document. Re-adding an id replaces the existing
    /// node without disturbing its position in the reading order.
    pub fn add_node(&mut self, node: Node) {
        let id = node.id.clone();
        if self.nodes.insert(id.clone(), node).is_none() {
            self.order.push(id);
        }
    }

    /// Get a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by id, failing with [`Error::UnknownNode`] on a miss.
    pub fn require_node(&self, id: &str) -> Result<&Node> {
        self.node(id)
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate nodes in reading order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            content: String::new(),
            resources: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_resource(mut self, id: impl Into<String>) -> Self {
        self.resources.push(id.into());
        self
    }
}

impl TocEntry {
    pub fn new(title: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            node: node.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TocEntry) -> Self {
        self.children.push(child);
        self
    }
}
