//! JSON document importer.
//!
//! Format: a `metadata` object, a flat `nodes` list in reading order, and a
//! hierarchical `toc`. Node `resources` reference other node ids in the same
//! document; dangling references are rejected.

use serde::Deserialize;

use crate::document::{Document, Metadata, Node, TocEntry};
use crate::error::{Error, Result};

use super::Importer;

#[derive(Debug, Deserialize)]
struct DocumentSpec {
    #[serde(default)]
    metadata: MetadataSpec,
    #[serde(default)]
    nodes: Vec<NodeSpec>,
    #[serde(default)]
    toc: Vec<TocSpec>,
}

#[derive(Debug, Default, Deserialize)]
struct MetadataSpec {
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    language: String,
    #[serde(default)]
    identifier: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NodeSpec {
    id: String,
    kind: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    resources: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TocSpec {
    title: String,
    node: String,
    #[serde(default)]
    children: Vec<TocSpec>,
}

/// Importer for the JSON document format.
#[derive(Debug, Default)]
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }
}

impl Importer for JsonImporter {
    fn import(&self, data: &[u8]) -> Result<Document> {
        let spec: DocumentSpec =
            serde_json::from_slice(data).map_err(|e| Error::InvalidDocument(e.to_string()))?;

        let mut document = Document::new();
        document.metadata = Metadata {
            title: spec.metadata.title,
            authors: spec.metadata.authors,
            language: spec.metadata.language,
            identifier: spec.metadata.identifier,
            description: spec.metadata.description,
        };

        for node in spec.nodes {
            let mut built = Node::new(node.id, node.kind).with_content(node.content);
            built.resources = node.resources;
            document.add_node(built);
        }

        for node in document.nodes() {
            for resource in &node.resources {
                if !document.contains(resource) {
                    return Err(Error::InvalidDocument(format!(
                        "node {:?} references unknown resource {:?}",
                        node.id, resource
                    )));
                }
            }
        }

        document.toc = spec.toc.into_iter().map(toc_entry).collect();
        for entry in &document.toc {
            check_toc(entry, &document)?;
        }

        Ok(document)
    }
}

fn toc_entry(spec: TocSpec) -> TocEntry {
    let mut entry = TocEntry::new(spec.title, spec.node);
    entry.children = spec.children.into_iter().map(toc_entry).collect();
    entry
}

fn check_toc(entry: &TocEntry, document: &Document) -> Result<()> {
    if !document.contains(&entry.node) {
        return Err(Error::InvalidDocument(format!(
            "toc entry {:?} references unknown node {:?}",
            entry.title, entry.node
        )));
    }
    entry
        .children
        .iter()
        .try_for_each(|child| check_toc(child, document))
}
