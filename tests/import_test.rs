#![cfg(feature = "cli")]

//! JSON importer tests.

use std::fs;

use tempfile::TempDir;

use lectern::{Error, Importer, JsonImporter};

const SAMPLE: &str = r#"{
    "metadata": {
        "title": "Sample Document",
        "authors": ["A. Writer"],
        "language": "en"
    },
    "nodes": [
        {"id": "intro", "kind": "paragraph", "content": "Welcome."},
        {"id": "figureA", "kind": "figure", "content": "A graph.", "resources": ["citation1"]},
        {"id": "citation1", "kind": "citation", "content": "Doe 2020."}
    ],
    "toc": [
        {"title": "Introduction", "node": "intro"},
        {"title": "Figure A", "node": "figureA", "children": [
            {"title": "Citation", "node": "citation1"}
        ]}
    ]
}"#;

#[test]
fn test_import_sample_document() {
    let doc = JsonImporter::new().import(SAMPLE.as_bytes()).unwrap();

    assert_eq!(doc.metadata.title, "Sample Document");
    assert_eq!(doc.metadata.authors, vec!["A. Writer"]);
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.node("figureA").unwrap().resources, vec!["citation1"]);
    assert_eq!(doc.toc.len(), 2);
    assert_eq!(doc.toc[1].children[0].node, "citation1");
}

#[test]
fn test_import_preserves_reading_order() {
    let doc = JsonImporter::new().import(SAMPLE.as_bytes()).unwrap();

    let ids: Vec<&str> = doc.nodes().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "figureA", "citation1"]);
}

#[test]
fn test_import_through_filesystem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.json");
    fs::write(&path, SAMPLE).unwrap();

    let data = fs::read(&path).unwrap();
    let doc = JsonImporter::new().import(&data).unwrap();
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_empty_object_imports_as_empty_document() {
    let doc = JsonImporter::new().import(b"{}").unwrap();

    assert!(doc.is_empty());
    assert!(doc.toc.is_empty());
    assert!(doc.metadata.title.is_empty());
}

#[test]
fn test_malformed_json_is_invalid_document() {
    let result = JsonImporter::new().import(b"{not json");
    assert!(matches!(result, Err(Error::InvalidDocument(_))));
}

#[test]
fn test_dangling_resource_reference_is_rejected() {
    let data = r#"{"nodes": [
        {"id": "p1", "kind": "paragraph", "resources": ["ghost"]}
    ]}"#;

    let result = JsonImporter::new().import(data.as_bytes());
    assert!(matches!(result, Err(Error::InvalidDocument(msg)) if msg.contains("ghost")));
}

#[test]
fn test_dangling_toc_reference_is_rejected() {
    let data = r#"{
        "nodes": [{"id": "p1", "kind": "paragraph"}],
        "toc": [{"title": "Missing", "node": "ghost"}]
    }"#;

    let result = JsonImporter::new().import(data.as_bytes());
    assert!(matches!(result, Err(Error::InvalidDocument(msg)) if msg.contains("ghost")));
}
