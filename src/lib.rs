//! # lectern
//!
//! A library for building document readers: it maps URL-like routes to a
//! normalized navigation state and composes the right mix of content,
//! table-of-contents, and resource panels for any point in a structured
//! document.
//!
//! ## Quick Start
//!
//! ```
//! use lectern::{Document, Node, Shell, ShellConfig, TocEntry};
//!
//! let mut doc = Document::new();
//! doc.add_node(Node::new("intro", "paragraph").with_content("Hello."));
//! doc.toc.push(TocEntry::new("Introduction", "intro"));
//!
//! let mut shell = Shell::new(doc, ShellConfig::default()).unwrap();
//!
//! // The root location shows the table of contents.
//! let tree = shell.open("").unwrap();
//! assert_eq!(tree.attr("class"), Some("reader"));
//!
//! // Deep link straight to a node.
//! shell.open("toc/intro").unwrap();
//! assert_eq!(shell.controller().state().node.as_deref(), Some("intro"));
//! ```
//!
//! ## Architecture
//!
//! A route change flows through the system in one direction: the [`Router`]
//! matches the location against an ordered table, the bound command updates
//! the [`ReaderController`]'s [`NavigationState`], and the reader view
//! re-renders panels from that state. Panels come from a [`PanelFactory`]
//! driven by declarative [`PanelSpec`]s; individual nodes resolve to views
//! through a [`ViewFactory`] keyed by node-type tag.

pub mod command;
pub mod document;
pub mod error;
pub mod import;
pub mod panel;
pub mod reader;
pub mod route;
pub mod shell;
pub mod state;
pub mod view;

pub use command::{CommandRegistry, open_reader};
pub use document::{Document, Metadata, Node, TocEntry};
pub use error::{Error, Result};
pub use import::Importer;
pub use panel::{Panel, PanelFactory, PanelKind, PanelSpec, RESERVED_PANELS};
pub use reader::{ReaderController, ReaderOptions, ReaderView};
pub use route::{OPEN_READER, Route, RouteMatch, Router, default_routes};
pub use shell::{Shell, ShellConfig};
pub use state::{DEFAULT_CONTEXT, NavigationState, Region};
pub use view::{
    Capabilities, Element, NodeView, RenderOptions, ResourceView, TextView, ViewFactory,
    ViewOptions,
};

#[cfg(feature = "cli")]
pub use import::JsonImporter;
