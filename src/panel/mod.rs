//! Panels: named, document-bound regions of the reader.
//!
//! A [`PanelSpec`] is the declarative form (name, node-type bindings,
//! factory options); a [`Panel`] is the runtime binding of a spec to a
//! document, created by the [`PanelFactory`]. Panels share the document,
//! they never own it.

mod factory;

pub use factory::{PanelFactory, RESERVED_PANELS};

use std::rc::Rc;

use crate::document::{Document, Node, TocEntry};
use crate::error::Result;
use crate::view::{
    Capabilities, Element, NodeView, RenderOptions, TextView, ViewFactory, ViewOptions,
};

/// Shape of a panel: a leaf wraps a flat document selection, a container
/// manages a heterogeneous child collection with per-child views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    #[default]
    Leaf,
    Container,
}

/// Where a panel draws its content from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelSource {
    /// The panel's node selection (all nodes, or the kinds it selects).
    #[default]
    Nodes,
    /// The document outline (used by the built-in toc panel).
    Outline,
}

type Binding = (
    String,
    Capabilities,
    crate::view::ViewConstructor,
);

/// Declarative descriptor for a panel: a unique name, the node kinds it
/// selects, and the view-factory seed (bindings plus option gates).
#[derive(Clone)]
pub struct PanelSpec {
    name: String,
    kind: PanelKind,
    source: PanelSource,
    options: ViewOptions,
    selects: Vec<String>,
    bindings: Vec<Binding>,
    fallback: Option<(Capabilities, crate::view::ViewConstructor)>,
}

impl PanelSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PanelKind::Leaf,
            source: PanelSource::Nodes,
            options: ViewOptions::default(),
            selects: Vec::new(),
            bindings: Vec::new(),
            fallback: None,
        }
    }

    /// A container panel spec.
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            kind: PanelKind::Container,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    /// Restrict the panel to nodes of the given kind. Without any `select`
    /// calls the panel shows every node.
    pub fn select(mut self, kind: impl Into<String>) -> Self {
        self.selects.push(kind.into());
        self
    }

    /// Bind a node kind to a view constructor with capability metadata.
    pub fn bind(
        mut self,
        kind: impl Into<String>,
        caps: Capabilities,
        construct: impl Fn(&Node, &ViewFactory, RenderOptions) -> Result<Box<dyn NodeView>> + 'static,
    ) -> Self {
        self.bindings.push((kind.into(), caps, Rc::new(construct)));
        self
    }

    /// Bind the fallback view for kinds without an explicit binding.
    pub fn bind_default(
        mut self,
        caps: Capabilities,
        construct: impl Fn(&Node, &ViewFactory, RenderOptions) -> Result<Box<dyn NodeView>> + 'static,
    ) -> Self {
        self.fallback = Some((caps, Rc::new(construct)));
        self
    }

    pub fn with_options(mut self, options: ViewOptions) -> Self {
        self.options = options;
        self
    }

    fn with_source(mut self, source: PanelSource) -> Self {
        self.source = source;
        self
    }

    fn build_factory(&self) -> ViewFactory {
        let mut factory = ViewFactory::new(self.options);
        for (kind, caps, construct) in &self.bindings {
            let construct = construct.clone();
            factory.register(kind.clone(), *caps, move |n, f, o| construct(n, f, o));
        }
        if let Some((caps, construct)) = &self.fallback {
            let construct = construct.clone();
            factory.register_default(*caps, move |n, f, o| construct(n, f, o));
        }
        factory
    }

    /// The built-in content panel: every node, baseline text views.
    pub(crate) fn builtin_content() -> Self {
        Self::new("content").bind_default(Capabilities::NONE, TextView::create)
    }

    /// The built-in toc panel: renders the document outline.
    pub(crate) fn builtin_toc() -> Self {
        Self::new("toc").with_source(PanelSource::Outline)
    }
}

impl std::fmt::Debug for PanelSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("source", &self.source)
            .field("selects", &self.selects)
            .finish()
    }
}

/// Runtime binding of a panel spec to a document.
pub struct Panel {
    name: String,
    kind: PanelKind,
    source: PanelSource,
    document: Rc<Document>,
    factory: ViewFactory,
    selects: Vec<String>,
}

impl Panel {
    pub(crate) fn from_spec(document: Rc<Document>, spec: &PanelSpec) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind,
            source: spec.source,
            factory: spec.build_factory(),
            selects: spec.selects.clone(),
            document,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn factory(&self) -> &ViewFactory {
        &self.factory
    }

    /// The document sub-selection this panel shows, in reading order.
    pub fn nodes(&self) -> Vec<&Node> {
        self.document
            .nodes()
            .filter(|n| self.selects.is_empty() || self.selects.iter().any(|k| *k == n.kind))
            .collect()
    }

    /// Child elements, re-derived from the live document on every call so
    /// the panel never holds stale references.
    pub fn children(&self) -> Result<Vec<Element>> {
        self.nodes()
            .into_iter()
            .map(|node| {
                self.factory
                    .resolve(node, RenderOptions::default(), None)?
                    .render()
            })
            .collect()
    }

    /// Render the panel view.
    pub fn render(&self) -> Result<Element> {
        let mut root = Element::new("div")
            .with_attr("class", panel_class(self.kind))
            .with_attr("data-panel", &self.name);
        match self.source {
            PanelSource::Outline => {
                root.push(render_outline(&self.document.toc));
            }
            PanelSource::Nodes => {
                for child in self.children()? {
                    root.push(wrap_child(self.kind, child));
                }
            }
        }
        Ok(root)
    }

    /// Render the panel with one node marked as the scroll/focus target.
    /// Fails with [`crate::Error::UnknownNode`] if the node is not in the
    /// document.
    pub fn render_focused(&self, node_id: &str) -> Result<Element> {
        self.document.require_node(node_id)?;
        let mut root = self.render()?;
        root.set_attr("data-focus", node_id);
        Ok(root)
    }

    /// Container-aware access to the child collection. `None` for leaf
    /// panels.
    pub fn container(&self) -> Option<ContainerController<'_>> {
        match self.kind {
            PanelKind::Container => Some(ContainerController { panel: self }),
            PanelKind::Leaf => None,
        }
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

/// Drives the child views of a container panel. Children are indexed in
/// reading order and always reflect the current document contents.
pub struct ContainerController<'a> {
    panel: &'a Panel,
}

impl ContainerController<'_> {
    pub fn len(&self) -> usize {
        self.panel.nodes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.panel.nodes().is_empty()
    }

    /// Render the child at `index`, resolved through the panel's factory.
    pub fn child(&self, index: usize) -> Option<Result<Element>> {
        let node = *self.panel.nodes().get(index)?;
        Some(
            self.panel
                .factory
                .resolve(node, RenderOptions::default(), None)
                .and_then(|view| view.render()),
        )
    }
}

fn panel_class(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Leaf => "panel",
        PanelKind::Container => "panel container",
    }
}

fn wrap_child(kind: PanelKind, child: Element) -> Element {
    match kind {
        PanelKind::Leaf => child,
        PanelKind::Container => Element::new("div")
            .with_attr("class", "panel-item")
            .with_child(child),
    }
}

fn render_outline(entries: &[TocEntry]) -> Element {
    let mut list = Element::new("ol").with_attr("class", "toc");
    for entry in entries {
        let mut item = Element::new("li").with_child(
            Element::new("a")
                .with_attr("data-node", &entry.node)
                .with_text(&entry.title),
        );
        if !entry.children.is_empty() {
            item.push(render_outline(&entry.children));
        }
        list.push(item);
    }
    list
}
