//! Renderable element trees and the node-view contract.
//!
//! This core does not touch a real DOM or terminal. Views render into
//! [`Element`], a minimal tree the embedding application translates into its
//! own rendering primitives. Rendering is pure: the same state always
//! produces an equal tree.

mod factory;

pub use factory::{Capabilities, ViewConstructor, ViewFactory, ViewOptions};

use std::fmt;

use crate::document::Node;
use crate::error::Result;

/// A renderable element: tag, attributes, optional text, children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value under the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Find a descendant (depth-first) with the given attribute value.
    pub fn find(&self, attr: &str, value: &str) -> Option<&Element> {
        if self.attr(attr) == Some(value) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(attr, value))
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{pad}<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}={value:?}")?;
        }
        if self.text.is_none() && self.children.is_empty() {
            return writeln!(f, "/>");
        }
        writeln!(f, ">")?;
        if let Some(text) = &self.text {
            writeln!(f, "{pad}  {text}")?;
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        writeln!(f, "{pad}</{}>", self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

/// Options passed to a node view at construction.
///
/// `header` and `zoom` are injected by the view factory when the resolved
/// entry has the matching capability and the factory enables the gate; see
/// [`ViewFactory::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub header: bool,
    pub zoom: bool,
}

/// A concrete view over a single document node.
pub trait NodeView {
    /// Render this view to an element tree.
    fn render(&self) -> Result<Element>;
}

/// Baseline view for flowing content: one element per node, no chrome.
pub struct TextView {
    node: Node,
}

impl TextView {
    /// Constructor with the [`ViewConstructor`] shape, suitable for
    /// registering directly.
    pub fn create(
        node: &Node,
        _factory: &ViewFactory,
        _options: RenderOptions,
    ) -> Result<Box<dyn NodeView>> {
        Ok(Box::new(Self { node: node.clone() }))
    }
}

impl NodeView for TextView {
    fn render(&self) -> Result<Element> {
        Ok(Element::new("div")
            .with_attr("class", &self.node.kind)
            .with_attr("data-node", &self.node.id)
            .with_text(&self.node.content))
    }
}

/// View for auxiliary resources (citations, figures, supplementary files).
///
/// Renders an optional header bar and advertises zoomability when the
/// factory injected the corresponding options.
pub struct ResourceView {
    node: Node,
    options: RenderOptions,
}

impl ResourceView {
    pub fn create(
        node: &Node,
        _factory: &ViewFactory,
        options: RenderOptions,
    ) -> Result<Box<dyn NodeView>> {
        Ok(Box::new(Self {
            node: node.clone(),
            options,
        }))
    }
}

impl NodeView for ResourceView {
    fn render(&self) -> Result<Element> {
        let mut root = Element::new("section")
            .with_attr("class", format!("resource {}", self.node.kind))
            .with_attr("data-node", &self.node.id);
        if self.options.zoom {
            root.set_attr("data-zoom", "true");
        }
        if self.options.header {
            root.push(
                Element::new("header")
                    .with_attr("class", "resource-header")
                    .with_text(&self.node.id),
            );
        }
        root.push(
            Element::new("div")
                .with_attr("class", "resource-body")
                .with_text(&self.node.content),
        );
        Ok(root)
    }
}
