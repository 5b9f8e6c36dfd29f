//! View factory: resolves a document node to a concrete view.
//!
//! The registry maps node-type tags to constructors. Capability metadata
//! (resource-ness, zoomability) is attached at registration time and queried
//! before construction, so option gating never depends on inspecting a
//! constructed view.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::document::Node;
use crate::error::{Error, Result};

use super::{NodeView, RenderOptions};

/// Capability metadata attached to a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// The view renders an auxiliary resource and may receive a header.
    pub resource: bool,
    /// The view supports zooming; only meaningful on resource views.
    pub zoomable: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        resource: false,
        zoomable: false,
    };
    pub const RESOURCE: Self = Self {
        resource: true,
        zoomable: false,
    };
    pub const ZOOMABLE_RESOURCE: Self = Self {
        resource: true,
        zoomable: true,
    };
}

/// Factory-wide option gates.
///
/// Defaults match the reader's resource panels: headers on, zoom opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub header: bool,
    pub zoom: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            header: true,
            zoom: false,
        }
    }
}

/// Constructor for a concrete node view.
///
/// The factory passes itself to every constructor so a view can resolve
/// views for its own child nodes through the same registry.
pub type ViewConstructor =
    Rc<dyn Fn(&Node, &ViewFactory, RenderOptions) -> Result<Box<dyn NodeView>>>;

#[derive(Clone)]
struct RegistryEntry {
    construct: ViewConstructor,
    caps: Capabilities,
}

/// Registry of node-type tags to view constructors, with an optional
/// default entry for unregistered tags.
#[derive(Clone)]
pub struct ViewFactory {
    registry: HashMap<String, RegistryEntry>,
    fallback: Option<RegistryEntry>,
    options: ViewOptions,
}

impl ViewFactory {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            registry: HashMap::new(),
            fallback: None,
            options,
        }
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Register a constructor for a node-type tag.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        caps: Capabilities,
        construct: impl Fn(&Node, &ViewFactory, RenderOptions) -> Result<Box<dyn NodeView>> + 'static,
    ) {
        self.registry.insert(
            kind.into(),
            RegistryEntry {
                construct: Rc::new(construct),
                caps,
            },
        );
    }

    /// Register the fallback used for tags without their own entry. Without
    /// a fallback, resolving an unregistered tag is an error.
    pub fn register_default(
        &mut self,
        caps: Capabilities,
        construct: impl Fn(&Node, &ViewFactory, RenderOptions) -> Result<Box<dyn NodeView>> + 'static,
    ) {
        self.fallback = Some(RegistryEntry {
            construct: Rc::new(construct),
            caps,
        });
    }

    pub fn has(&self, kind: &str) -> bool {
        self.registry.contains_key(kind)
    }

    /// Registered tags, sorted for deterministic output.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Resolve a node to its concrete view.
    ///
    /// The effective tag is `type_override` if given, else the node's own
    /// kind. An unregistered tag falls back to the default entry when one is
    /// configured, otherwise fails with [`Error::UnknownNodeType`].
    ///
    /// Header/zoom gating: a resource-capable entry gets `header: true` when
    /// the factory enables headers; a zoomable entry additionally gets
    /// `zoom: true` when zoom is enabled. Entries without the resource
    /// capability never receive either option.
    pub fn resolve(
        &self,
        node: &Node,
        options: RenderOptions,
        type_override: Option<&str>,
    ) -> Result<Box<dyn NodeView>> {
        let kind = type_override.unwrap_or(&node.kind);
        let entry = self
            .registry
            .get(kind)
            .or(self.fallback.as_ref())
            .ok_or_else(|| Error::UnknownNodeType(kind.to_string()))?;

        let mut options = options;
        if entry.caps.resource && self.options.header {
            options.header = true;
            if entry.caps.zoomable && self.options.zoom {
                options.zoom = true;
            }
        }
        (entry.construct)(node, self, options)
    }
}

impl fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFactory")
            .field("kinds", &self.kinds())
            .field("fallback", &self.fallback.is_some())
            .field("options", &self.options)
            .finish()
    }
}
