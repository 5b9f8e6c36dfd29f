//! Navigation state: where in the document the reader currently is.
//!
//! The state forms a strict depth hierarchy: a `resource` can only be
//! addressed through its containing `node`, and a `node` only through its
//! containing `context`. Every core operation preserves that invariant;
//! caller-assembled states are checked with [`NavigationState::validate`].

use crate::error::{Error, Result};

/// Identifier of the default context (the table of contents).
pub const DEFAULT_CONTEXT: &str = "toc";

/// Normalized navigation state derived from a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Current top-level document section, if any.
    pub context: Option<String>,
    /// Addressed node within the context.
    pub node: Option<String>,
    /// Auxiliary resource attached to the node.
    pub resource: Option<String>,
    /// Whether the resource renders in exclusive full-screen mode.
    pub fullscreen: bool,
}

/// The three practical regions of the navigation state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// No node selected; a context panel (usually the toc) is shown.
    Context,
    /// A node is selected; the content panel is focused on it.
    Node,
    /// A resource is additionally selected and shown on top of the content.
    Resource,
}

impl NavigationState {
    /// The state a fresh reader starts in: default context, nothing deeper.
    pub fn initial() -> Self {
        Self {
            context: Some(DEFAULT_CONTEXT.to_string()),
            node: None,
            resource: None,
            fullscreen: false,
        }
    }

    /// A context-only state.
    pub fn at_context(context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            node: None,
            resource: None,
            fullscreen: false,
        }
    }

    /// Deepen this state to a node within the current context.
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Deepen this state to a resource attached to the current node.
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Classify the state by navigation depth.
    pub fn region(&self) -> Region {
        if self.resource.is_some() {
            Region::Resource
        } else if self.node.is_some() {
            Region::Node
        } else {
            Region::Context
        }
    }

    /// Check the depth invariant: `resource` implies `node`, `node` implies
    /// `context`.
    pub fn validate(&self) -> Result<()> {
        if self.resource.is_some() && self.node.is_none() {
            return Err(Error::InvalidNavigationState(
                "resource set without node".to_string(),
            ));
        }
        if self.node.is_some() && self.context.is_none() {
            return Err(Error::InvalidNavigationState(
                "node set without context".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::initial()
    }
}
