//! Reader view: a pure function from navigation state and panels to an
//! element tree.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::panel::Panel;
use crate::state::{DEFAULT_CONTEXT, NavigationState, Region};
use crate::view::{Element, RenderOptions, ViewFactory};

/// Renders the reader's current state.
///
/// The view holds no navigation state of its own; it is created once per
/// controller and reused across renders. Rendering twice with unchanged
/// inputs yields an equal tree.
#[derive(Debug, Default)]
pub struct ReaderView {
    _private: (),
}

impl ReaderView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Select and render the panel views for `state`.
    ///
    /// Context view shows the panel named by the context (the toc by
    /// default); node view shows the content panel focused on the node;
    /// resource view additionally overlays the resource's view, full-screen
    /// when the flag is set.
    pub fn render(
        &self,
        state: &NavigationState,
        document: &Document,
        content: &Panel,
        toc: &Panel,
        extras: &[(String, Panel)],
        resource_factory: &ViewFactory,
    ) -> Result<Element> {
        state.validate()?;
        let mut root = Element::new("div").with_attr("class", "reader");

        match state.region() {
            Region::Context => {
                let context = state.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
                let panel = self.context_panel(context, content, toc, extras)?;
                root.push(panel.render()?);
            }
            Region::Node => {
                if let Some(node) = &state.node {
                    root.push(content.render_focused(node)?);
                }
            }
            Region::Resource => {
                if let (Some(node), Some(resource)) = (&state.node, &state.resource) {
                    root.push(content.render_focused(node)?);
                    root.push(self.render_resource(state, document, resource_factory, resource)?);
                }
            }
        }
        Ok(root)
    }

    fn context_panel<'a>(
        &self,
        context: &str,
        content: &'a Panel,
        toc: &'a Panel,
        extras: &'a [(String, Panel)],
    ) -> Result<&'a Panel> {
        match context {
            "toc" => Ok(toc),
            "content" => Ok(content),
            _ => extras
                .iter()
                .find(|(name, _)| name == context)
                .map(|(_, panel)| panel)
                .ok_or_else(|| Error::UnknownPanel(context.to_string())),
        }
    }

    fn render_resource(
        &self,
        state: &NavigationState,
        document: &Document,
        factory: &ViewFactory,
        resource: &str,
    ) -> Result<Element> {
        let node = document.require_node(resource)?;
        let view = factory.resolve(node, RenderOptions::default(), None)?;
        let class = if state.fullscreen {
            "resource-fullscreen"
        } else {
            "resource-overlay"
        };
        Ok(Element::new("div")
            .with_attr("class", class)
            .with_child(view.render()?))
    }
}
