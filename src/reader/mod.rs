//! Reader controller: owns the document, the navigation state, and the
//! instantiated panels, and drives the reader view.

mod view;

pub use view::ReaderView;

use std::rc::Rc;

use log::debug;

use crate::document::Document;
use crate::error::Result;
use crate::panel::{Panel, PanelFactory, RESERVED_PANELS};
use crate::state::{DEFAULT_CONTEXT, NavigationState};
use crate::view::{Capabilities, Element, ResourceView, ViewFactory, ViewOptions};

/// Construction options for a [`ReaderController`].
///
/// `resource_factory` resolves the node shown in the resource overlay; when
/// unset, a default factory renders any resource with a header (headers on,
/// zoom opt-in).
#[derive(Debug, Default)]
pub struct ReaderOptions {
    pub panel_factory: PanelFactory,
    pub resource_factory: Option<ViewFactory>,
}

fn default_resource_factory() -> ViewFactory {
    let mut factory = ViewFactory::new(ViewOptions::default());
    factory.register_default(Capabilities::RESOURCE, ResourceView::create);
    factory
}

/// The reader's central controller.
///
/// Panels are built eagerly at construction: the content and toc panels plus
/// every non-reserved registered panel. A panel factory that cannot resolve
/// one of its own declared names is a construction error, not a render-time
/// surprise.
pub struct ReaderController {
    document: Rc<Document>,
    panel_factory: PanelFactory,
    resource_factory: ViewFactory,
    state: NavigationState,
    current_context: String,
    content_panel: Panel,
    toc_panel: Panel,
    extra_panels: Vec<(String, Panel)>,
    view: Option<ReaderView>,
}

impl ReaderController {
    pub fn new(
        document: Rc<Document>,
        state: NavigationState,
        options: ReaderOptions,
    ) -> Result<Self> {
        state.validate()?;
        let factory = options.panel_factory;
        let resource_factory = options
            .resource_factory
            .unwrap_or_else(default_resource_factory);

        let content_panel = factory.create_panel(document.clone(), "content")?;
        let toc_panel = factory.create_panel(document.clone(), "toc")?;
        let mut extra_panels = Vec::new();
        for name in factory.names() {
            if RESERVED_PANELS.contains(&name) {
                continue;
            }
            let panel = factory.create_panel(document.clone(), name)?;
            extra_panels.push((name.to_string(), panel));
        }

        let current_context = state
            .context
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());

        Ok(Self {
            document,
            panel_factory: factory,
            resource_factory,
            state,
            current_context,
            content_panel,
            toc_panel,
            extra_panels,
            view: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The context last selected explicitly, kept across deeper navigation.
    pub fn current_context(&self) -> &str {
        &self.current_context
    }

    pub fn panel_factory(&self) -> &PanelFactory {
        &self.panel_factory
    }

    /// Look up an instantiated panel by name.
    pub fn panel(&self, name: &str) -> Option<&Panel> {
        match name {
            "content" => Some(&self.content_panel),
            "toc" => Some(&self.toc_panel),
            _ => self
                .extra_panels
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, p)| p),
        }
    }

    /// Names of all panels this controller holds.
    pub fn panel_names(&self) -> Vec<&str> {
        let mut names = vec!["content", "toc"];
        names.extend(self.extra_panels.iter().map(|(n, _)| n.as_str()));
        names
    }

    /// Switch to a shallower navigation depth: set the context and
    /// unconditionally discard any node, resource, and fullscreen selection.
    pub fn switch_context(&mut self, context: &str) {
        debug!("switch context {:?} -> {:?}", self.current_context, context);
        self.current_context = context.to_string();
        self.state.context = Some(context.to_string());
        self.state.node = None;
        self.state.resource = None;
        self.state.fullscreen = false;
    }

    /// Apply a route-derived navigation state after validating the depth
    /// invariant.
    pub fn navigate(&mut self, state: NavigationState) -> Result<()> {
        state.validate()?;
        debug!("navigate {:?}", state);
        if let Some(context) = &state.context {
            self.current_context = context.clone();
        }
        self.state = state;
        Ok(())
    }

    /// Lazily construct the reader view; every subsequent call returns the
    /// same instance.
    pub fn create_view(&mut self) -> &ReaderView {
        self.view.get_or_insert_with(ReaderView::new)
    }

    /// Render the current navigation state to an element tree.
    pub fn render(&mut self) -> Result<Element> {
        let view = self.view.get_or_insert_with(ReaderView::new);
        view.render(
            &self.state,
            &self.document,
            &self.content_panel,
            &self.toc_panel,
            &self.extra_panels,
            &self.resource_factory,
        )
    }
}

impl std::fmt::Debug for ReaderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderController")
            .field("state", &self.state)
            .field("panels", &self.panel_names())
            .finish()
    }
}
