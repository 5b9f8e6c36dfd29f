//! Application shell: wires routes, panels, and commands into a reader.
//!
//! This is orchestration, not core logic, but the composition contract is
//! how a reader is meant to be configured: declarative config in, a running
//! controller out.

use std::rc::Rc;

use crate::command::CommandRegistry;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::import::Importer;
use crate::panel::{PanelFactory, PanelSpec};
use crate::reader::{ReaderController, ReaderOptions};
use crate::route::{Route, Router, default_routes};
use crate::state::NavigationState;
use crate::view::{Element, ViewFactory};

/// Declarative configuration for a [`Shell`].
///
/// `resource_factory` overrides how the resource overlay resolves its node;
/// leave it `None` for the built-in header-on rendering.
#[derive(Debug)]
pub struct ShellConfig {
    pub routes: Vec<Route>,
    pub panels: Vec<PanelSpec>,
    pub commands: CommandRegistry,
    pub resource_factory: Option<ViewFactory>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            routes: default_routes(),
            panels: Vec::new(),
            commands: CommandRegistry::with_defaults(),
            resource_factory: None,
        }
    }
}

/// Top-level application object: a router, a command registry, and the
/// reader controller they drive.
#[derive(Debug)]
pub struct Shell {
    router: Router,
    commands: CommandRegistry,
    controller: ReaderController,
}

impl Shell {
    pub fn new(document: Document, config: ShellConfig) -> Result<Self> {
        let panel_factory = PanelFactory::new(config.panels);
        let controller = ReaderController::new(
            Rc::new(document),
            NavigationState::initial(),
            ReaderOptions {
                panel_factory,
                resource_factory: config.resource_factory,
            },
        )?;
        Ok(Self {
            router: Router::new(config.routes),
            commands: config.commands,
            controller,
        })
    }

    /// Import a document through a converter, then build the shell.
    pub fn from_importer(
        importer: &dyn Importer,
        data: &[u8],
        config: ShellConfig,
    ) -> Result<Self> {
        let document = importer.import(data)?;
        Self::new(document, config)
    }

    pub fn controller(&self) -> &ReaderController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ReaderController {
        &mut self.controller
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Drive a route change end to end: match the location, invoke the
    /// bound command, render the resulting state.
    pub fn open(&mut self, location: &str) -> Result<Element> {
        let matched = self
            .router
            .match_location(location)
            .ok_or_else(|| Error::NoRoute(location.to_string()))?;
        self.commands
            .dispatch(&matched.command, &mut self.controller, &matched)?;
        self.render()
    }

    /// Render the controller's current state.
    pub fn render(&mut self) -> Result<Element> {
        self.controller.render()
    }
}
