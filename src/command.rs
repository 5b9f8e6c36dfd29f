//! Workflow command registration.
//!
//! Commands are the glue between matched routes and the reader controller:
//! the router extracts parameters, the bound command turns them into a
//! navigation-state update. Only the registration contract lives here; the
//! one built-in command, [`open_reader`], covers the standard route table.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::reader::ReaderController;
use crate::route::RouteMatch;
use crate::state::NavigationState;

/// A command handler: applies a route match to the controller.
pub type CommandFn = Box<dyn Fn(&mut ReaderController, &RouteMatch) -> Result<()>>;

/// Registry of command names to handlers.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandFn>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in `open-reader` command.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::route::OPEN_READER, open_reader);
        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&mut ReaderController, &RouteMatch) -> Result<()> + 'static,
    ) {
        self.commands.insert(name.into(), Box::new(handler));
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Invoke the named command, failing with [`Error::UnknownCommand`] if
    /// it was never registered.
    pub fn dispatch(
        &self,
        name: &str,
        controller: &mut ReaderController,
        matched: &RouteMatch,
    ) -> Result<()> {
        let handler = self
            .commands
            .get(name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
        debug!("dispatch command {:?} for route {:?}", name, matched.name);
        handler(controller, matched)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CommandRegistry")
            .field("commands", &names)
            .finish()
    }
}

/// Built-in command: translate route parameters into a navigation state.
///
/// Missing parameters leave the corresponding depth unset, so the same
/// command serves every row of the table, from the root location down to
/// `:context/:node/:resource/:fullscreen`.
pub fn open_reader(controller: &mut ReaderController, matched: &RouteMatch) -> Result<()> {
    let mut state = NavigationState::initial();
    if let Some(context) = matched.param("context") {
        state.context = Some(context.to_string());
    }
    state.node = matched.param("node").map(str::to_string);
    state.resource = matched.param("resource").map(str::to_string);
    state.fullscreen = matches!(matched.param("fullscreen"), Some("true") | Some("1"));
    controller.navigate(state)
}
