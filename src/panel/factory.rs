//! Panel factory: turns declarative specs into document-bound panels.

use std::rc::Rc;

use log::debug;

use crate::document::Document;
use crate::error::{Error, Result};

use super::{Panel, PanelSpec};

/// Names that are always available and cannot be redefined by caller specs.
pub const RESERVED_PANELS: [&str; 2] = ["content", "toc"];

/// Holds the full set of panel specifications, reserved names first, then
/// accepted caller specs in registration order.
#[derive(Debug)]
pub struct PanelFactory {
    specs: Vec<PanelSpec>,
}

impl PanelFactory {
    /// Build a factory from caller specs.
    ///
    /// `content` and `toc` are pre-registered. A caller spec reusing either
    /// name is skipped silently: reserved panels cannot be overridden, and
    /// the skip is deliberately not an error so configuration lists can be
    /// assembled without knowledge of the built-ins. Duplicate custom names
    /// keep the first registration.
    pub fn new(specs: Vec<PanelSpec>) -> Self {
        let mut registered = vec![PanelSpec::builtin_content(), PanelSpec::builtin_toc()];
        for spec in specs {
            if RESERVED_PANELS.contains(&spec.name()) {
                debug!("ignoring spec for reserved panel {:?}", spec.name());
                continue;
            }
            if registered.iter().any(|s| s.name() == spec.name()) {
                debug!("ignoring duplicate spec for panel {:?}", spec.name());
                continue;
            }
            registered.push(spec);
        }
        Self { specs: registered }
    }

    /// All registered panel names, reserved pair first, then caller specs in
    /// registration order.
    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.name()).collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.specs.iter().any(|s| s.name() == name)
    }

    /// Create a panel bound to `document`. Every call yields a fresh
    /// instance; caching is the caller's concern.
    pub fn create_panel(&self, document: Rc<Document>, name: &str) -> Result<Panel> {
        let spec = self
            .specs
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::UnknownPanel(name.to_string()))?;
        Ok(Panel::from_spec(document, spec))
    }
}

impl Default for PanelFactory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
