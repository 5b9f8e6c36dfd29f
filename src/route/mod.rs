//! Route table and location matching.
//!
//! Patterns are slash-separated segments; a `:name` segment captures the
//! corresponding location segment as a named parameter, any other segment
//! must match literally. The empty pattern matches the root location.
//! Matching walks the table top to bottom and the first hit wins, so more
//! specific patterns must be listed before less specific ones.

use log::debug;

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: String,
    pub name: String,
    pub command: String,
}

impl Route {
    pub fn new(
        pattern: impl Into<String>,
        name: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
            command: command.into(),
        }
    }
}

/// A successful match: the route's name, its bound command, and the
/// parameters captured from the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: String,
    pub command: String,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Ordered route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Match a location against the table, first hit wins.
    pub fn match_location(&self, location: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            if let Some(params) = match_pattern(&route.pattern, location) {
                debug!("location {:?} matched route {:?}", location, route.pattern);
                return Some(RouteMatch {
                    name: route.name.clone(),
                    command: route.command.clone(),
                    params,
                });
            }
        }
        None
    }
}

fn match_pattern(pattern: &str, location: &str) -> Option<Vec<(String, String)>> {
    if pattern.is_empty() {
        return location.is_empty().then(Vec::new);
    }
    if location.is_empty() {
        return None;
    }
    let segments: Vec<&str> = pattern.split('/').collect();
    let parts: Vec<&str> = location.split('/').collect();
    if segments.len() != parts.len() {
        return None;
    }
    let mut params = Vec::new();
    for (segment, part) in segments.iter().zip(&parts) {
        if let Some(name) = segment.strip_prefix(':') {
            if part.is_empty() {
                return None;
            }
            params.push((name.to_string(), (*part).to_string()));
        } else if segment != part {
            return None;
        }
    }
    Some(params)
}

/// Name of the single command every default route is bound to.
pub const OPEN_READER: &str = "open-reader";

/// The reader's standard route table, most specific first.
///
/// The `url/:url` row is kept for compatibility with configurations that
/// route remote documents; note it sits below `:context/:node` and is
/// shadowed by it for two-segment locations.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new(
            ":context/:node/:resource/:fullscreen",
            "document-resource",
            OPEN_READER,
        ),
        Route::new(":context/:node/:resource", "document-resource", OPEN_READER),
        Route::new(":context/:node", "document-node", OPEN_READER),
        Route::new(":context", "document-context", OPEN_READER),
        Route::new("url/:url", "document-context", OPEN_READER),
        Route::new("", "document", OPEN_READER),
    ]
}
