//! View factory tests.
//!
//! The interesting behavior is the capability gating: header/zoom options
//! are injected from registration-time metadata and the factory's own
//! gates, never from the caller's options alone.

use lectern::{
    Capabilities, Element, Error, Node, NodeView, RenderOptions, Result, ViewFactory, ViewOptions,
};

/// Test view that reports the options it was constructed with.
struct ProbeView {
    id: String,
    options: RenderOptions,
}

impl NodeView for ProbeView {
    fn render(&self) -> Result<Element> {
        Ok(Element::new("probe")
            .with_attr("data-node", &self.id)
            .with_attr("header", self.options.header.to_string())
            .with_attr("zoom", self.options.zoom.to_string()))
    }
}

fn probe(node: &Node, _factory: &ViewFactory, options: RenderOptions) -> Result<Box<dyn NodeView>> {
    Ok(Box::new(ProbeView {
        id: node.id.clone(),
        options,
    }))
}

fn factory_with(options: ViewOptions) -> ViewFactory {
    let mut factory = ViewFactory::new(options);
    factory.register("paragraph", Capabilities::NONE, probe);
    factory.register("figure", Capabilities::ZOOMABLE_RESOURCE, probe);
    factory.register("citation", Capabilities::RESOURCE, probe);
    factory
}

fn render_options(factory: &ViewFactory, node: &Node) -> (bool, bool) {
    let tree = factory
        .resolve(node, RenderOptions::default(), None)
        .unwrap()
        .render()
        .unwrap();
    (
        tree.attr("header") == Some("true"),
        tree.attr("zoom") == Some("true"),
    )
}

// ============================================================================
// Capability Gating Tests
// ============================================================================

#[test]
fn test_zoomable_resource_gets_header_and_zoom() {
    let factory = factory_with(ViewOptions {
        header: true,
        zoom: true,
    });
    let node = Node::new("fig1", "figure");

    assert_eq!(render_options(&factory, &node), (true, true));
}

#[test]
fn test_zoom_disabled_yields_header_only() {
    let factory = factory_with(ViewOptions {
        header: true,
        zoom: false,
    });
    let node = Node::new("fig1", "figure");

    assert_eq!(render_options(&factory, &node), (true, false));
}

#[test]
fn test_non_zoomable_resource_never_gets_zoom() {
    let factory = factory_with(ViewOptions {
        header: true,
        zoom: true,
    });
    let node = Node::new("cit1", "citation");

    assert_eq!(render_options(&factory, &node), (true, false));
}

#[test]
fn test_non_resource_view_never_gets_header() {
    let factory = factory_with(ViewOptions {
        header: true,
        zoom: true,
    });
    let node = Node::new("p1", "paragraph");

    assert_eq!(render_options(&factory, &node), (false, false));
}

#[test]
fn test_header_disabled_suppresses_zoom_too() {
    // Zoom is gated behind the header capability check; with headers off a
    // zoomable resource receives neither option.
    let factory = factory_with(ViewOptions {
        header: false,
        zoom: true,
    });
    let node = Node::new("fig1", "figure");

    assert_eq!(render_options(&factory, &node), (false, false));
}

#[test]
fn test_default_options_are_header_on_zoom_off() {
    let options = ViewOptions::default();
    assert!(options.header);
    assert!(!options.zoom);
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[test]
fn test_type_override_selects_other_entry() {
    let factory = factory_with(ViewOptions::default());
    // A figure rendered inline as a paragraph: no resource capabilities.
    let node = Node::new("fig1", "figure");

    let tree = factory
        .resolve(&node, RenderOptions::default(), Some("paragraph"))
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(tree.attr("header"), Some("false"));
}

#[test]
fn test_unknown_type_without_fallback_fails() {
    let factory = factory_with(ViewOptions::default());
    let node = Node::new("v1", "video");

    let result = factory.resolve(&node, RenderOptions::default(), None);
    assert!(matches!(result, Err(Error::UnknownNodeType(kind)) if kind == "video"));
}

#[test]
fn test_unknown_type_falls_back_to_default_entry() {
    let mut factory = factory_with(ViewOptions::default());
    factory.register_default(Capabilities::NONE, probe);
    let node = Node::new("v1", "video");

    let tree = factory
        .resolve(&node, RenderOptions::default(), None)
        .unwrap()
        .render()
        .unwrap();
    assert_eq!(tree.attr("data-node"), Some("v1"));
}

#[test]
fn test_constructor_errors_propagate() {
    let mut factory = ViewFactory::new(ViewOptions::default());
    factory.register("broken", Capabilities::NONE, |node, _f, _o| {
        Err(Error::UnknownNode(node.id.clone()))
    });
    let node = Node::new("b1", "broken");

    let result = factory.resolve(&node, RenderOptions::default(), None);
    assert!(matches!(result, Err(Error::UnknownNode(_))));
}

#[test]
fn test_nested_resolution_through_same_factory() {
    // A view that resolves views for its node's attached resources through
    // the factory it was handed.
    struct FigureView {
        children: Vec<Element>,
    }

    impl NodeView for FigureView {
        fn render(&self) -> Result<Element> {
            let mut root = Element::new("figure");
            for child in &self.children {
                root.push(child.clone());
            }
            Ok(root)
        }
    }

    let mut factory = ViewFactory::new(ViewOptions {
        header: true,
        zoom: false,
    });
    factory.register("citation", Capabilities::RESOURCE, probe);
    factory.register(
        "figure",
        Capabilities::ZOOMABLE_RESOURCE,
        |node, f, _options| {
            let children = node
                .resources
                .iter()
                .map(|id| {
                    f.resolve(
                        &Node::new(id.clone(), "citation"),
                        RenderOptions::default(),
                        None,
                    )?
                    .render()
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Box::new(FigureView { children }))
        },
    );

    let node = Node::new("fig1", "figure")
        .with_resource("cit1")
        .with_resource("cit2");
    let tree = factory
        .resolve(&node, RenderOptions::default(), None)
        .unwrap()
        .render()
        .unwrap();

    assert_eq!(tree.children.len(), 2);
    // Nested resolution went through the gated registry: the citation
    // entries picked up headers.
    assert_eq!(tree.children[0].attr("header"), Some("true"));
}
