//! Property tests for the navigation-state invariant.
//!
//! No sequence of core operations may ever leave the controller in a state
//! where a resource is set without its node, or a node without its context.

use std::rc::Rc;

use proptest::prelude::*;

use lectern::{Document, NavigationState, Node, ReaderController, ReaderOptions};

#[derive(Debug, Clone)]
enum Op {
    SwitchContext(String),
    Navigate {
        context: Option<String>,
        node: Option<String>,
        resource: Option<String>,
        fullscreen: bool,
    },
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ident().prop_map(Op::SwitchContext),
        (
            proptest::option::of(ident()),
            proptest::option::of(ident()),
            proptest::option::of(ident()),
            any::<bool>(),
        )
            .prop_map(|(context, node, resource, fullscreen)| Op::Navigate {
                context,
                node,
                resource,
                fullscreen,
            }),
    ]
}

fn controller() -> ReaderController {
    let mut doc = Document::new();
    doc.add_node(Node::new("intro", "paragraph"));
    ReaderController::new(
        Rc::new(doc),
        NavigationState::initial(),
        ReaderOptions::default(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn invariant_holds_after_any_operation_sequence(ops in proptest::collection::vec(op_strategy(), 0..16)) {
        let mut reader = controller();
        for op in ops {
            match op {
                Op::SwitchContext(context) => reader.switch_context(&context),
                Op::Navigate { context, node, resource, fullscreen } => {
                    // Invalid states are rejected; either way the resulting
                    // state must satisfy the invariant.
                    let _ = reader.navigate(NavigationState {
                        context,
                        node,
                        resource,
                        fullscreen,
                    });
                }
            }
            let state = reader.state();
            prop_assert!(state.validate().is_ok());
            prop_assert!(state.resource.is_none() || state.node.is_some());
            prop_assert!(state.node.is_none() || state.context.is_some());
        }
    }

    #[test]
    fn switch_context_always_clears_deeper_fields(
        context in ident(),
        node in ident(),
        resource in ident(),
    ) {
        let mut reader = controller();
        reader.navigate(
            NavigationState::at_context("chapter")
                .with_node(node)
                .with_resource(resource)
                .with_fullscreen(true),
        ).unwrap();

        reader.switch_context(&context);

        let state = reader.state();
        prop_assert_eq!(state.context.as_deref(), Some(context.as_str()));
        prop_assert_eq!(&state.node, &None::<String>);
        prop_assert_eq!(&state.resource, &None::<String>);
        prop_assert!(!state.fullscreen);
    }

    #[test]
    fn rejected_navigation_never_corrupts_state(
        node in proptest::option::of(ident()),
        resource in proptest::option::of(ident()),
    ) {
        let mut reader = controller();
        let before = reader.state().clone();

        let candidate = NavigationState {
            context: None,
            node,
            resource,
            fullscreen: false,
        };
        if reader.navigate(candidate).is_err() {
            prop_assert_eq!(reader.state(), &before);
        }
        prop_assert!(reader.state().validate().is_ok());
    }
}
