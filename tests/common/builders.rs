//! Test builders: terse forest constructors and proptest strategies.
//!
//! These are for readability in assertions, not for production use.

use ontoview_core::{ClassNode, Forest, OntologySnapshot};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Forest construction
// ---------------------------------------------------------------------------

/// A leaf class.
pub fn leaf(name: &str) -> ClassNode {
    ClassNode::new(name)
}

/// A class with children.
pub fn node(name: &str, children: Vec<ClassNode>) -> ClassNode {
    ClassNode::new(name).with_children(children)
}

pub fn forest(roots: Vec<ClassNode>) -> Forest {
    Forest::new(roots)
}

/// Wrap a forest into a snapshot with a consistent `classes_count`.
pub fn snapshot_of(classes: Forest) -> OntologySnapshot {
    OntologySnapshot {
        classes_count: classes.len_unique(),
        classes,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Class names drawn from a small alphabet so random terms hit often.
pub fn class_name() -> impl Strategy<Value = String> {
    "[A-Da-d]{1,4}"
}

/// Search terms over the same alphabet, including the empty term.
pub fn search_term() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Da-d]{1,2}"]
}

/// Arbitrary forests up to depth 4. Names may repeat, as they do when the
/// service lists a class under several parents.
pub fn arb_forest() -> impl Strategy<Value = Forest> {
    let leaf = class_name().prop_map(ClassNode::new);
    let tree = leaf.prop_recursive(4, 48, 4, |inner| {
        (class_name(), prop::collection::vec(inner, 0..4))
            .prop_map(|(name, children)| ClassNode::new(name).with_children(children))
    });
    prop::collection::vec(tree, 0..4).prop_map(Forest::new)
}
