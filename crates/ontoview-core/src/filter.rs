//! Filter engine: prunes a class [`Forest`] down to the branches matching a
//! search term.
//!
//! [`filter`] is a pure function. It never looks at expansion state and
//! returns equal output for equal input, so it can be recomputed on every
//! term or forest change without caching.
//!
//! # Matching
//!
//! A name matches when it contains the term as a substring after both are
//! lowercased. The term is never compiled into a pattern, so characters such
//! as `*`, `(` or `[` are matched literally.

use crate::types::{ClassNode, Forest};

// ---------------------------------------------------------------------------
// Annotated output
// ---------------------------------------------------------------------------

/// A class node decorated with the match information for one filter pass.
///
/// When the term is empty `filtered_children` holds every raw child; otherwise
/// it only holds children that are themselves shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedNode {
    pub name: String,
    pub is_self_match: bool,
    pub should_show: bool,
    pub filtered_children: Vec<AnnotatedNode>,
}

impl AnnotatedNode {
    fn to_class_node(&self) -> ClassNode {
        ClassNode {
            name: self.name.clone(),
            children: self
                .filtered_children
                .iter()
                .map(AnnotatedNode::to_class_node)
                .collect(),
        }
    }
}

/// Result of one [`filter`] pass: the visible roots in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedForest {
    pub roots: Vec<AnnotatedNode>,
}

impl AnnotatedForest {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Drop the annotations, keeping only the visible structure.
    pub fn to_forest(&self) -> Forest {
        Forest::new(self.roots.iter().map(AnnotatedNode::to_class_node).collect())
    }

    /// Number of visible nodes whose own name matched.
    pub fn match_count(&self) -> usize {
        fn count(nodes: &[AnnotatedNode]) -> usize {
            nodes
                .iter()
                .map(|n| usize::from(n.is_self_match) + count(&n.filtered_children))
                .sum()
        }
        count(&self.roots)
    }
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Case-insensitive substring test. The empty term matches every name.
pub fn matches(name: &str, term: &str) -> bool {
    contains_folded(name, &term.to_lowercase())
}

/// `needle` must already be lowercased.
fn contains_folded(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Annotate `forest` for `term`, dropping every branch with no match.
///
/// With an empty term nothing is pruned and every node is marked as shown.
pub fn filter(forest: &Forest, term: &str) -> AnnotatedForest {
    if term.is_empty() {
        return AnnotatedForest {
            roots: forest.roots.iter().map(annotate_unfiltered).collect(),
        };
    }

    let needle = term.to_lowercase();
    AnnotatedForest {
        roots: filter_nodes(&forest.roots, &needle),
    }
}

fn annotate_unfiltered(node: &ClassNode) -> AnnotatedNode {
    AnnotatedNode {
        name: node.name.clone(),
        is_self_match: true,
        should_show: true,
        filtered_children: node.children.iter().map(annotate_unfiltered).collect(),
    }
}

fn filter_nodes(nodes: &[ClassNode], needle: &str) -> Vec<AnnotatedNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, needle))
        .collect()
}

/// Children first, then the node itself: a node survives when it matches or
/// when any child survived.
fn filter_node(node: &ClassNode, needle: &str) -> Option<AnnotatedNode> {
    let filtered_children = filter_nodes(&node.children, needle);
    let is_self_match = contains_folded(&node.name, needle);
    let should_show = is_self_match || !filtered_children.is_empty();

    should_show.then(|| AnnotatedNode {
        name: node.name.clone(),
        is_self_match,
        should_show,
        filtered_children,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
