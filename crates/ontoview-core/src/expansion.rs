//! Expansion state for the class tree.
//!
//! [`ExpansionStore`] is the set of class names whose children are currently
//! shown. It is written from two places only: user toggles and
//! [`sync_ancestors`], which runs once per search-term change and opens every
//! ancestor of a match. Synchronization is additive; nothing here ever
//! collapses a node on its own.

use crate::filter::{AnnotatedForest, AnnotatedNode};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionStore {
    expanded: HashSet<String>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `name` between expanded and collapsed. Returns the new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.expanded.remove(name) {
            false
        } else {
            self.expanded.insert(name.to_string());
            true
        }
    }

    /// Mark `name` expanded. Returns `true` if it was not already.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.expanded.contains(name) {
            return false;
        }
        self.expanded.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// Forget every expansion. Only forest replacement should call this.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn is_superset(&self, other: &ExpansionStore) -> bool {
        self.expanded.is_superset(&other.expanded)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Synchronizer
// ---------------------------------------------------------------------------

/// Expand every node on the path to a match in `annotated`.
///
/// A node is added when it has at least one filtered child; the walk only
/// descends through filtered children, so hidden branches are never opened.
/// Returns how many names were newly added.
pub fn sync_ancestors(annotated: &AnnotatedForest, store: &mut ExpansionStore) -> usize {
    expand_parents(&annotated.roots, store)
}

fn expand_parents(nodes: &[AnnotatedNode], store: &mut ExpansionStore) -> usize {
    let mut added = 0;
    for node in nodes {
        if !node.filtered_children.is_empty() {
            if store.insert(&node.name) {
                added += 1;
            }
            added += expand_parents(&node.filtered_children, store);
        }
    }
    added
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::types::{ClassNode, Forest};
    use pretty_assertions::assert_eq;

    fn abcd() -> Forest {
        Forest::new(vec![ClassNode::new("A").with_children(vec![
            ClassNode::new("B"),
            ClassNode::new("C").with_children(vec![ClassNode::new("D")]),
        ])])
    }

    #[test]
    fn toggle_flips_membership() {
        let mut store = ExpansionStore::new();
        assert!(store.toggle("A"));
        assert!(store.contains("A"));
        assert!(!store.toggle("A"));
        assert!(!store.contains("A"));
    }

    #[test]
    fn reset_empties_store() {
        let mut store: ExpansionStore = ["A", "B"].into_iter().collect();
        store.reset();
        assert!(store.is_empty());
    }

    #[test]
    fn sync_expands_ancestors_of_match() {
        let mut store = ExpansionStore::new();
        let added = sync_ancestors(&filter(&abcd(), "d"), &mut store);
        assert_eq!(added, 2);
        let expected: ExpansionStore = ["A", "C"].into_iter().collect();
        assert_eq!(store, expected);
    }

    #[test]
    fn sync_is_idempotent() {
        let annotated = filter(&abcd(), "d");
        let mut store = ExpansionStore::new();
        sync_ancestors(&annotated, &mut store);
        let before = store.clone();
        assert_eq!(sync_ancestors(&annotated, &mut store), 0);
        assert_eq!(store, before);
    }

    #[test]
    fn sync_never_removes_entries() {
        let mut store: ExpansionStore = ["B", "unrelated"].into_iter().collect();
        sync_ancestors(&filter(&abcd(), "d"), &mut store);
        for name in ["A", "B", "C", "unrelated"] {
            assert!(store.contains(name), "{name} missing after sync");
        }
    }

    #[test]
    fn sync_does_not_expand_matching_leaf() {
        let mut store = ExpansionStore::new();
        sync_ancestors(&filter(&abcd(), "b"), &mut store);
        assert!(store.contains("A"));
        assert!(!store.contains("B"));
        assert!(!store.contains("C"));
    }
}
