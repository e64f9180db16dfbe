//! Tree session: the state the class-tree view is driven from.
//!
//! A [`TreeSession`] owns the current [`Forest`], the search term, the
//! annotated forest derived from both, and the [`ExpansionStore`]. Every
//! change arrives as one of three events and is applied to completion before
//! the next one:
//!
//! | Event | Effect |
//! |-------|--------|
//! | search term changed | refilter; expand ancestors of matches if the term is non-empty |
//! | node toggled | flip the node in the expansion store |
//! | forest replaced | reset expansion; refilter |
//!
//! [`TreeSession::visible_tree`] renders on demand from whatever the latest
//! state is.

use crate::expansion::{sync_ancestors, ExpansionStore};
use crate::filter::{filter, AnnotatedForest};
use crate::render::{render, RenderNode, TreeIntent};
use crate::types::Forest;

/// A discrete input to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    SearchTermChanged(String),
    NodeToggled(String),
    ForestReplaced(Forest),
}

impl From<TreeIntent> for TreeEvent {
    fn from(intent: TreeIntent) -> Self {
        match intent {
            TreeIntent::ToggleNode(name) => TreeEvent::NodeToggled(name),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeSession {
    forest: Forest,
    term: String,
    annotated: AnnotatedForest,
    expansion: ExpansionStore,
}

impl TreeSession {
    pub fn new(forest: Forest) -> Self {
        let annotated = filter(&forest, "");
        Self {
            forest,
            term: String::new(),
            annotated,
            expansion: ExpansionStore::new(),
        }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn annotated(&self) -> &AnnotatedForest {
        &self.annotated
    }

    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    pub fn handle(&mut self, event: TreeEvent) {
        match event {
            TreeEvent::SearchTermChanged(term) => self.on_search_term_change(&term),
            TreeEvent::NodeToggled(name) => {
                self.on_toggle_node(&name);
            }
            TreeEvent::ForestReplaced(forest) => self.on_forest_replaced(forest),
        }
    }

    /// Apply a batch strictly in order.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = TreeEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    /// Refilter for `term`. Ancestors of matches are expanded once per change;
    /// clearing the term leaves existing expansions alone.
    pub fn on_search_term_change(&mut self, term: &str) {
        if term == self.term {
            return;
        }
        self.term = term.to_string();
        self.annotated = filter(&self.forest, &self.term);

        if self.term.is_empty() {
            tracing::debug!("tree: search cleared");
            return;
        }
        let added = sync_ancestors(&self.annotated, &mut self.expansion);
        tracing::debug!(
            term = %self.term,
            matches = self.annotated.match_count(),
            expanded = added,
            "tree: search term changed"
        );
    }

    /// Flip `name`. Returns the new expanded state, or `None` when the name is
    /// not part of the current forest.
    pub fn on_toggle_node(&mut self, name: &str) -> Option<bool> {
        if !self.forest.contains(name) {
            tracing::debug!(node = %name, "tree: ignoring toggle for unknown class");
            return None;
        }
        let expanded = self.expansion.toggle(name);
        tracing::debug!(node = %name, expanded, "tree: toggle");
        Some(expanded)
    }

    pub fn on_forest_replaced(&mut self, forest: Forest) {
        self.expansion.reset();
        self.forest = forest;
        self.annotated = filter(&self.forest, &self.term);
        tracing::info!(
            roots = self.forest.roots.len(),
            term = %self.term,
            "tree: forest replaced"
        );
    }

    /// Expand every node that currently has visible children.
    pub fn expand_all(&mut self) {
        sync_ancestors(&self.annotated, &mut self.expansion);
    }

    pub fn visible_tree(&self) -> Vec<RenderNode> {
        render(&self.annotated, &self.expansion, &self.term)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
