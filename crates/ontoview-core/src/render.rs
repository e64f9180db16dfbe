//! Tree renderer: turns an [`AnnotatedForest`] plus the [`ExpansionStore`]
//! into the nested [`RenderNode`] structure a presentation layer paints.
//!
//! Rendering only reads state. User clicks come back out as [`TreeIntent`]
//! values for the session to apply.

use crate::expansion::ExpansionStore;
use crate::filter::{matches, AnnotatedForest, AnnotatedNode};
use std::fmt::Write as _;

/// Something the user asked the tree to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIntent {
    ToggleNode(String),
}

/// One painted row and, when expanded, its painted children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_match_highlighted: bool,
    /// Empty unless `has_children && is_expanded`.
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Intent emitted when the row is clicked. Leaves do nothing.
    pub fn click(&self) -> Option<TreeIntent> {
        self.has_children
            .then(|| TreeIntent::ToggleNode(self.name.clone()))
    }
}

/// Build the render tree for `annotated`.
///
/// `term` drives highlighting only; which children exist was already decided
/// by the filter pass.
pub fn render(annotated: &AnnotatedForest, store: &ExpansionStore, term: &str) -> Vec<RenderNode> {
    render_level(&annotated.roots, store, term, 0)
}

fn render_level(
    nodes: &[AnnotatedNode],
    store: &ExpansionStore,
    term: &str,
    depth: usize,
) -> Vec<RenderNode> {
    nodes
        .iter()
        .map(|node| {
            let has_children = !node.filtered_children.is_empty();
            let is_expanded = store.contains(&node.name);
            let children = if has_children && is_expanded {
                render_level(&node.filtered_children, store, term, depth + 1)
            } else {
                Vec::new()
            };
            RenderNode {
                name: node.name.clone(),
                depth,
                has_children,
                is_expanded,
                is_match_highlighted: !term.is_empty() && matches(&node.name, term),
                children,
            }
        })
        .collect()
}

/// Flatten a render tree into display-order rows.
pub fn flatten(nodes: &[RenderNode]) -> Vec<&RenderNode> {
    let mut out = Vec::new();
    push_rows(nodes, &mut out);
    out
}

fn push_rows<'a>(nodes: &'a [RenderNode], out: &mut Vec<&'a RenderNode>) {
    for node in nodes {
        out.push(node);
        push_rows(&node.children, out);
    }
}

/// Plain-text outline: two spaces per level, `+`/`-` for collapsed/expanded
/// parents, `*` around highlighted names.
pub fn outline(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for row in flatten(nodes) {
        let marker = match (row.has_children, row.is_expanded) {
            (false, _) => ' ',
            (true, true) => '-',
            (true, false) => '+',
        };
        let name = if row.is_match_highlighted {
            format!("*{}*", row.name)
        } else {
            row.name.clone()
        };
        let _ = writeln!(out, "{}{} {}", "  ".repeat(row.depth), marker, name);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
