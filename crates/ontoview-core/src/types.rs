//! Core types for ontoview-core.
//!
//! This module defines the data the Ontology Service hands us: the class
//! [`Forest`] built from [`ClassNode`] values, and the full
//! [`OntologySnapshot`] returned when an ontology is loaded. All of it is
//! plain data; behaviour lives in the filter, expansion, and render layers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Class tree
// ---------------------------------------------------------------------------

/// One ontology class and its subclasses.
///
/// `name` doubles as the display label and as the key for expansion state.
/// `children` is in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<ClassNode>,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ClassNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Ordered sequence of root classes.
///
/// A forest is a snapshot: whenever the service reports new classes the whole
/// value is replaced, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    pub roots: Vec<ClassNode>,
}

impl Forest {
    pub fn new(roots: Vec<ClassNode>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every class name in pre-order. A class listed under several parents
    /// is reported once, at its first position.
    pub fn class_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        collect_names(&self.roots, &mut seen, &mut out);
        out
    }

    pub fn contains(&self, name: &str) -> bool {
        contains_name(&self.roots, name)
    }

    /// Number of distinct class names (`classes_count` on the wire).
    pub fn len_unique(&self) -> usize {
        self.class_names().len()
    }

    /// First occurrence of `name` in pre-order.
    pub fn find(&self, name: &str) -> Option<&ClassNode> {
        find_node(&self.roots, name)
    }

    /// Names of every class that lists `name` as a direct child, in
    /// pre-order. Empty for roots and unknown names.
    pub fn parents_of(&self, name: &str) -> Vec<&str> {
        let mut out = Vec::new();
        collect_parents(&self.roots, name, &mut out);
        out
    }
}

impl From<Vec<ClassNode>> for Forest {
    fn from(roots: Vec<ClassNode>) -> Self {
        Self { roots }
    }
}

fn collect_names<'a>(nodes: &'a [ClassNode], seen: &mut HashSet<&'a str>, out: &mut Vec<&'a str>) {
    for node in nodes {
        if seen.insert(node.name.as_str()) {
            out.push(node.name.as_str());
        }
        collect_names(&node.children, seen, out);
    }
}

fn find_node<'a>(nodes: &'a [ClassNode], name: &str) -> Option<&'a ClassNode> {
    nodes.iter().find_map(|n| {
        if n.name == name {
            Some(n)
        } else {
            find_node(&n.children, name)
        }
    })
}

fn collect_parents<'a>(nodes: &'a [ClassNode], name: &str, out: &mut Vec<&'a str>) {
    for node in nodes {
        if node.children.iter().any(|c| c.name == name) && !out.contains(&node.name.as_str()) {
            out.push(node.name.as_str());
        }
        collect_parents(&node.children, name, out);
    }
}

fn contains_name(nodes: &[ClassNode], name: &str) -> bool {
    nodes
        .iter()
        .any(|n| n.name == name || contains_name(&n.children, name))
}

// ---------------------------------------------------------------------------
// Ontology snapshot
// ---------------------------------------------------------------------------

/// A named ontology entity other than a class (individual or property).
///
/// Only `name` and `label` are interpreted; every other field the service
/// sends is kept verbatim in `extra` so a snapshot survives a round trip
/// through [`crate::service::SnapshotService::export_ontology`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Label when present, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Everything `load_ontology` returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologySnapshot {
    #[serde(default)]
    pub classes: Forest,
    #[serde(default)]
    pub classes_count: usize,
    #[serde(default)]
    pub individuals: Vec<NamedEntity>,
    #[serde(default)]
    pub object_properties: Vec<NamedEntity>,
    #[serde(default)]
    pub data_properties: Vec<NamedEntity>,
    #[serde(default)]
    pub annotation_properties: Vec<NamedEntity>,
    #[serde(default)]
    pub datatypes: Vec<String>,
}

/// Partial slice returned by `create_class`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassesUpdate {
    pub classes: Forest,
    pub classes_count: usize,
}

impl OntologySnapshot {
    /// Merge a class update into this snapshot, leaving the other sections
    /// untouched.
    pub fn apply_classes(&mut self, update: ClassesUpdate) {
        self.classes = update.classes;
        self.classes_count = update.classes_count;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
