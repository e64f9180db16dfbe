//! Ontology service boundary.
//!
//! The tree engine never talks to the outside world; front ends call an
//! [`OntologyService`] and feed the returned [`Forest`] back into the session
//! as a replacement event. [`SnapshotService`] is the bundled implementation,
//! working on a JSON snapshot file in the same shape the remote service
//! returns.

use crate::error::ServiceError;
use crate::types::{ClassNode, ClassesUpdate, OntologySnapshot};
use std::path::{Path, PathBuf};

/// Operations the class-tree front end needs from an ontology backend.
pub trait OntologyService {
    /// Load a whole ontology, replacing whatever was loaded before.
    fn load_ontology(&mut self, path: &Path) -> Result<OntologySnapshot, ServiceError>;

    /// Create `name` under each of `parents` (a root class when empty) and
    /// return the updated class forest.
    fn create_class(&mut self, name: &str, parents: &[String])
        -> Result<ClassesUpdate, ServiceError>;

    /// Persist the current ontology. Returns the path written.
    fn export_ontology(&self, filename: &str) -> Result<PathBuf, ServiceError>;
}

// ---------------------------------------------------------------------------
// SnapshotService
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SnapshotService {
    snapshot: Option<OntologySnapshot>,
}

impl SnapshotService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an in-memory snapshot instead of a file.
    pub fn with_snapshot(snapshot: OntologySnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn snapshot(&self) -> Option<&OntologySnapshot> {
        self.snapshot.as_ref()
    }
}

impl OntologyService for SnapshotService {
    fn load_ontology(&mut self, path: &Path) -> Result<OntologySnapshot, ServiceError> {
        let src = std::fs::read_to_string(path).map_err(|source| ServiceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut snapshot: OntologySnapshot = serde_json::from_str(&src)?;
        if snapshot.classes_count == 0 {
            snapshot.classes_count = snapshot.classes.len_unique();
        }
        tracing::info!(
            path = %path.display(),
            classes = snapshot.classes_count,
            individuals = snapshot.individuals.len(),
            "service: ontology loaded"
        );
        self.snapshot = Some(snapshot.clone());
        Ok(snapshot)
    }

    fn create_class(
        &mut self,
        name: &str,
        parents: &[String],
    ) -> Result<ClassesUpdate, ServiceError> {
        let snapshot = self.snapshot.as_mut().ok_or(ServiceError::NoOntologyLoaded)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::EmptyClassName);
        }
        if snapshot.classes.contains(name) {
            return Err(ServiceError::DuplicateClass(name.to_string()));
        }
        if let Some(missing) = parents.iter().find(|p| !snapshot.classes.contains(p)) {
            return Err(ServiceError::UnknownParent(missing.clone()));
        }

        if parents.is_empty() {
            snapshot.classes.roots.push(ClassNode::new(name));
        } else {
            for parent in parents {
                attach_under(&mut snapshot.classes.roots, parent, name);
            }
        }
        snapshot.classes_count = snapshot.classes.len_unique();

        tracing::info!(class = %name, parents = ?parents, "service: class created");
        Ok(ClassesUpdate {
            classes: snapshot.classes.clone(),
            classes_count: snapshot.classes_count,
        })
    }

    fn export_ontology(&self, filename: &str) -> Result<PathBuf, ServiceError> {
        let snapshot = self.snapshot.as_ref().ok_or(ServiceError::NoOntologyLoaded)?;

        let mut path = PathBuf::from(filename);
        if path.extension().is_none() {
            path.set_extension("json");
        }
        let body = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&path, body).map_err(|source| ServiceError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "service: ontology exported");
        Ok(path)
    }
}

/// Append `child` under every node named `parent`, keeping each affected
/// sibling list sorted by name.
fn attach_under(nodes: &mut [ClassNode], parent: &str, child: &str) {
    for node in nodes.iter_mut() {
        if node.name == parent && !node.children.iter().any(|c| c.name == child) {
            node.children.push(ClassNode::new(child));
            node.children.sort_by(|a, b| a.name.cmp(&b.name));
        }
        attach_under(&mut node.children, parent, child);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
