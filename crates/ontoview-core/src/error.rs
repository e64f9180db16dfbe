//! Errors raised by the ontology service layer.
//!
//! The tree engine itself cannot fail; everything here comes from loading,
//! editing, or exporting a snapshot.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no ontology loaded")]
    NoOntologyLoaded,

    #[error("class name must not be empty")]
    EmptyClassName,

    #[error("class {0:?} already exists")]
    DuplicateClass(String),

    #[error("parent class {0:?} not found")]
    UnknownParent(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ontology snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
