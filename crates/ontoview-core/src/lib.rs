//! ontoview-core: class-tree search and expansion engine.
//!
//! # Architecture
//!
//! ```text
//! OntologyService ──► Forest ──► filter ──► AnnotatedForest ──► render ──► RenderNode
//!                                              │                  ▲
//!                                              └─► sync_ancestors ─┘
//!                                                   (ExpansionStore)
//! ```
//!
//! [`session::TreeSession`] owns the mutable pieces and is the only thing a
//! front end needs to drive. Everything else is a pure function over its
//! inputs.

pub mod config;
pub mod error;
pub mod expansion;
pub mod filter;
pub mod render;
pub mod service;
pub mod session;
pub mod types;

pub use error::ServiceError;
pub use expansion::ExpansionStore;
pub use filter::{AnnotatedForest, AnnotatedNode};
pub use render::{RenderNode, TreeIntent};
pub use service::{OntologyService, SnapshotService};
pub use session::{TreeEvent, TreeSession};
pub use types::{ClassNode, ClassesUpdate, Forest, NamedEntity, OntologySnapshot};
