//! Snapshot service integration harness.
//!
//! # What this covers
//!
//! - **Load**: the service payload parses, unknown entity fields survive,
//!   `classes_count` is honoured or derived.
//! - **Create class**: root and multi-parent creation, validation failures,
//!   and the session collapse that follows a successful create.
//! - **Export**: the written file loads back to the same snapshot.
//!
//! # What this does NOT cover
//!
//! - The tree engine's filtering laws (see tree_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test service_harness
//! ```

mod common;
use common::*;

use ontoview_core::{
    ClassesUpdate, OntologyService, ServiceError, SnapshotService, TreeSession,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn loaded() -> (tempfile::TempDir, SnapshotService) {
    let dir = tempfile::tempdir().unwrap();
    let path = zoo_snapshot_file(&dir);
    let mut service = SnapshotService::new();
    service.load_ontology(&path).unwrap();
    (dir, service)
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

#[test]
fn load_parses_every_section() {
    let (_dir, service) = loaded();
    let snapshot = service.snapshot().unwrap();

    assert_eq!(snapshot.classes, zoo());
    assert_eq!(snapshot.classes_count, 10);
    assert_eq!(snapshot.individuals[0].display_name(), "Rex");
    assert_eq!(snapshot.individuals[0].extra["types"], serde_json::json!(["Dog"]));
    assert_eq!(snapshot.object_properties.len(), 1);
    assert_eq!(snapshot.datatypes, vec!["xsd:string", "xsd:decimal"]);
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"classes\": [").unwrap();

    let err = SnapshotService::new().load_ontology(&path).unwrap_err();
    assert!(matches!(err, ServiceError::Parse(_)));
}

// ---------------------------------------------------------------------------
// Create class
// ---------------------------------------------------------------------------

#[test]
fn create_under_two_parents_lands_in_both() {
    let (_dir, mut service) = loaded();
    let update = service
        .create_class("Hamster", &["Mammal".into(), "Pet".into()])
        .unwrap();

    assert_eq!(update.classes_count, 11);
    assert_eq!(update.classes.parents_of("Hamster"), vec!["Mammal", "Pet"]);
    let pet = update.classes.find("Pet").unwrap();
    let names: Vec<&str> = pet.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Dog", "Hamster", "Parrot"]);
}

#[test]
fn create_without_parents_appends_root() {
    let (_dir, mut service) = loaded();
    let update = service.create_class("Fungus", &[]).unwrap();
    let roots: Vec<&str> = update.classes.roots.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(roots, vec!["Animal", "Pet", "Plant", "Fungus"]);
}

#[rstest]
#[case("  ", &[], "class name must not be empty")]
#[case("Dog", &[], "class \"Dog\" already exists")]
#[case("Orca", &["Fish"], "parent class \"Fish\" not found")]
fn create_rejects_invalid_input(#[case] name: &str, #[case] parents: &[&str], #[case] msg: &str) {
    let (_dir, mut service) = loaded();
    let parents: Vec<String> = parents.iter().map(|p| p.to_string()).collect();
    let err = service.create_class(name, &parents).unwrap_err();
    assert_eq!(err.to_string(), msg);
    assert_eq!(service.snapshot().unwrap().classes, zoo());
}

#[test]
fn create_before_load_fails() {
    let err = SnapshotService::new().create_class("A", &[]).unwrap_err();
    assert!(matches!(err, ServiceError::NoOntologyLoaded));
}

/// A successful create feeds back as a forest replacement and collapses the
/// tree, even mid-search.
#[test]
fn create_result_collapses_session() {
    let (_dir, mut service) = loaded();
    let mut session = TreeSession::new(service.snapshot().unwrap().classes.clone());
    session.on_search_term_change("dog");
    assert!(!session.expansion().is_empty());

    let ClassesUpdate { classes, .. } = service.create_class("Puppy", &["Dog".into()]).unwrap();
    session.on_forest_replaced(classes);

    assert!(session.expansion().is_empty());
    assert_rows!(session, ["Animal", "Pet"]);
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn export_then_load_round_trips() {
    let (dir, mut service) = loaded();
    service.create_class("Fungus", &[]).unwrap();

    let target = dir.path().join("out");
    let written = service.export_ontology(target.to_str().unwrap()).unwrap();
    assert_eq!(written, dir.path().join("out.json"));

    let reloaded = SnapshotService::new().load_ontology(&written).unwrap();
    assert_eq!(&reloaded, service.snapshot().unwrap());
}
