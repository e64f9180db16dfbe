//! Static forests and snapshot payloads used across harnesses.

use crate::common::builders::{forest, leaf, node};
use ontoview_core::Forest;

/// `A → [B, C → [D]]`, the canonical small tree.
pub fn abcd() -> Forest {
    forest(vec![node("A", vec![leaf("B"), node("C", vec![leaf("D")])])])
}

/// A multi-parent zoo: `Dog` is listed under both `Mammal` and `Pet`.
pub fn zoo() -> Forest {
    forest(vec![
        node(
            "Animal",
            vec![
                node("Bird", vec![leaf("Parrot"), leaf("Penguin")]),
                node("Mammal", vec![leaf("Cat"), leaf("Dog"), leaf("Whale")]),
            ],
        ),
        node("Pet", vec![leaf("Dog"), leaf("Parrot")]),
        leaf("Plant"),
    ])
}

/// The service payload for [`zoo`], with the non-class sections filled.
pub const ZOO_SNAPSHOT_JSON: &str = r#"{
  "classes": [
    {"name": "Animal", "children": [
      {"name": "Bird", "children": [{"name": "Parrot"}, {"name": "Penguin"}]},
      {"name": "Mammal", "children": [{"name": "Cat"}, {"name": "Dog"}, {"name": "Whale"}]}
    ]},
    {"name": "Pet", "children": [{"name": "Dog"}, {"name": "Parrot"}]},
    {"name": "Plant"}
  ],
  "classes_count": 10,
  "individuals": [{"name": "rex", "label": "Rex", "types": ["Dog"]}],
  "object_properties": [{"name": "eats"}],
  "data_properties": [{"name": "weight"}],
  "annotation_properties": [],
  "datatypes": ["xsd:string", "xsd:decimal"]
}"#;

/// Write [`ZOO_SNAPSHOT_JSON`] to a temp dir and return its path.
pub fn zoo_snapshot_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("zoo.json");
    std::fs::write(&path, ZOO_SNAPSHOT_JSON).expect("write zoo snapshot");
    path
}
