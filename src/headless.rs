//! Headless mode: load a snapshot, apply a search term, print the outline.

use anyhow::Context;
use ontoview_core::{render::outline, OntologyService, SnapshotService, TreeEvent, TreeSession};
use std::path::Path;

/// Options for a single headless render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub search: Option<String>,
    pub expand_all: bool,
}

/// Render the visible class tree of the snapshot at `path` as a text outline.
///
/// The session goes through the same events the TUI produces: the forest
/// arrives, then the search term, then an optional expand-all.
pub fn render_outline(path: &Path, opts: &HeadlessOptions) -> anyhow::Result<String> {
    let mut service = SnapshotService::new();
    let snapshot = service
        .load_ontology(path)
        .with_context(|| format!("loading {}", path.display()))?;

    let mut session = TreeSession::default();
    session.handle(TreeEvent::ForestReplaced(snapshot.classes));
    if let Some(term) = &opts.search {
        session.handle(TreeEvent::SearchTermChanged(term.clone()));
    }
    if opts.expand_all {
        session.expand_all();
    }

    tracing::info!(
        path = %path.display(),
        term = session.term(),
        expanded = session.expansion().len(),
        "headless: outline rendered"
    );
    Ok(outline(&session.visible_tree()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn snapshot_file(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    const ZOO: &str = r#"{"classes":[{"name":"Animal","children":[{"name":"Cat"},{"name":"Dog"}]},{"name":"Plant"}]}"#;

    #[test]
    fn collapsed_without_search() {
        let f = snapshot_file(ZOO);
        let out = render_outline(f.path(), &HeadlessOptions::default()).unwrap();
        assert_eq!(out, "+ Animal\n  Plant\n");
    }

    #[test]
    fn search_expands_to_match() {
        let f = snapshot_file(ZOO);
        let opts = HeadlessOptions {
            search: Some("dog".into()),
            expand_all: false,
        };
        let out = render_outline(f.path(), &opts).unwrap();
        assert_eq!(out, "- Animal\n    *Dog*\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = render_outline(Path::new("/nonexistent/zoo.json"), &HeadlessOptions::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("loading /nonexistent/zoo.json"));
    }
}
