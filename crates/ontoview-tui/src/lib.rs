//! ontoview TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use ontoview_core::{config::Config, OntologyService, OntologySnapshot, SnapshotService};
use std::path::Path;

/// Start the TUI, optionally loading a snapshot and seeding the search bar.
///
/// Without a snapshot the app starts empty; `:load <path>` fills it later.
pub fn run(snapshot: Option<&Path>, search: Option<&str>) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        Config::defaults()
    });
    let theme = theme::Theme::load_default();

    let mut service = SnapshotService::new();
    let loaded = match snapshot {
        Some(path) => service.load_ontology(path)?,
        None => OntologySnapshot::default(),
    };

    let mut app = App::new(loaded, Box::new(service), config, theme)?;
    if let Some(term) = search {
        app = app.with_search(term);
    }
    app.run()
}
