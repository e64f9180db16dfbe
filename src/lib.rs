//! ontoview: terminal browser for ontology class trees.
//!
//! The engine lives in [`ontoview_core`]; the interactive front end in
//! `ontoview_tui`. This crate holds the binary plus the headless renderer so
//! integration tests can drive it without a terminal.
//!
//! # Architecture
//!
//! ```text
//! SnapshotService ──► TreeSession ──► TUI (ratatui)
//!                          │
//!                          └──► headless outline (stdout)
//! ```

pub mod headless;
