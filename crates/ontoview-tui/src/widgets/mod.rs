//! Ratatui widgets for the ontoview TUI.

pub mod class_details;
pub mod class_tree;
pub mod command_bar;
pub mod entity_list;
pub mod help;
pub mod search_bar;
pub mod status_line;
pub mod tab_bar;
