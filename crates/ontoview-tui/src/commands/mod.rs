//! `:` commands: parsing and execution against the application state.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `load <path>` | Load an ontology snapshot |
//! | `class <name> [parent …]` | Create a class under the given parents (quote names with spaces) |
//! | `export [file]` | Export the current ontology |
//! | `expand` | Expand every class with visible children |

use crate::{app::AppState, theme::Theme};
use ontoview_core::OntologyService;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Command words offered by Tab completion.
pub const COMMAND_NAMES: &[&str] = &[
    "class", "expand", "export", "help", "load", "quit", "theme",
];

/// Theme names `:theme` accepts.
pub const THEME_NAMES: &[&str] = &["default", "gruvbox"];

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Load(PathBuf),
    CreateClass { name: String, parents: Vec<String> },
    Export(Option<String>),
    ExpandAll,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "expand" => Ok(Command::ExpandAll),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "load" => {
                if rest.is_empty() {
                    Err("usage: load <path>".to_string())
                } else {
                    Ok(Command::Load(PathBuf::from(rest)))
                }
            }
            "class" => {
                let mut args = shlex::split(rest)
                    .ok_or_else(|| "class: unterminated quote".to_string())?
                    .into_iter();
                match args.next() {
                    Some(name) => Ok(Command::CreateClass {
                        name,
                        parents: args.collect(),
                    }),
                    None => Err("usage: class <name> [parent ...]".to_string()),
                }
            }
            "export" => Ok(Command::Export((!rest.is_empty()).then(|| rest.to_string()))),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => match Theme::by_name(&name) {
            Some(theme) => s.theme = theme,
            None => s.set_status_error(format!("unknown theme: {name}")),
        },
        Command::Load(path) => match s.service.load_ontology(&path) {
            Ok(snapshot) => {
                let count = snapshot.classes_count;
                s.tree.replace_forest(snapshot.classes.clone());
                s.snapshot = snapshot;
                s.entities.cursor = 0;
                s.set_status_info(format!("loaded {} ({count} classes)", path.display()));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "load failed");
                s.set_status_error(e.to_string());
            }
        },
        Command::CreateClass { name, parents } => match s.service.create_class(&name, &parents) {
            Ok(update) => {
                s.tree.replace_forest(update.classes.clone());
                s.snapshot.apply_classes(update);
                s.set_status_info(format!("class {name} created"));
            }
            Err(e) => {
                tracing::warn!(class = %name, error = %e, "create class failed");
                s.set_status_error(e.to_string());
            }
        },
        Command::Export(file) => {
            let file = file.unwrap_or_else(|| s.config.ui.default_export_name.clone());
            match s.service.export_ontology(&file) {
                Ok(path) => s.set_status_info(format!("exported to {}", path.display())),
                Err(e) => {
                    tracing::warn!(file = %file, error = %e, "export failed");
                    s.set_status_error(e.to_string());
                }
            }
        }
        Command::ExpandAll => {
            s.tree.session.expand_all();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
