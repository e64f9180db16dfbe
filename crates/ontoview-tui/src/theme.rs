//! Colour theme for the ontoview TUI.
//!
//! A theme file is TOML with one table per UI element, grouped by section:
//!
//! ```toml
//! [tree.cursor]
//! bg = "dark_gray"
//! bold = true
//! ```
//!
//! Colours use ratatui's own notation (`red`, `light-blue`, `#rrggbb`, or a
//! 0-255 palette index). The built-in themes are embedded with
//! [`include_str!`] and parsed through the `config` crate.

use anyhow::Context;
use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

/// One element's entry in a theme file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    dim: bool,
    italic: bool,
    underlined: bool,
}

impl StyleSpec {
    fn resolve(&self) -> anyhow::Result<Style> {
        let mut style = Style::default();
        if let Some(fg) = &self.fg {
            style = style.fg(parse_color(fg)?);
        }
        if let Some(bg) = &self.bg {
            style = style.bg(parse_color(bg)?);
        }
        let flags = [
            (self.bold, Modifier::BOLD),
            (self.dim, Modifier::DIM),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ];
        Ok(flags
            .into_iter()
            .filter(|(on, _)| *on)
            .fold(style, |s, (_, m)| s.add_modifier(m)))
    }
}

/// `section -> element -> style`, as read from the file.
type ThemeFile = HashMap<String, HashMap<String, StyleSpec>>;

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border style for the currently focused pane.
    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Applied to class names that match the search term.
    pub search_highlight: Style,

    /// Class rows with children.
    pub tree_parent: Style,
    /// Class rows without children, and entity list rows.
    pub tree_leaf: Style,
    pub tree_cursor: Style,

    pub status_info: Style,
    pub status_error: Style,
}

impl Theme {
    /// The embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid")
    }

    /// The embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC).expect("embedded gruvbox theme must be valid")
    }

    /// Resolve a theme by the name typed in `:theme <name>`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from TOML. Every element listed on [`Theme`] must be
    /// present; extra sections are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let file: ThemeFile = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        let style = |section: &str, element: &str| -> anyhow::Result<Style> {
            file.get(section)
                .and_then(|s| s.get(element))
                .with_context(|| format!("theme is missing [{section}.{element}]"))?
                .resolve()
                .with_context(|| format!("in [{section}.{element}]"))
        };

        Ok(Self {
            border_focused: style("borders", "focused")?,
            border_command_bar: style("borders", "command_bar")?,
            border_unfocused: style("borders", "unfocused")?,
            search_highlight: style("search", "highlight")?,
            tree_parent: style("tree", "parent")?,
            tree_leaf: style("tree", "leaf")?,
            tree_cursor: style("tree", "cursor")?,
            status_info: style("status", "info")?,
            status_error: style("status", "error")?,
        })
    }
}

/// Parse a colour with ratatui's notation. Underscores are accepted as word
/// separators (`dark_gray`).
fn parse_color(s: &str) -> anyhow::Result<Color> {
    s.replace('_', "-")
        .parse::<Color>()
        .map_err(|_| anyhow::anyhow!("unknown colour {s:?}"))
}
