//! Configuration types for ontoview.
//!
//! [`Config::load`] reads `~/.config/ontoview/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
tree_pane_width_pct = 40
indent_width        = 2
status_timeout_secs = 3
default_export_name = "ontology.json"

[keybindings]
toggle_focus = "Tab"
search_focus = "/"
command      = ":"
help         = "?"
next_tab     = "]"
prev_tab     = "["
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/ontoview/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tree_pane_width_pct")]
    pub tree_pane_width_pct: u16,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default = "default_status_timeout_secs")]
    pub status_timeout_secs: u64,
    #[serde(default = "default_export_name")]
    pub default_export_name: String,
}

fn default_tree_pane_width_pct() -> u16 { 40 }
fn default_indent_width() -> usize { 2 }
fn default_status_timeout_secs() -> u64 { 3 }
fn default_export_name() -> String { "ontology.json".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tree_pane_width_pct: default_tree_pane_width_pct(),
            indent_width: default_indent_width(),
            status_timeout_secs: default_status_timeout_secs(),
            default_export_name: default_export_name(),
        }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_search_focus")]
    pub search_focus: String,
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_next_tab")]
    pub next_tab: String,
    #[serde(default = "default_prev_tab")]
    pub prev_tab: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_search_focus() -> String { "/".to_string() }
fn default_command() -> String { ":".to_string() }
fn default_help() -> String { "?".to_string() }
fn default_next_tab() -> String { "]".to_string() }
fn default_prev_tab() -> String { "[".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            search_focus: default_search_focus(),
            command: default_command(),
            help: default_help(),
            next_tab: default_next_tab(),
            prev_tab: default_prev_tab(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ontoview/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer `path` (if present) and then `ONTOVIEW_<SECTION>__<KEY>`
    /// environment variables over the built-in defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        Self::layered(path, env_source())
    }

    fn layered(path: &std::path::Path, env: config::Environment) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let pct = self.ui.tree_pane_width_pct;
        if !(10..=90).contains(&pct) {
            anyhow::bail!("ui.tree_pane_width_pct must be between 10 and 90, got {pct}");
        }
        if self.ui.indent_width == 0 {
            anyhow::bail!("ui.indent_width must be at least 1");
        }
        if self.ui.default_export_name.trim().is_empty() {
            anyhow::bail!("ui.default_export_name must not be empty");
        }
        Ok(())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `ONTOVIEW_UI__INDENT_WIDTH=4` sets `ui.indent_width`.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("ONTOVIEW")
        .prefix_separator("_")
        .separator("__")
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ontoview")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
