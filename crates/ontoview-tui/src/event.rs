//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! Build a [`KeyMap`] from the `[keybindings]` config section once at startup,
//! then call [`KeyMap::to_app_event`] on every [`crossterm::event::Event`] and
//! match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      | Configurable as |
//! |-------------------------|----------------------------|-----------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |                 |
//! | `Tab`                   | `FocusNext`                | `toggle_focus`  |
//! | `/`                     | `SearchFocus`              | `search_focus`  |
//! | `:`                     | `CommandMode`              | `command`       |
//! | `?`                     | `Help`                     | `help`          |
//! | `]`                     | `NextTab`                  | `next_tab`      |
//! | `[`                     | `PrevTab`                  | `prev_tab`      |
//! | `↑` / `k`               | `TreeNav(Up)`              |                 |
//! | `↓` / `j`               | `TreeNav(Down)`            |                 |
//! | `←` / `h`               | `TreeNav(Left)`            |                 |
//! | `→` / `l`               | `TreeNav(Right)`           |                 |
//! | printable char          | `Char(c)`                  |                 |
//! | `Backspace`             | `Backspace`                |                 |
//! | `Enter`                 | `Enter`                    |                 |
//! | terminal resize         | `Resize(w, h)`             |                 |
//!
//! ## Insert mode
//!
//! When a text-input widget (search bar, command bar) is focused, the event
//! loop calls [`KeyMap::to_app_event_insert`] instead. In insert mode every
//! printable character, including the configured shortcuts, is forwarded as
//! `Char`. Arrow keys still produce `TreeNav` for cursor movement, and only
//! `Ctrl+c`, `Escape`, `Enter`, `Tab`, and `Backspace` keep their special
//! bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ontoview_core::config::KeybindingsConfig;

/// Cardinal direction for tree and list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next pane (Tab-cycle).
    FocusNext,
    /// Transfer focus to the search bar.
    SearchFocus,
    /// Open the `:` command line.
    CommandMode,
    /// Toggle the help popup.
    Help,
    /// Switch to the next ontology section tab.
    NextTab,
    /// Switch to the previous ontology section tab.
    PrevTab,
    /// Navigate within the tree or list (or move a text cursor).
    TreeNav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Confirm the active input or click the focused tree node.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (search focus, help popup, command line).
    Escape,
}

// ---------------------------------------------------------------------------
// KeyMap
// ---------------------------------------------------------------------------

/// Resolved configurable bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    toggle_focus: KeyCode,
    search_focus: KeyCode,
    command: KeyCode,
    help: KeyCode,
    next_tab: KeyCode,
    prev_tab: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle_focus: KeyCode::Tab,
            search_focus: KeyCode::Char('/'),
            command: KeyCode::Char(':'),
            help: KeyCode::Char('?'),
            next_tab: KeyCode::Char(']'),
            prev_tab: KeyCode::Char('['),
        }
    }
}

impl KeyMap {
    /// Resolve the `[keybindings]` section. Fails on a binding that is
    /// neither a single character nor a known key name.
    pub fn from_config(cfg: &KeybindingsConfig) -> anyhow::Result<Self> {
        Ok(Self {
            toggle_focus: parse_key(&cfg.toggle_focus)?,
            search_focus: parse_key(&cfg.search_focus)?,
            command: parse_key(&cfg.command)?,
            help: parse_key(&cfg.help)?,
            next_tab: parse_key(&cfg.next_tab)?,
            prev_tab: parse_key(&cfg.prev_tab)?,
        })
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
    ///
    /// Returns `None` for events with no meaning to the application (mouse
    /// events, unbound keys).
    pub fn to_app_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => self.map_key(key),
            _ => None,
        }
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
    pub fn to_app_event_insert(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => map_key_insert(key),
            _ => None,
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<AppEvent> {
        use KeyCode::*;
        use KeyModifiers as Mod;

        // Shifted symbols (`?`, `:`) arrive with SHIFT on some terminals.
        let plain = key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT;

        if plain {
            let configured = [
                (self.toggle_focus, AppEvent::FocusNext),
                (self.search_focus, AppEvent::SearchFocus),
                (self.command, AppEvent::CommandMode),
                (self.help, AppEvent::Help),
                (self.next_tab, AppEvent::NextTab),
                (self.prev_tab, AppEvent::PrevTab),
            ];
            if let Some((_, ev)) = configured.into_iter().find(|(code, _)| *code == key.code) {
                return Some(ev);
            }
        }

        match key.code {
            Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
            Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

            Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::TreeNav(Direction::Up)),
            Down | Char('j') if key.modifiers == Mod::NONE => {
                Some(AppEvent::TreeNav(Direction::Down))
            }
            Left | Char('h') if key.modifiers == Mod::NONE => {
                Some(AppEvent::TreeNav(Direction::Left))
            }
            Right | Char('l') if key.modifiers == Mod::NONE => {
                Some(AppEvent::TreeNav(Direction::Right))
            }

            Char(c) if plain => Some(AppEvent::Char(c)),

            Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
            Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
            Esc => Some(AppEvent::Escape),

            _ => None,
        }
    }
}

/// Key mapping for text-input / insert mode.
fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::TreeNav(Direction::Up)),
        Down => Some(AppEvent::TreeNav(Direction::Down)),
        Left => Some(AppEvent::TreeNav(Direction::Left)),
        Right => Some(AppEvent::TreeNav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

/// Parse a binding string: a single character or one of `Tab`, `Enter`,
/// `Esc`, `Space`, `F1`–`F12`.
fn parse_key(s: &str) -> anyhow::Result<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    match s.to_ascii_lowercase().as_str() {
        "tab" => Ok(KeyCode::Tab),
        "enter" => Ok(KeyCode::Enter),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        f if f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => Ok(KeyCode::F(n)),
            _ => anyhow::bail!("unknown key binding: {s:?}"),
        },
        _ => anyhow::bail!("unknown key binding: {s:?}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_keys() {
        let km = KeyMap::default();
        assert_eq!(km.to_app_event(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(km.to_app_event(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }

    #[test]
    fn default_shortcuts() {
        let km = KeyMap::default();
        assert_eq!(km.to_app_event(press(KeyCode::Tab)), Some(AppEvent::FocusNext));
        assert_eq!(km.to_app_event(press(KeyCode::Char('/'))), Some(AppEvent::SearchFocus));
        assert_eq!(
            km.to_app_event(key(KeyCode::Char(':'), KeyModifiers::SHIFT)),
            Some(AppEvent::CommandMode)
        );
        assert_eq!(
            km.to_app_event(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(AppEvent::Help)
        );
        assert_eq!(km.to_app_event(press(KeyCode::Char(']'))), Some(AppEvent::NextTab));
        assert_eq!(km.to_app_event(press(KeyCode::Char('['))), Some(AppEvent::PrevTab));
    }

    #[test]
    fn tree_nav_arrows_and_hjkl() {
        let km = KeyMap::default();
        for (code, dir) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('k'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('j'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('h'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('l'), Direction::Right),
        ] {
            assert_eq!(km.to_app_event(press(code)), Some(AppEvent::TreeNav(dir)));
        }
    }

    #[test]
    fn configured_bindings_replace_defaults() {
        let cfg = KeybindingsConfig {
            search_focus: "s".to_string(),
            toggle_focus: "F2".to_string(),
            ..KeybindingsConfig::default()
        };
        let km = KeyMap::from_config(&cfg).unwrap();
        assert_eq!(km.to_app_event(press(KeyCode::Char('s'))), Some(AppEvent::SearchFocus));
        assert_eq!(km.to_app_event(press(KeyCode::F(2))), Some(AppEvent::FocusNext));
        assert_eq!(km.to_app_event(press(KeyCode::Char('/'))), Some(AppEvent::Char('/')));
    }

    #[test]
    fn unknown_binding_is_rejected() {
        let cfg = KeybindingsConfig {
            help: "Hyper".to_string(),
            ..KeybindingsConfig::default()
        };
        assert!(KeyMap::from_config(&cfg).is_err());
    }

    #[test]
    fn backspace_enter_and_resize() {
        let km = KeyMap::default();
        assert_eq!(km.to_app_event(press(KeyCode::Backspace)), Some(AppEvent::Backspace));
        assert_eq!(km.to_app_event(press(KeyCode::Enter)), Some(AppEvent::Enter));
        assert_eq!(km.to_app_event(Event::Resize(120, 40)), Some(AppEvent::Resize(120, 40)));
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(KeyMap::default().to_app_event(press(KeyCode::F(5))), None);
    }

    // ── Insert mode ────────────────────────────────────────────────────────

    #[test]
    fn insert_mode_shortcuts_are_chars() {
        let km = KeyMap::default();
        for ch in ['h', 'j', 'k', 'l', 'q', '/', ':', '?', '[', ']'] {
            assert_eq!(
                km.to_app_event_insert(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "insert mode: '{ch}' should produce Char"
            );
        }
    }

    #[test]
    fn insert_mode_ctrl_c_still_quits() {
        assert_eq!(
            KeyMap::default().to_app_event_insert(ctrl(KeyCode::Char('c'))),
            Some(AppEvent::Quit)
        );
    }
}
