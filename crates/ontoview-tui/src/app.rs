//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command, COMMAND_NAMES, THEME_NAMES},
    event::{AppEvent, KeyMap},
    theme::Theme,
    widgets::{
        class_details::ClassDetails,
        class_tree::{ClassTree, ClassTreeState},
        command_bar::{CommandBar, CommandBarState},
        entity_list::{EntityList, EntityListState},
        help::HelpPopup,
        search_bar::{SearchBar, SearchBarState},
        status_line::{StatusLine, StatusMessage},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ontoview_core::{config::Config, NamedEntity, OntologyService, OntologySnapshot};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

/// The ontology sections shown in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OntologyTab {
    Classes,
    Individuals,
    ObjectProperties,
    DataProperties,
    AnnotationProperties,
}

impl OntologyTab {
    pub const ALL: [OntologyTab; 5] = [
        OntologyTab::Classes,
        OntologyTab::Individuals,
        OntologyTab::ObjectProperties,
        OntologyTab::DataProperties,
        OntologyTab::AnnotationProperties,
    ];

    pub fn title(self) -> &'static str {
        match self {
            OntologyTab::Classes => "Classes",
            OntologyTab::Individuals => "Individuals",
            OntologyTab::ObjectProperties => "Object properties",
            OntologyTab::DataProperties => "Data properties",
            OntologyTab::AnnotationProperties => "Annotation properties",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Entity count for the tab label.
    pub fn count(self, snapshot: &OntologySnapshot) -> usize {
        match self {
            OntologyTab::Classes => snapshot.classes_count,
            other => other.entities(snapshot).len(),
        }
    }

    /// Flat entity list for the non-class tabs. Empty for `Classes`.
    pub fn entities(self, snapshot: &OntologySnapshot) -> &[NamedEntity] {
        match self {
            OntologyTab::Classes => &[],
            OntologyTab::Individuals => &snapshot.individuals,
            OntologyTab::ObjectProperties => &snapshot.object_properties,
            OntologyTab::DataProperties => &snapshot.data_properties,
            OntologyTab::AnnotationProperties => &snapshot.annotation_properties,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub snapshot: OntologySnapshot,
    pub service: Box<dyn OntologyService>,
    pub tree: ClassTreeState,
    pub search: SearchBarState,
    pub entities: EntityListState,
    pub active_tab: OntologyTab,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: KeyMap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub status: Option<StatusMessage>,
    pub quit: bool,
}

impl AppState {
    pub fn set_status_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    pub fn set_status_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::error(text));
    }

    fn expire_status(&mut self, now: Instant) {
        let timeout = Duration::from_secs(self.config.ui.status_timeout_secs);
        if self.status.as_ref().is_some_and(|m| m.is_expired(now, timeout)) {
            self.status = None;
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    /// Build the app around an already-loaded snapshot and the service that
    /// produced it. Fails when the `[keybindings]` section does not resolve.
    pub fn new(
        snapshot: OntologySnapshot,
        service: Box<dyn OntologyService>,
        config: Config,
        theme: Theme,
    ) -> anyhow::Result<Self> {
        let keymap = KeyMap::from_config(&config.keybindings)?;
        let tree = ClassTreeState::new(snapshot.classes.clone());

        let state = AppState {
            snapshot,
            service,
            tree,
            search: SearchBarState::default(),
            entities: EntityListState::default(),
            active_tab: OntologyTab::Classes,
            focus: Focus::Tree,
            prev_focus: Focus::Tree,
            theme,
            config,
            keymap,
            show_help: false,
            command_bar: CommandBarState::default(),
            status: None,
            quit: false,
        };

        Ok(App { state })
    }

    /// Seed the search bar, as if the term had been typed.
    pub fn with_search(mut self, term: &str) -> Self {
        self.state.search = SearchBarState::with_term(term);
        self.state.tree.set_search_term(term);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.state.expire_status(Instant::now());
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(100))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let app_event = if is_insert_mode(self.state.focus) {
                    self.state.keymap.to_app_event_insert(raw)
                } else {
                    self.state.keymap.to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Help | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        match s.focus {
            Focus::Command => handle_command_mode(s, event),
            Focus::Search => handle_search_mode(s, event),
            Focus::Tree => handle_navigation(s, event),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

fn handle_command_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => {
            let input = s.command_bar.input.clone();
            match Command::parse(&input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                    execute_command(s, cmd);
                }
                Err(msg) if msg.is_empty() => {
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                Err(msg) => {
                    // Bar stays open with the error
                    s.command_bar.error = Some(msg);
                }
            }
        }
        AppEvent::FocusNext => complete_command(s),
        AppEvent::Quit => s.quit = true,
        other => s.command_bar.handle(&other),
    }
}

/// Tab completion: command words first, then theme names or class names
/// depending on the command.
fn complete_command(s: &mut AppState) {
    let bar = &mut s.command_bar;
    let hits = if bar.completing_command() {
        bar.complete(COMMAND_NAMES.iter().copied())
    } else if bar.input.trim_start().starts_with("theme ") {
        bar.complete(THEME_NAMES.iter().copied())
    } else {
        let names: Vec<String> = s
            .tree
            .session
            .forest()
            .class_names()
            .into_iter()
            .map(quote_arg)
            .collect();
        bar.complete(names.iter().map(String::as_str))
    };
    tracing::debug!(input = %s.command_bar.input, hits, "command completion");
}

/// Class names with spaces complete to their double-quoted form so the
/// completed line still parses.
fn quote_arg(name: &str) -> String {
    if name.contains(char::is_whitespace) {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

fn handle_search_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape | AppEvent::Enter | AppEvent::FocusNext => {
            tracing::debug!("focus: Search -> Tree");
            s.focus = Focus::Tree;
        }
        AppEvent::Quit => s.quit = true,
        other => {
            if s.search.handle(&other) {
                let term = s.search.term.clone();
                s.tree.set_search_term(&term);
            }
        }
    }
}

fn handle_navigation(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Help => {
            tracing::debug!("help popup opened");
            s.show_help = true;
        }
        AppEvent::CommandMode => {
            tracing::debug!(prev_focus = ?s.focus, "entering command mode");
            s.prev_focus = s.focus;
            s.command_bar.clear();
            s.focus = Focus::Command;
        }
        AppEvent::Quit => {
            tracing::debug!("quit");
            s.quit = true;
        }
        // Search filters the class tree, so focusing it switches there.
        AppEvent::FocusNext | AppEvent::SearchFocus => {
            s.active_tab = OntologyTab::Classes;
            s.focus = Focus::Search;
        }
        AppEvent::NextTab | AppEvent::PrevTab => {
            s.active_tab = if event == AppEvent::NextTab {
                s.active_tab.next()
            } else {
                s.active_tab.prev()
            };
            s.entities.cursor = 0;
            tracing::debug!(tab = ?s.active_tab, "tab switch");
        }
        AppEvent::Resize(_, _) => {}
        other => match s.active_tab {
            OntologyTab::Classes => s.tree.handle(&other),
            tab => {
                let len = tab.entities(&s.snapshot).len();
                s.entities.handle(&other, len);
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: tab bar | body | search bar | status line
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        TabBar::new(&state.snapshot, state.active_tab, &state.theme),
        vert[0],
    );

    match state.active_tab {
        OntologyTab::Classes => {
            let pct = state.config.ui.tree_pane_width_pct.min(100);
            let horiz = Layout::default()
                .direction(LayoutDir::Horizontal)
                .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
                .split(vert[1]);

            frame.render_widget(
                ClassTree::new(
                    &state.tree,
                    state.focus == Focus::Tree,
                    state.config.ui.indent_width,
                    &state.theme,
                ),
                horiz[0],
            );
            let selected = state.tree.rows().into_iter().nth(state.tree.cursor);
            frame.render_widget(
                ClassDetails::new(
                    state.tree.session.forest(),
                    selected.as_ref().map(|r| r.name.as_str()),
                    &state.theme,
                ),
                horiz[1],
            );
        }
        tab => {
            frame.render_widget(
                EntityList::new(
                    tab.title(),
                    tab.entities(&state.snapshot),
                    &state.entities,
                    state.focus == Focus::Tree,
                    &state.theme,
                ),
                vert[1],
            );
        }
    }

    let match_count = state.tree.session.annotated().match_count();
    frame.render_widget(
        SearchBar::new(&state.search, state.focus == Focus::Search, match_count, &state.theme),
        vert[2],
    );
    frame.render_widget(StatusLine::new(state.status.as_ref(), &state.theme), vert[3]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.config.keybindings, &state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Search {
        let sb = SearchBar::new(&state.search, true, match_count, &state.theme);
        frame.set_cursor_position(sb.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
