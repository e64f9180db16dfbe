//! Help popup: centred floating overlay listing keybindings and commands.
//!
//! Bindings are read from the live `[keybindings]` config, so the popup shows
//! what the user actually pressed rather than the defaults.

use crate::theme::Theme;
use ontoview_core::config::KeybindingsConfig;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    keys: &'a KeybindingsConfig,
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(keys: &'a KeybindingsConfig, theme: &'a Theme) -> Self {
        Self { keys, theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(80, 22, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(format!(" ontoview keybindings ({} to close) ", self.keys.help))
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let bindings: Vec<(String, &str)> = vec![
            ("q  /  Ctrl+c".to_string(), "Quit"),
            (self.keys.toggle_focus.clone(), "Cycle focus: tree ↔ search"),
            (self.keys.search_focus.clone(), "Focus search bar"),
            ("Escape".to_string(), "Return focus from search / close popup"),
            (format!("{}  /  {}", self.keys.prev_tab, self.keys.next_tab), "Previous / next section"),
            ("↑ k  /  ↓ j".to_string(), "Move cursor"),
            ("← h  /  → l".to_string(), "Collapse / expand class"),
            ("Enter".to_string(), "Toggle class"),
            (self.keys.help.clone(), "Toggle this help popup"),
            (self.keys.command.clone(), "Command line"),
            ("Tab (in command line)".to_string(), "Complete command, theme or class name"),
            (String::new(), ""),
            (":load <path>".to_string(), "Load an ontology snapshot"),
            (":class <name> [parent …]".to_string(), "Create a class"),
            (":export [file]".to_string(), "Export the ontology"),
            (":expand".to_string(), "Expand every visible class"),
            (":theme <name>".to_string(), "Switch theme (default, gruvbox)"),
            (":q".to_string(), "Quit"),
        ];

        let lines: Vec<Line> = bindings
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<26}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
